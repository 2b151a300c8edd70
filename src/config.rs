//! Environment based configuration of the binaries.
//!
//! | Variable                 | Used by        | Default       |
//! |--------------------------|----------------|---------------|
//! | `CLASSIC_SORT_INPUT`     | `classic_sort` | `numbers.bin` |
//! | `CLASSIC_SORT_ALGORITHM` | `classic_sort` | `identity`    |
//! | `CLASSIC_SORT_OUTPUT`    | `numgen`       | `numbers.bin` |
//! | `CLASSIC_SORT_SIZE`      | `numgen`       | `10000`       |
//! | `CLASSIC_SORT_SEED`      | `numgen`       | random        |
//!
//! Log output is controlled separately through `RUST_LOG`.

use std::env;
use std::path::PathBuf;

use crate::algorithm::Algorithm;
use crate::error::ShimError;

pub const DEFAULT_DATA_FILE: &str = "numbers.bin";
pub const DEFAULT_GEN_SIZE: usize = 10_000;

pub const INPUT_VAR: &str = "CLASSIC_SORT_INPUT";
pub const ALGORITHM_VAR: &str = "CLASSIC_SORT_ALGORITHM";
pub const OUTPUT_VAR: &str = "CLASSIC_SORT_OUTPUT";
pub const SIZE_VAR: &str = "CLASSIC_SORT_SIZE";
pub const SEED_VAR: &str = "CLASSIC_SORT_SEED";

/// What `classic_sort` reads and how it sorts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub algorithm: Algorithm,
}

impl RunConfig {
    pub fn new(input: impl Into<PathBuf>, algorithm: Algorithm) -> Self {
        Self {
            input: input.into(),
            algorithm,
        }
    }

    pub fn from_env() -> Result<Self, ShimError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, unset or empty variables fall back to
    /// their defaults.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ShimError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let input = lookup(INPUT_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let algorithm = match lookup(ALGORITHM_VAR).filter(|name| !name.is_empty()) {
            Some(name) => name.parse::<Algorithm>().map_err(|err| ShimError::InvalidConfig {
                key: ALGORITHM_VAR,
                value: name.clone(),
                reason: format!("{err}"),
            })?,
            None => Algorithm::default(),
        };

        Ok(Self { input, algorithm })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE, Algorithm::default())
    }
}

/// What `numgen` writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub output: PathBuf,
    pub size: usize,
    /// Fixed seed for reproducible files, `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl GenConfig {
    pub fn from_env() -> Result<Self, ShimError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// See [`RunConfig::from_lookup`].
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ShimError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let output = lookup(OUTPUT_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let size = match lookup(SIZE_VAR).filter(|value| !value.is_empty()) {
            Some(value) => parse_var(SIZE_VAR, &value)?,
            None => DEFAULT_GEN_SIZE,
        };

        let seed = lookup(SEED_VAR)
            .filter(|value| !value.is_empty())
            .map(|value| parse_var(SEED_VAR, &value))
            .transpose()?;

        Ok(Self { output, size, seed })
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_DATA_FILE),
            size: DEFAULT_GEN_SIZE,
            seed: None,
        }
    }
}

fn parse_var<T>(key: &'static str, value: &str) -> Result<T, ShimError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|err| ShimError::InvalidConfig {
            key,
            value: value.to_string(),
            reason: err.to_string(),
        })
}
