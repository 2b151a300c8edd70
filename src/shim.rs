//! Moves buffers between raw `i32` files, memory and text.
//!
//! The file format is a flat sequence of `i32` values in native byte order without any header.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::mem;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use crate::algorithm::Algorithm;
use crate::config::{GenConfig, RunConfig, SIZE_VAR};
use crate::error::ShimError;

pub const ELEMENT_SIZE: usize = mem::size_of::<i32>();

/// Largest `size` [`generate_unique`] accepts, the values `[1, 2 * size)` must fit into `i32`.
pub const MAX_GEN_SIZE: usize = 1 << 30;

/// Summary of one [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub elements: usize,
    pub sort_time: Duration,
}

/// Decodes `bytes` into `i32` values, 4 bytes per element in native byte order.
///
/// A trailing partial element is dropped.
pub fn decode(bytes: &[u8]) -> Vec<i32> {
    let chunks = bytes.chunks_exact(ELEMENT_SIZE);
    log_trailing(chunks.remainder().len());

    chunks.map(decode_element).collect()
}

/// Like [`decode`], but a failed buffer allocation is reported as [`ShimError::OutOfMemory`].
pub fn try_decode(bytes: &[u8]) -> Result<Vec<i32>, ShimError> {
    let chunks = bytes.chunks_exact(ELEMENT_SIZE);
    log_trailing(chunks.remainder().len());

    let mut buffer: Vec<i32> = Vec::new();
    buffer
        .try_reserve_exact(chunks.len())
        .map_err(|_| ShimError::OutOfMemory {
            bytes: chunks.len() * ELEMENT_SIZE,
        })?;
    buffer.extend(chunks.map(decode_element));

    Ok(buffer)
}

pub fn encode(v: &[i32]) -> Vec<u8> {
    v.iter().flat_map(|val| val.to_ne_bytes()).collect()
}

/// Renders `v` as decimal values separated by single spaces, terminated by a newline.
pub fn render(v: &[i32]) -> String {
    let mut out = v
        .iter()
        .map(|val| val.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    out.push('\n');

    out
}

/// Reads and decodes the whole file at `path`.
///
/// The byte buffer is reserved up front from the file size, so a file too large for the
/// available memory fails with [`ShimError::OutOfMemory`] instead of aborting.
pub fn read_buffer(path: impl AsRef<Path>) -> Result<Vec<i32>, ShimError> {
    let path = path.as_ref();

    let mut file = File::open(path).map_err(|err| ShimError::read(path, err))?;
    let file_len = file
        .metadata()
        .map_err(|err| ShimError::read(path, err))?
        .len();
    let byte_len = usize::try_from(file_len).unwrap_or(usize::MAX);

    let mut bytes: Vec<u8> = Vec::new();
    bytes
        .try_reserve_exact(byte_len)
        .map_err(|_| ShimError::OutOfMemory { bytes: byte_len })?;
    file.read_to_end(&mut bytes)
        .map_err(|err| ShimError::read(path, err))?;

    debug!("read {} bytes from {}", bytes.len(), path.display());

    try_decode(&bytes)
}

pub fn write_buffer(path: impl AsRef<Path>, v: &[i32]) -> Result<(), ShimError> {
    let path = path.as_ref();

    fs::write(path, encode(v)).map_err(|source| ShimError::Write {
        target: path.display().to_string(),
        source,
    })?;

    debug!("wrote {} elements to {}", v.len(), path.display());

    Ok(())
}

/// Reads the configured input, sorts it and prints it to `out`.
///
/// The buffer is owned by this call and released on every return path.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunReport, ShimError> {
    let mut buffer = read_buffer(&config.input)?;

    let start = Instant::now();
    config.algorithm.try_sort(&mut buffer)?;
    let sort_time = start.elapsed();

    info!(
        "{} sorted {} elements in {:?}",
        config.algorithm,
        buffer.len(),
        sort_time
    );

    print_buffer(config.algorithm, &buffer, out)?;

    Ok(RunReport {
        algorithm: config.algorithm,
        elements: buffer.len(),
        sort_time,
    })
}

/// Writes the header line and the rendered buffer.
pub fn print_buffer<W: Write>(
    algorithm: Algorithm,
    v: &[i32],
    out: &mut W,
) -> Result<(), ShimError> {
    let header = match algorithm {
        Algorithm::Identity => "Numbers read from file:",
        _ => "Sorted numbers read from file:",
    };

    writeln!(out, "{header}")
        .and_then(|()| out.write_all(render(v).as_bytes()))
        .and_then(|()| out.flush())
        .map_err(|source| ShimError::Write {
            target: "output".to_string(),
            source,
        })
}

/// Draws `size` distinct values from `[1, 2 * size)` in random order.
pub fn generate_unique<R>(size: usize, rng: &mut R) -> Result<Vec<i32>, ShimError>
where
    R: Rng + ?Sized,
{
    if size > MAX_GEN_SIZE {
        return Err(ShimError::InvalidConfig {
            key: SIZE_VAR,
            value: size.to_string(),
            reason: format!("at most {MAX_GEN_SIZE} distinct i32 values can be generated"),
        });
    }

    let range_len = (size * 2).saturating_sub(1);

    Ok(index::sample(rng, range_len, size)
        .into_iter()
        .map(|idx| idx as i32 + 1)
        .collect())
}

/// Generates a data file as described by `config` and returns the number of elements written.
pub fn generate_file(config: &GenConfig) -> Result<usize, ShimError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let numbers = generate_unique(config.size, &mut rng)?;
    write_buffer(&config.output, &numbers)?;

    info!(
        "generated {} unique numbers into {}",
        numbers.len(),
        config.output.display()
    );

    Ok(numbers.len())
}

#[inline]
fn decode_element(chunk: &[u8]) -> i32 {
    let mut raw = [0u8; ELEMENT_SIZE];
    raw.copy_from_slice(chunk);

    i32::from_ne_bytes(raw)
}

fn log_trailing(trailing: usize) {
    if trailing != 0 {
        warn!("ignoring {trailing} trailing bytes that do not form a complete element");
    }
}
