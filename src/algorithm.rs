use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SortError;
use crate::identity;
use crate::stable::{rust_insertion, rust_merge};
use crate::unstable::{rust_quick, rust_selection};

/// Selects one of the sort routines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// No sort, the buffer passes through unchanged.
    #[default]
    Identity,
    Insertion,
    Merge,
    Quick,
    Selection,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Identity,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Selection,
    ];

    /// The algorithms that actually reorder the buffer.
    pub const SORTS: [Algorithm; 4] = [
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Selection,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Identity => "identity",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Selection => "selection",
        }
    }

    /// Whether equal elements keep their relative order. Identity trivially does.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            Algorithm::Identity | Algorithm::Insertion | Algorithm::Merge
        )
    }

    /// Whether the routine needs scratch memory proportional to the input.
    pub fn allocates(self) -> bool {
        matches!(self, Algorithm::Merge)
    }

    pub fn sort<T: Ord>(self, v: &mut [T]) {
        match self {
            Algorithm::Identity => identity::sort(v),
            Algorithm::Insertion => rust_insertion::sort(v),
            Algorithm::Merge => rust_merge::sort(v),
            Algorithm::Quick => rust_quick::sort(v),
            Algorithm::Selection => rust_selection::sort(v),
        }
    }

    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Identity => identity::sort_by(v, compare),
            Algorithm::Insertion => rust_insertion::sort_by(v, compare),
            Algorithm::Merge => rust_merge::sort_by(v, compare),
            Algorithm::Quick => rust_quick::sort_by(v, compare),
            Algorithm::Selection => rust_selection::sort_by(v, compare),
        }
    }

    /// Like [`Algorithm::sort`], but a failed scratch allocation is returned as
    /// [`SortError::OutOfMemory`] with `v` left untouched.
    pub fn try_sort<T: Ord>(self, v: &mut [T]) -> Result<(), SortError> {
        match self {
            Algorithm::Merge => rust_merge::try_sort(v),
            other => {
                other.sort(v);
                Ok(())
            }
        }
    }

    pub fn try_sort_by<T, F>(self, v: &mut [T], compare: F) -> Result<(), SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        match self {
            Algorithm::Merge => rust_merge::try_sort_by(v, compare),
            other => {
                other.sort_by(v, compare);
                Ok(())
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by [`Algorithm::from_str`] for names that match no algorithm.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected one of: identity, insertion, merge, quick, selection")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Accepts the canonical names, their `sort` suffixed forms (`quicksort`, `merge_sort`,
    /// `insertionSort`) and `control` for identity. Case is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '-'], "");
        let base = normalized.strip_suffix("sort").unwrap_or(&normalized);

        match base {
            "identity" | "control" | "none" => Ok(Algorithm::Identity),
            "insertion" => Ok(Algorithm::Insertion),
            "merge" => Ok(Algorithm::Merge),
            "quick" => Ok(Algorithm::Quick),
            "selection" => Ok(Algorithm::Selection),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
