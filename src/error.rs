use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors a sort routine can report. Only routines that allocate scratch memory produce them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("out of memory: failed to reserve scratch space for {elements} elements")]
    OutOfMemory { elements: usize },
}

/// Errors of the read, sort and print pipeline.
#[derive(Debug, Error)]
pub enum ShimError {
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("out of memory: failed to reserve {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("sort failed: {0}")]
    Sort(#[from] SortError),

    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidConfig {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ShimError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();

        if source.kind() == io::ErrorKind::NotFound {
            ShimError::FileNotFound { path }
        } else {
            ShimError::Read { path, source }
        }
    }
}
