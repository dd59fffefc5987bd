/// Error types for the character mapper
///
/// Anomalies found while comparing the texts (length mismatch, conflicting
/// mappings) are not errors; they travel in the `MappingReport` instead.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading inputs, reading configuration or writing output
#[derive(Debug, Error)]
pub enum MappingError {
    /// An input file could not be opened or is not valid UTF-8
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is missing or malformed
    #[error("invalid configuration file {}: {detail}", .path.display())]
    Config { path: PathBuf, detail: String },
}

impl MappingError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        MappingError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        MappingError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result alias used throughout the library
pub type Result<T, E = MappingError> = std::result::Result<T, E>;
