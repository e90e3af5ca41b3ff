// src/error.rs
use thiserror::Error;

/// Errors for the crate's fallible helpers.
///
/// Filter classification and matching are total over all string inputs and
/// never produce an error; only path resolution can fail.
#[derive(Debug, Error)]
pub enum FilterKitError {
    #[error("failed to locate the running executable: {source}")]
    ExecutablePath {
        #[source]
        source: std::io::Error,
    },

    #[error("executable path has no parent directory")]
    MissingParentDir,
}

pub type Result<T> = std::result::Result<T, FilterKitError>;
