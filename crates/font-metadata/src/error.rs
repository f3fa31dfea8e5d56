//! Error types for metadata table loading.

use std::result;

/// Errors that can occur while loading or querying a metadata table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse metadata table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("font family \"{0}\" appears more than once in the metadata table")]
    DuplicateFamily(String),

    #[error("font family \"{0}\" is not in the metadata table")]
    UnknownFamily(String),
}

pub type Result<T> = result::Result<T, Error>;
