//! Error types for the generation pipeline.

use std::{io, path::PathBuf};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can stop a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read a metadata table from disk.
    #[error("Failed to read metadata table '{path}': {source}")]
    ReadTable { path: PathBuf, source: io::Error },

    /// Failed to reach the metadata URL.
    #[error("Failed to fetch {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    /// The metadata URL answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// The table could not be parsed or queried.
    #[error(transparent)]
    Table(#[from] fontdecl_metadata::Error),

    /// Identifier collision or invalid family schema.
    #[error(transparent)]
    Schema(#[from] fontdecl_schema::Error),

    /// Writing the output failed; any previous file at `path` is untouched.
    #[error("Failed to write '{path}': {source}")]
    Emission { path: PathBuf, source: io::Error },
}
