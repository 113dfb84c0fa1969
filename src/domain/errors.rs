use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a reading library document.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("library file {path} is not a valid reading record list")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid reading record list")]
    Parse(#[from] serde_json::Error),
}
