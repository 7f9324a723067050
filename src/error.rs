//! Errors from the configuration surface. The kernel itself cannot fail.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DuotoneError>;

#[derive(Debug, Error)]
pub enum DuotoneError {
    #[error("cannot read tone config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tone config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value that would poison every pixel it touches.
    #[error("tone config field `{field}` is not finite")]
    NonFinite { field: &'static str },
}
