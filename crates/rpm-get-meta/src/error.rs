use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid query path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, MetaError>;
