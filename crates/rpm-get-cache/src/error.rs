use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cache root {path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to create cache root {path}: {source}")]
    CreateRoot { path: PathBuf, source: io::Error },

    #[error("failed to create staging file in {path}: {source}")]
    Stage { path: PathBuf, source: io::Error },

    #[error("failed to move staged file into {path}: {source}")]
    Commit { path: PathBuf, source: io::Error },

    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to remove {path}: {source}")]
    Remove { path: PathBuf, source: io::Error },
}

impl Error {
    /// Path the failed operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::NotADirectory { path }
            | Error::CreateRoot { path, .. }
            | Error::Stage { path, .. }
            | Error::Commit { path, .. }
            | Error::Read { path, .. }
            | Error::Remove { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
