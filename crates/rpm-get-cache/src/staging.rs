use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::{Error, Result};

pub(crate) const STAGING_PREFIX: &str = ".rpm-get-";
pub(crate) const STAGING_SUFFIX: &str = ".part";

/// A temporary file inside the cache root that becomes a cache entry on
/// [`CacheStore::commit`](crate::CacheStore::commit).
///
/// Dropping it without committing deletes the file, so a failed transfer
/// never leaves anything under an entry's name.
#[derive(Debug)]
pub struct StagedFile {
    inner: NamedTempFile,
}

impl StagedFile {
    pub(crate) fn create_in(root: &Path) -> Result<Self> {
        let inner = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(root)
            .map_err(|source| Error::Stage {
                path: root.to_path_buf(),
                source,
            })?;
        Ok(Self { inner })
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// A second handle to the staged file, for writers that need ownership
    /// (for example an async file).
    pub fn reopen(&self) -> Result<File> {
        self.inner.reopen().map_err(|source| Error::Stage {
            path: self.path().to_path_buf(),
            source,
        })
    }

    /// Atomically rename onto `destination`, replacing whatever was there.
    pub(crate) fn persist(self, destination: PathBuf) -> Result<PathBuf> {
        match self.inner.persist(&destination) {
            Ok(_) => Ok(destination),
            // The returned handle is dropped here, which removes the file.
            Err(e) => Err(Error::Commit {
                path: destination,
                source: e.error,
            }),
        }
    }
}
