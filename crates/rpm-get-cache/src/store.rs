use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::key::{decode_key, encode_key};
use crate::staging::StagedFile;
use crate::{Error, Result};

/// A key resolved against the cache root, with existence checked at the time
/// it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub path: PathBuf,
    pub exists: bool,
}

/// Flat key→file cache rooted at a single directory.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if needed. Safe to call repeatedly.
    pub fn ensure_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(Error::NotADirectory {
                    path: self.root.clone(),
                });
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::CreateRoot {
                    path: self.root.clone(),
                    source,
                });
            }
        }

        debug!(root = %self.root.display(), "creating cache root");
        fs::create_dir_all(&self.root).map_err(|source| Error::CreateRoot {
            path: self.root.clone(),
            source,
        })
    }

    /// Where `key` lives. Pure: no filesystem access.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(encode_key(key))
    }

    pub fn exists(&self, key: &str) -> bool {
        self.path_for(key).is_file()
    }

    pub fn entry(&self, key: &str) -> CacheEntry {
        let path = self.path_for(key);
        let exists = path.is_file();
        CacheEntry {
            key: key.to_string(),
            path,
            exists,
        }
    }

    /// Open a staging file in the root, creating the root first.
    pub fn stage(&self) -> Result<StagedFile> {
        self.ensure_root()?;
        StagedFile::create_in(&self.root)
    }

    /// Move a staged file into place under `key`.
    pub fn commit(&self, staged: StagedFile, key: &str) -> Result<PathBuf> {
        let destination = self.path_for(key);
        debug!(key, path = %destination.display(), "committing cache entry");
        staged.persist(destination)
    }

    /// Committed entries, sorted by key. Staging files and names that do not
    /// decode to a key are skipped. A missing root is an empty cache.
    pub fn entries(&self) -> Result<Vec<CacheEntry>> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::Read {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut entries = Vec::new();
        for dirent in read_dir {
            let dirent = dirent.map_err(|source| Error::Read {
                path: self.root.clone(),
                source,
            })?;
            let path = dirent.path();
            if !path.is_file() {
                continue;
            }
            let Some(key) = dirent.file_name().to_str().and_then(decode_key) else {
                continue;
            };
            entries.push(CacheEntry {
                key,
                path,
                exists: true,
            });
        }
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }

    /// Delete `key`. Returns whether anything was removed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(Error::Remove { path, source }),
        }
    }

    /// Delete every committed entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let entries = self.entries()?;
        let mut removed = 0;
        for entry in &entries {
            if self.remove(&entry.key)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Size in bytes of a cached entry.
    pub fn size_of(&self, key: &str) -> Result<u64> {
        let path = self.path_for(key);
        fs::metadata(&path)
            .map(|m| m.len())
            .map_err(|source| Error::Read { path, source })
    }

    pub fn sha256(&self, key: &str) -> Result<String> {
        crate::sha256_file(&self.path_for(key))
    }
}
