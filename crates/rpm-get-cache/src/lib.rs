//! Local artifact cache for rpm-get.
//!
//! The cache is a flat directory: one file per key, named by a pure and
//! injective encoding of the key. Nothing is held in memory, so every query
//! goes back to the filesystem. Downloads are written to hidden staging files
//! in the same directory and renamed into place, which keeps readers from
//! ever observing a partial artifact.
//!
//! There is no eviction: entries stay until [`CacheStore::remove`] or
//! [`CacheStore::clear`] is called, or something outside the tool deletes
//! them.

mod digest;
mod error;
mod key;
mod staging;
mod store;

pub use digest::sha256_file;
pub use error::{Error, Result};
pub use key::{decode_key, encode_key};
pub use staging::StagedFile;
pub use store::{CacheEntry, CacheStore};
