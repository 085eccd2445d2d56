//! Redirect resolution and cached, atomic artifact downloads.
//!
//! # Architecture
//!
//! - [`data`]: requests, resolved locations, progress and options
//! - [`core`]: pure helpers (redirect codes, filename normalization, rates)
//! - [`effects`]: the HTTP seam, the resolver, the downloader and the
//!   [`Fetcher`] pipeline that ties them to a [`CacheStore`]
//!
//! Redirects are followed by an explicit bounded loop; the HTTP client is
//! expected never to follow them itself. A download lands in a staging file
//! inside the cache root and is renamed onto its key only once the body is
//! complete, so a cache entry is always a whole artifact.
//!
//! [`CacheStore`]: rpm_get_cache::CacheStore

pub mod blocking;
pub mod core;
pub mod data;
pub mod effects;
mod error;
pub mod release;

pub use blocking::BlockingFetcher;
pub use crate::core::{canonical_filename, is_redirect, normalize_filename};
pub use data::{
    ArtifactRequest, AuthScheme, DownloadProgress, DownloadStats, FetchOptions, FetchPhase,
    ResolvedLocation,
};
pub use effects::{
    BoxStream, Downloader, FetchReport, Fetcher, Head, HttpClient, Resolver, StreamResponse,
};
pub use error::{ErrorKind, FetchError, Result};
pub use release::{ParseReleaseSourceError, ReleaseApis, ReleaseSource};

#[cfg(feature = "reqwest")]
pub use effects::{DEFAULT_CONNECT_TIMEOUT, ReqwestClient};
