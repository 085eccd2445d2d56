//! Synchronous facade over [`Fetcher`].

use std::io;

use tokio::runtime::{Builder, Runtime};

use crate::data::{ArtifactRequest, DownloadStats, ResolvedLocation};
use crate::effects::{FetchReport, Fetcher, HttpClient};
use crate::error::Result;

/// Drives a [`Fetcher`] on its own current-thread runtime.
///
/// Every call blocks the calling thread until the transfer ends, and the
/// progress callback runs on that same thread between chunks. Must not be
/// used from inside another Tokio runtime.
pub struct BlockingFetcher<C> {
    inner: Fetcher<C>,
    runtime: Runtime,
}

impl<C: HttpClient> BlockingFetcher<C> {
    pub fn new(inner: Fetcher<C>) -> io::Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &Fetcher<C> {
        &self.inner
    }

    pub fn resolve(&self, request: &ArtifactRequest) -> Result<ResolvedLocation> {
        self.runtime.block_on(self.inner.resolve(request))
    }

    pub fn download<F>(
        &self,
        request: &ArtifactRequest,
        location: &ResolvedLocation,
        key: &str,
        on_progress: F,
    ) -> Result<DownloadStats>
    where
        F: FnMut(u64, Option<u64>),
    {
        self.runtime
            .block_on(self.inner.download(request, location, key, on_progress))
    }

    pub fn fetch<F>(&self, request: &ArtifactRequest, key: Option<&str>, on_progress: F) -> Result<FetchReport>
    where
        F: FnMut(u64, Option<u64>),
    {
        self.runtime.block_on(self.inner.fetch(request, key, on_progress))
    }
}
