use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use rpm_get_cache::CacheStore;
use rpm_get_platform::{LogSink, NullSink};
use tracing::{debug, warn};

use crate::data::{ArtifactRequest, DownloadStats, FetchOptions, FetchPhase, ResolvedLocation};
use crate::effects::downloader::Downloader;
use crate::effects::http::HttpClient;
use crate::effects::resolver::Resolver;
use crate::error::Result;

/// Outcome of [`Fetcher::fetch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    /// `None` when an explicit key was already cached and nothing was
    /// resolved.
    pub location: Option<ResolvedLocation>,
    pub key: String,
    pub path: PathBuf,
    pub stats: DownloadStats,
}

/// Resolve, then download into the cache, reporting to a [`LogSink`].
pub struct Fetcher<C> {
    resolver: Resolver<C>,
    downloader: Downloader<C>,
    options: FetchOptions,
    sink: Arc<dyn LogSink>,
}

impl<C: HttpClient + Clone> Fetcher<C> {
    pub fn new(client: C, cache: CacheStore, options: FetchOptions) -> Self {
        let resolver = Resolver::new(client.clone())
            .max_redirects(options.max_redirects)
            .extension_token(options.extension_token.clone());
        Self {
            resolver,
            downloader: Downloader::new(client, cache),
            options,
            sink: Arc::new(NullSink),
        }
    }
}

impl<C: HttpClient> Fetcher<C> {
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn cache(&self) -> &CacheStore {
        self.downloader.cache()
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub async fn resolve(&self, request: &ArtifactRequest) -> Result<ResolvedLocation> {
        let headers = request.headers(&self.options.user_agent);
        self.resolver.resolve(&request.source_url, &headers).await
    }

    /// Download an already-resolved location under `key`.
    pub async fn download<F>(
        &self,
        request: &ArtifactRequest,
        location: &ResolvedLocation,
        key: &str,
        on_progress: F,
    ) -> Result<DownloadStats>
    where
        F: FnMut(u64, Option<u64>),
    {
        let headers = request.headers(&self.options.user_agent);
        self.downloader.download(location, key, &headers, on_progress).await
    }

    /// Resolve `request` and download it into the cache.
    ///
    /// The cache key is `key` if given, else the canonical filename of the
    /// resolved URL. An explicit key that is already cached short-circuits
    /// before any request is sent.
    pub async fn fetch<F>(
        &self,
        request: &ArtifactRequest,
        key: Option<&str>,
        on_progress: F,
    ) -> Result<FetchReport>
    where
        F: FnMut(u64, Option<u64>),
    {
        let started = Instant::now();
        let mut phase = Phase::default();
        let cache = self.cache();

        if let Some(key) = key.filter(|key| cache.exists(key)) {
            phase.enter(FetchPhase::Downloading);
            let stats = DownloadStats::cached(cache.size_of(key)?, started.elapsed());
            phase.enter(FetchPhase::Completed);
            self.sink.info(&format!("Using cached {key}"));
            return Ok(FetchReport {
                location: None,
                key: key.to_string(),
                path: cache.path_for(key),
                stats,
            });
        }

        phase.enter(FetchPhase::Resolving);
        self.sink.progress(&format!("Resolving {}", request.source_url));
        let location = match self.resolve(request).await {
            Ok(location) => location,
            Err(e) => {
                phase.enter(FetchPhase::Failed);
                self.sink.error(&format!("Could not resolve {}", request.source_url));
                return Err(e);
            }
        };

        let key = key.unwrap_or(location.canonical_filename.as_str()).to_string();
        phase.enter(FetchPhase::Downloading);
        if !cache.exists(&key) {
            self.sink.progress(&format!("Downloading {}", location.final_url));
        }

        let stats = match self.download(request, &location, &key, on_progress).await {
            Ok(stats) => stats,
            Err(e) => {
                phase.enter(FetchPhase::Failed);
                self.sink.error(&format!("Could not download {}", location.final_url));
                return Err(e);
            }
        };
        phase.enter(FetchPhase::Completed);

        if stats.cache_hit {
            self.sink.info(&format!("Using cached {key}"));
        } else {
            self.sink.info(&format!("Saved {key} ({} bytes)", stats.bytes_transferred));
        }

        Ok(FetchReport {
            location: Some(location),
            path: cache.path_for(&key),
            key,
            stats,
        })
    }
}

/// Per-invocation phase tracking.
#[derive(Debug, Default)]
struct Phase(FetchPhase);

impl Phase {
    fn enter(&mut self, next: FetchPhase) {
        match self.0.advance(next) {
            Ok(phase) => {
                debug!(from = %self.0, to = %phase, "fetch phase");
                self.0 = phase;
            }
            Err(e) => {
                debug_assert!(false, "{e}");
                warn!("{e}");
            }
        }
    }
}
