use std::time::Instant;

use futures_util::StreamExt;
use rpm_get_cache::CacheStore;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

use crate::core::{ProgressMeter, is_success};
use crate::data::{DownloadStats, ResolvedLocation};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Streams a resolved URL into a [`CacheStore`] entry.
#[derive(Debug, Clone)]
pub struct Downloader<C> {
    client: C,
    cache: CacheStore,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(client: C, cache: CacheStore) -> Self {
        Self { client, cache }
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Download `location` into the cache under `key`.
    ///
    /// A key that is already cached returns at once without touching the
    /// network. Otherwise the body goes to a staging file that is renamed
    /// onto the key only after every declared byte has arrived; on any error
    /// the staging file is dropped and the entry is left as it was.
    ///
    /// `on_progress(transferred, total)` runs once per non-empty chunk, after
    /// the chunk is on disk. `transferred` never decreases and never exceeds
    /// a known `total`.
    pub async fn download<F>(
        &self,
        location: &ResolvedLocation,
        key: &str,
        headers: &[(String, String)],
        mut on_progress: F,
    ) -> Result<DownloadStats>
    where
        F: FnMut(u64, Option<u64>),
    {
        let started = Instant::now();
        if self.cache.exists(key) {
            let size = self.cache.size_of(key)?;
            debug!(key, size, "cache hit");
            return Ok(DownloadStats::cached(size, started.elapsed()));
        }

        let url = location.final_url.as_str();
        let response = self
            .client
            .get(url, headers)
            .await
            .map_err(|e| FetchError::network(url, e))?;
        if !is_success(response.status) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let total = response.content_length;
        let staged = self.cache.stage()?;
        let write_err = |source| FetchError::Write {
            path: staged.path().to_path_buf(),
            source,
        };
        let mut file = tokio::fs::File::from_std(staged.reopen()?);
        debug!(url, key, ?total, staging = %staged.path().display(), "downloading");

        let meter = ProgressMeter::start();
        let mut transferred = 0u64;
        let mut body = response.body;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| FetchError::network(url, e))?;
            if chunk.is_empty() {
                continue;
            }

            let received = transferred + chunk.len() as u64;
            if let Some(declared) = total.filter(|&declared| received > declared) {
                return Err(FetchError::LengthExceeded {
                    url: url.to_string(),
                    declared,
                    received,
                });
            }

            file.write_all(&chunk).await.map_err(write_err)?;
            transferred = received;
            on_progress(transferred, total);

            let sample = meter.sample(transferred, total);
            trace!(
                transferred,
                rate = sample.rate_bytes_per_sec,
                eta = ?sample.eta,
                "chunk written"
            );
        }

        if let Some(declared) = total.filter(|&declared| transferred < declared) {
            return Err(FetchError::Truncated {
                url: url.to_string(),
                declared,
                received: transferred,
            });
        }

        file.flush().await.map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        let path = self.cache.commit(staged, key)?;
        let stats = DownloadStats {
            bytes_transferred: transferred,
            total_bytes: total,
            succeeded: true,
            cache_hit: false,
            elapsed: started.elapsed(),
        };
        debug!(
            path = %path.display(),
            bytes = transferred,
            rate = stats.average_rate(),
            "download committed"
        );
        Ok(stats)
    }
}
