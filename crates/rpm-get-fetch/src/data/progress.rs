use std::time::Duration;

use crate::core::average_rate;

/// Snapshot of a running transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadProgress {
    pub bytes_transferred: u64,

    /// From `Content-Length`; `None` makes the transfer indeterminate.
    pub total_bytes: Option<u64>,

    /// Average since the transfer started.
    pub rate_bytes_per_sec: f64,

    pub eta: Option<Duration>,
}

impl DownloadProgress {
    /// Percentage of completion, `None` if `total_bytes` is unknown.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        self.total_bytes.map(|total| {
            if total == 0 {
                100.0
            } else {
                (self.bytes_transferred as f64 / total as f64) * 100.0
            }
        })
    }

    pub fn is_indeterminate(&self) -> bool {
        self.total_bytes.is_none()
    }
}

/// Terminal result of a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadStats {
    /// Bytes received over the network; zero on a cache hit.
    pub bytes_transferred: u64,
    /// Declared length, or the size on disk for a cache hit.
    pub total_bytes: Option<u64>,
    pub succeeded: bool,
    pub cache_hit: bool,
    pub elapsed: Duration,
}

impl DownloadStats {
    pub(crate) fn cached(size_on_disk: u64, elapsed: Duration) -> Self {
        Self {
            bytes_transferred: 0,
            total_bytes: Some(size_on_disk),
            succeeded: true,
            cache_hit: true,
            elapsed,
        }
    }

    pub fn average_rate(&self) -> f64 {
        average_rate(self.bytes_transferred, self.elapsed)
    }
}
