use std::time::{Duration, Instant};

use crate::data::DownloadProgress;

/// Bytes per second over `elapsed`; zero before any time has passed.
pub fn average_rate(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 { bytes as f64 / secs } else { 0.0 }
}

/// Time left at `rate`. Unknown while the total is unknown or nothing has
/// been measured yet.
pub fn eta(transferred: u64, total: Option<u64>, rate: f64) -> Option<Duration> {
    let total = total?;
    if !(rate > 0.0 && rate.is_finite()) {
        return None;
    }
    let remaining = total.saturating_sub(transferred);
    Duration::try_from_secs_f64(remaining as f64 / rate).ok()
}

/// Turns byte counts into [`DownloadProgress`] samples relative to a start
/// instant.
#[derive(Debug, Clone, Copy)]
pub struct ProgressMeter {
    started: Instant,
}

impl ProgressMeter {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn sample(&self, transferred: u64, total: Option<u64>) -> DownloadProgress {
        Self::sample_at(transferred, total, self.elapsed())
    }

    pub fn sample_at(transferred: u64, total: Option<u64>, elapsed: Duration) -> DownloadProgress {
        let rate = average_rate(transferred, elapsed);
        DownloadProgress {
            bytes_transferred: transferred,
            total_bytes: total,
            rate_bytes_per_sec: rate,
            eta: eta(transferred, total, rate),
        }
    }
}
