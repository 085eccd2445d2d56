//! Error types for rpm-get-fetch.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connection, timeout, bad status, bad redirect or a body that does not
    /// match its declared length.
    Network,
    /// More redirects than the configured bound.
    RedirectLoop,
    /// Cache root, staging file or final rename.
    Filesystem,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("more than {limit} redirects starting from {url}")]
    RedirectLoop { url: String, limit: u32 },

    #[error("unusable redirect from {url}: {reason}")]
    InvalidRedirect { url: String, reason: String },

    #[error("{url} sent more than the declared {declared} bytes (at least {received})")]
    LengthExceeded {
        url: String,
        declared: u64,
        received: u64,
    },

    #[error("{url} ended after {received} of {declared} bytes")]
    Truncated {
        url: String,
        declared: u64,
        received: u64,
    },

    #[error(transparent)]
    Cache(#[from] rpm_get_cache::Error),

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    pub(crate) fn network(url: &str, reason: impl fmt::Display) -> Self {
        FetchError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network { .. }
            | FetchError::Status { .. }
            | FetchError::InvalidRedirect { .. }
            | FetchError::LengthExceeded { .. }
            | FetchError::Truncated { .. } => ErrorKind::Network,
            FetchError::RedirectLoop { .. } => ErrorKind::RedirectLoop,
            FetchError::Cache(_) | FetchError::Write { .. } => ErrorKind::Filesystem,
        }
    }

    /// HTTP status of a [`FetchError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
