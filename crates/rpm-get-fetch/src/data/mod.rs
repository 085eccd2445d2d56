//! Plain data passed between the resolver, the downloader and callers.

pub mod location;
pub mod options;
pub mod progress;
pub mod request;

pub use location::ResolvedLocation;
pub use options::{DEFAULT_MAX_REDIRECTS, FetchOptions, FetchPhase, IllegalTransition, default_user_agent};
pub use progress::{DownloadProgress, DownloadStats};
pub use request::{ArtifactRequest, AuthScheme};
