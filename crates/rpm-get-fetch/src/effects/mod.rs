//! Everything that touches the network or the filesystem.

mod downloader;
mod fetcher;
mod http;
mod resolver;

pub use downloader::Downloader;
pub use fetcher::{FetchReport, Fetcher};
pub use http::{BoxStream, Head, HttpClient, StreamResponse};
pub use resolver::Resolver;

#[cfg(feature = "reqwest")]
pub use http::{DEFAULT_CONNECT_TIMEOUT, ReqwestClient};
