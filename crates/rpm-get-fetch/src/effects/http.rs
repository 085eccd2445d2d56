use std::fmt;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line and the headers the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    pub status: u16,
    /// Raw `Location` header, possibly relative.
    pub location: Option<String>,
    pub content_length: Option<u64>,
}

/// A response whose body has not been read yet.
pub struct StreamResponse<E> {
    pub status: u16,
    pub content_length: Option<u64>,
    pub body: BoxStream<'static, Result<Bytes, E>>,
}

impl<E> fmt::Debug for StreamResponse<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .field("content_length", &self.content_length)
            .field("body", &"{ ... }")
            .finish()
    }
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations must NOT follow redirects: the resolver walks them itself
/// and bounds the hop count. Non-2xx statuses are returned, not turned into
/// errors; `Err` is reserved for transport failures.
///
/// # Implementations
///
/// - [`ReqwestClient`]: production implementation using `reqwest`
/// - in-memory mocks in tests
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Metadata-only request; no body is transferred.
    fn head(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Head, Self::Error>> + Send;

    /// Open a streaming GET.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<StreamResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use std::time::Duration;

    use futures_util::StreamExt;
    use reqwest::header::{CONTENT_LENGTH, HeaderMap, LOCATION};

    use super::*;

    /// Connect timeout used by [`ReqwestClient::new`].
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Production HTTP client using reqwest, with redirect following off.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Result<Self, reqwest::Error> {
            Self::with_connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        }

        pub fn with_connect_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .connect_timeout(timeout)
                .build()?;
            Ok(Self { client })
        }
    }

    // `Response::content_length` reports the body hint, which is 0 for HEAD.
    fn declared_length(headers: &HeaderMap) -> Option<u64> {
        headers
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<u64>().ok())
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn head(&self, url: &str, headers: &[(String, String)]) -> Result<Head, Self::Error> {
            let mut request = self.client.head(url);
            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);

            Ok(Head {
                status: response.status().as_u16(),
                location,
                content_length: declared_length(response.headers()),
            })
        }

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> Result<StreamResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);
            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let status = response.status().as_u16();
            let content_length = declared_length(response.headers());
            let body = response.bytes_stream().boxed();

            Ok(StreamResponse {
                status,
                content_length,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{DEFAULT_CONNECT_TIMEOUT, ReqwestClient};
