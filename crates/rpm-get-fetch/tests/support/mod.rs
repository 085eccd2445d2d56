//! In-memory `HttpClient` for pipeline tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;
use futures_util::stream;
use rpm_get_fetch::{BoxStream, Head, HttpClient, StreamResponse};

#[derive(Debug)]
pub struct MockError(pub String);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for MockError {}

#[derive(Debug, Clone)]
pub enum Route {
    Redirect(String),
    Body {
        data: Bytes,
        chunk_size: usize,
        /// Overrides the real length in `Content-Length`; `Some(None)` omits it.
        declared: Option<Option<u64>>,
        /// Fail the stream once this many bytes have been yielded.
        fail_after: Option<usize>,
    },
    Status(u16),
}

impl Route {
    pub fn body(data: impl Into<Bytes>, chunk_size: usize) -> Self {
        Route::Body {
            data: data.into(),
            chunk_size,
            declared: None,
            fail_after: None,
        }
    }
}

#[derive(Clone, Default)]
pub struct MockClient {
    routes: Arc<HashMap<String, Route>>,
    pub heads: Arc<AtomicUsize>,
    pub gets: Arc<AtomicUsize>,
    pub seen_headers: Arc<std::sync::Mutex<Vec<Vec<(String, String)>>>>,
}

impl MockClient {
    pub fn new(routes: impl IntoIterator<Item = (&'static str, Route)>) -> Self {
        Self {
            routes: Arc::new(routes.into_iter().map(|(k, v)| (k.to_string(), v)).collect()),
            ..Self::default()
        }
    }

    pub fn requests(&self) -> usize {
        self.heads.load(Ordering::SeqCst) + self.gets.load(Ordering::SeqCst)
    }

    fn route(&self, url: &str, headers: &[(String, String)]) -> Result<Route, MockError> {
        self.seen_headers.lock().unwrap().push(headers.to_vec());
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| MockError(format!("no route to {url}")))
    }
}

fn declared_len(route: &Route) -> Option<u64> {
    match route {
        Route::Body { data, declared, .. } => declared.unwrap_or(Some(data.len() as u64)),
        _ => None,
    }
}

impl HttpClient for MockClient {
    type Error = MockError;

    fn head(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<Head, Self::Error>> + Send {
        self.heads.fetch_add(1, Ordering::SeqCst);
        let route = self.route(url, headers);
        async move {
            let route = route?;
            let content_length = declared_len(&route);
            Ok(match route {
                Route::Redirect(to) => Head {
                    status: 302,
                    location: Some(to),
                    content_length: None,
                },
                Route::Body { .. } => Head {
                    status: 200,
                    location: None,
                    content_length,
                },
                Route::Status(status) => Head {
                    status,
                    location: None,
                    content_length: None,
                },
            })
        }
    }

    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<StreamResponse<Self::Error>, Self::Error>> + Send {
        self.gets.fetch_add(1, Ordering::SeqCst);
        let route = self.route(url, headers);
        async move {
            let route = route?;
            let content_length = declared_len(&route);
            match route {
                Route::Body {
                    data,
                    chunk_size,
                    fail_after,
                    ..
                } => {
                    let mut items: Vec<Result<Bytes, MockError>> = Vec::new();
                    let mut offset = 0;
                    while offset < data.len() {
                        if fail_after.is_some_and(|limit| offset >= limit) {
                            items.push(Err(MockError("connection reset".into())));
                            break;
                        }
                        let end = (offset + chunk_size).min(data.len());
                        items.push(Ok(data.slice(offset..end)));
                        offset = end;
                    }
                    let body: BoxStream<'static, Result<Bytes, MockError>> = Box::pin(stream::iter(items));
                    Ok(StreamResponse {
                        status: 200,
                        content_length,
                        body,
                    })
                }
                Route::Redirect(_) => Err(MockError(format!("unexpected GET on redirect {url}"))),
                Route::Status(status) => Ok(StreamResponse {
                    status,
                    content_length: None,
                    body: Box::pin(stream::empty::<Result<Bytes, MockError>>()),
                }),
            }
        }
    }
}

/// Names in `dir` that look like staging files.
pub fn staging_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with(".rpm-get-"))
                .collect()
        })
        .unwrap_or_default()
}
