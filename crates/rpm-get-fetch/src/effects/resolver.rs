use tracing::debug;
use url::Url;

use crate::core::{canonical_filename, is_redirect, is_success};
use crate::data::{DEFAULT_MAX_REDIRECTS, ResolvedLocation};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Follows redirects with HEAD requests up to a fixed number of hops.
#[derive(Debug, Clone)]
pub struct Resolver<C> {
    client: C,
    max_redirects: u32,
    extension_token: String,
}

impl<C: HttpClient> Resolver<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            extension_token: crate::core::DEFAULT_EXTENSION_TOKEN.to_string(),
        }
    }

    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    #[must_use]
    pub fn extension_token(mut self, token: impl Into<String>) -> Self {
        self.extension_token = token.into();
        self
    }

    /// Walk the redirect chain starting at `url`.
    ///
    /// A 2xx answer ends the walk. A redirect without a `Location`, or any
    /// other status, fails with a network-class error. Following more than
    /// `max_redirects` hops fails with [`FetchError::RedirectLoop`].
    pub async fn resolve(&self, url: &str, headers: &[(String, String)]) -> Result<ResolvedLocation> {
        let mut current = url.to_string();
        let mut hops = 0u32;

        loop {
            let head = self
                .client
                .head(&current, headers)
                .await
                .map_err(|e| FetchError::network(&current, e))?;

            if is_redirect(head.status) {
                let Some(target) = head.location.as_deref() else {
                    return Err(FetchError::InvalidRedirect {
                        url: current,
                        reason: format!("HTTP {} without a Location header", head.status),
                    });
                };

                hops += 1;
                if hops > self.max_redirects {
                    return Err(FetchError::RedirectLoop {
                        url: url.to_string(),
                        limit: self.max_redirects,
                    });
                }

                let next = join_location(&current, target)?;
                debug!(hop = hops, from = %current, to = %next, "following redirect");
                current = next;
                continue;
            }

            if !is_success(head.status) {
                return Err(FetchError::Status {
                    url: current,
                    status: head.status,
                });
            }

            let canonical_filename = canonical_filename(&current, &self.extension_token);
            debug!(url = %current, filename = %canonical_filename, redirects = hops, "resolved");
            return Ok(ResolvedLocation {
                final_url: current,
                canonical_filename,
                redirects: hops,
            });
        }
    }
}

/// Resolve a possibly relative `Location` against the URL that sent it.
fn join_location(current: &str, location: &str) -> Result<String> {
    let invalid = |reason: url::ParseError| FetchError::InvalidRedirect {
        url: current.to_string(),
        reason: format!("bad Location {location:?}: {reason}"),
    };
    let base = Url::parse(current).map_err(invalid)?;
    base.join(location).map(String::from).map_err(invalid)
}
