/// Where a request ended up after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    pub final_url: String,
    /// Last path segment of `final_url`, query dropped and cut after the
    /// extension token.
    pub canonical_filename: String,
    /// Redirect hops followed.
    pub redirects: u32,
}

impl ResolvedLocation {
    /// A location known without resolving, e.g. a direct asset URL.
    pub fn direct(url: impl Into<String>, extension_token: &str) -> Self {
        let final_url = url.into();
        let canonical_filename = crate::core::canonical_filename(&final_url, extension_token);
        Self {
            final_url,
            canonical_filename,
            redirects: 0,
        }
    }
}
