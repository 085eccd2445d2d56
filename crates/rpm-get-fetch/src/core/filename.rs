use url::Url;

/// Extension marker that ends a package filename.
pub const DEFAULT_EXTENSION_TOKEN: &str = ".rpm";

/// Name used when a URL has no usable path segment.
pub const FALLBACK_FILENAME: &str = "index";

/// Strip a `?query` or `#fragment` tail, then cut everything after the first
/// occurrence of `token`.
///
/// Idempotent: the result either lacks `token` or ends with its first
/// occurrence.
///
/// ```
/// use rpm_get_fetch::normalize_filename;
///
/// assert_eq!(normalize_filename("pkg-1.2.3.rpm.asc?dl=1", ".rpm"), "pkg-1.2.3.rpm");
/// assert_eq!(normalize_filename("notes.txt", ".rpm"), "notes.txt");
/// ```
pub fn normalize_filename(raw: &str, token: &str) -> String {
    let name = raw.split(['?', '#']).next().unwrap_or_default();
    if token.is_empty() {
        return name.to_string();
    }
    match name.find(token) {
        Some(at) => name[..at + token.len()].to_string(),
        None => name.to_string(),
    }
}

/// Filename for the artifact at `final_url`: its last non-empty path segment,
/// normalized with [`normalize_filename`].
pub fn canonical_filename(final_url: &str, token: &str) -> String {
    let path = match Url::parse(final_url) {
        Ok(url) => url.path().to_string(),
        Err(_) => final_url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };
    match path.rsplit('/').find(|segment| !segment.is_empty()) {
        Some(segment) => normalize_filename(segment, token),
        None => FALLBACK_FILENAME.to_string(),
    }
}
