/// Returns `true` if the HTTP status code indicates a redirect the resolver
/// follows.
///
/// # Recognized Redirect Codes
///
/// - 301: Moved Permanently
/// - 302: Found
/// - 303: See Other
/// - 307: Temporary Redirect
/// - 308: Permanent Redirect
///
/// # Examples
///
/// ```
/// use rpm_get_fetch::is_redirect;
///
/// assert!(is_redirect(302));
/// assert!(!is_redirect(304));
/// ```
pub fn is_redirect(status: u16) -> bool {
    matches!(status, 301 | 302 | 303 | 307 | 308)
}

/// 2xx: the response terminates resolution or carries a body worth keeping.
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
