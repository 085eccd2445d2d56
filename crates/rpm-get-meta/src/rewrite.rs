use regex::Regex;

/// Rewrite `value` with `pattern` → `replacement` if the pattern matches.
///
/// Used to pull a version out of a release title, e.g. `Desktop v([\d.]+)`
/// with `$1` turns `Desktop v2025.4.2` into `2025.4.2`. Returns `None` when
/// the pattern does not match at all.
pub fn rewrite_match(value: &str, pattern: &Regex, replacement: &str) -> Option<String> {
    pattern
        .is_match(value)
        .then(|| pattern.replace_all(value, replacement).into_owned())
}
