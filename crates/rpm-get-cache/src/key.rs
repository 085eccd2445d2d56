//! Key to file name mapping.
//!
//! Every string maps to exactly one file name and back. Ordinary keys are
//! left alone; only characters that would escape the cache root, collide
//! with staging files or be rejected by the OS are percent-escaped.

/// File name used for the empty key. `%` is otherwise always followed by two
/// hex digits, so it cannot be produced by any other key.
const EMPTY: &str = "%";

pub fn encode_key(key: &str) -> String {
    if key.is_empty() {
        return EMPTY.to_string();
    }

    let mut out = String::with_capacity(key.len());
    for (i, c) in key.chars().enumerate() {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '\\' => out.push_str("%5C"),
            '\0' => out.push_str("%00"),
            // Staging files are dot-prefixed; entries never are.
            '.' if i == 0 => out.push_str("%2E"),
            c => out.push(c),
        }
    }
    out
}

/// Inverse of [`encode_key`]. Returns `None` for names it could not have
/// produced.
pub fn decode_key(name: &str) -> Option<String> {
    if name == EMPTY {
        return Some(String::new());
    }
    if name.is_empty() || name.starts_with('.') {
        return None;
    }

    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let escape = rest.get(pos + 1..pos + 3)?;
        let decoded = match escape {
            "25" => '%',
            "2F" => '/',
            "5C" => '\\',
            "00" => '\0',
            "2E" if out.is_empty() => '.',
            _ => return None,
        };
        out.push(decoded);
        rest = &rest[pos + 3..];
    }
    out.push_str(rest);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_unchanged() {
        for key in ["pkg-1.2.3.rpm", "peazip_cache.json", "a.rpm", "x86_64"] {
            assert_eq!(encode_key(key), key);
        }
    }

    #[test]
    fn test_separators_escaped() {
        assert_eq!(encode_key("a/b"), "a%2Fb");
        assert_eq!(encode_key("a\\b"), "a%5Cb");
        assert_eq!(encode_key("../etc"), "%2E.%2Fetc");
    }

    #[test]
    fn test_dot_keys_escaped() {
        assert_eq!(encode_key("."), "%2E");
        assert_eq!(encode_key(".."), "%2E.");
        assert_eq!(encode_key(".hidden"), "%2Ehidden");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(encode_key(""), "%");
        assert_eq!(decode_key("%").as_deref(), Some(""));
    }

    #[test]
    fn test_percent_escaped() {
        assert_eq!(encode_key("100%"), "100%25");
        assert_eq!(encode_key("%2F"), "%252F");
    }

    #[test]
    fn test_injective_on_tricky_keys() {
        let keys = [
            "", "%", "%25", "/", "%2F", ".", "%2E", "..", "a/b", "a%2Fb", "\0", "%00", "a.b",
        ];
        let encoded: std::collections::HashSet<_> = keys.iter().map(|k| encode_key(k)).collect();
        assert_eq!(encoded.len(), keys.len());
    }

    #[test]
    fn test_decode_inverts_encode() {
        for key in ["", "%", "a/b", "..", ".x", "100%", "pkg.rpm", "a\\b\0c", "%2E"] {
            assert_eq!(decode_key(&encode_key(key)).as_deref(), Some(key));
        }
    }

    #[test]
    fn test_decode_rejects_foreign_names() {
        assert_eq!(decode_key(".rpm-get-abc.part"), None);
        assert_eq!(decode_key("bad%zz"), None);
        assert_eq!(decode_key("trailing%2"), None);
        assert_eq!(decode_key("mid%2Edot"), None);
    }
}
