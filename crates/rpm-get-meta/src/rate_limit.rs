use crate::{JsonTree, QueryPath};

/// Substring GitHub puts in `message` when a client is throttled.
pub const RATE_LIMIT_MARKER: &str = "API rate limit exceeded";

/// The `message` field of a rate-limit response, if `tree` is one.
pub fn rate_limit_message(tree: &JsonTree) -> Option<&str> {
    tree.query_str(&QueryPath::default().field("message"))
        .filter(|m| m.contains(RATE_LIMIT_MARKER))
}

pub fn is_rate_limited(tree: &JsonTree) -> bool {
    rate_limit_message(tree).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_rate_limited_response() {
        let tree = parse(
            br#"{"message": "API rate limit exceeded for 1.2.3.4. (But here's the good news...)",
                 "documentation_url": "https://docs.github.com/rest"}"#,
        )
        .unwrap();
        assert!(is_rate_limited(&tree));
        assert!(rate_limit_message(&tree).unwrap().starts_with(RATE_LIMIT_MARKER));
    }

    #[test]
    fn test_other_message() {
        let tree = parse(br#"{"message": "Not Found"}"#).unwrap();
        assert!(!is_rate_limited(&tree));
    }

    #[test]
    fn test_release_descriptor() {
        let tree = parse(br#"{"tag_name": "10.0.0", "assets": []}"#).unwrap();
        assert_eq!(rate_limit_message(&tree), None);
    }
}
