use std::env;

/// Default variable holding the bearer token attached to requests.
pub const TOKEN_VAR: &str = "RPMGET_TOKEN";

/// Default variable holding the GitLab `PRIVATE-TOKEN`.
pub const GITLAB_TOKEN_VAR: &str = "GITLAB_TOKEN";

/// Read a token from `name`, treating unset and blank values alike.
///
/// Callers read this once at startup and pass the value down explicitly.
pub fn token_from_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
