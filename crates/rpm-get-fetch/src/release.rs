//! "Latest release" descriptors on GitHub and GitLab.

use std::fmt;
use std::str::FromStr;

use crate::data::{ArtifactRequest, AuthScheme};

pub const GITHUB_API: &str = "https://api.github.com";
pub const GITLAB_API: &str = "https://gitlab.com/api/v4";

/// API base URLs, overridable for self-hosted instances and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseApis {
    pub github: String,
    pub gitlab: String,
}

impl Default for ReleaseApis {
    fn default() -> Self {
        Self {
            github: GITHUB_API.to_string(),
            gitlab: GITLAB_API.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReleaseSource {
    GitHub { owner: String, repo: String },
    /// Numeric id or `group/project` path.
    GitLab { project: String },
}

impl ReleaseSource {
    pub fn github(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        ReleaseSource::GitHub {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn gitlab(project: impl Into<String>) -> Self {
        ReleaseSource::GitLab {
            project: project.into(),
        }
    }

    /// Short name used for the descriptor's cache key.
    pub fn app_name(&self) -> &str {
        match self {
            ReleaseSource::GitHub { repo, .. } => repo,
            ReleaseSource::GitLab { project } => project.rsplit('/').next().unwrap_or(project),
        }
    }

    pub fn endpoint(&self, apis: &ReleaseApis) -> String {
        match self {
            ReleaseSource::GitHub { owner, repo } => format!(
                "{}/repos/{owner}/{repo}/releases/latest",
                apis.github.trim_end_matches('/')
            ),
            ReleaseSource::GitLab { project } => format!(
                "{}/projects/{}/releases/permalink/latest",
                apis.gitlab.trim_end_matches('/'),
                project.replace('/', "%2F")
            ),
        }
    }

    pub fn auth_scheme(&self) -> AuthScheme {
        match self {
            ReleaseSource::GitHub { .. } => AuthScheme::Bearer,
            ReleaseSource::GitLab { .. } => AuthScheme::PrivateToken,
        }
    }

    /// Request for the descriptor, with `token` attached the way the host
    /// expects it.
    pub fn request(&self, apis: &ReleaseApis, token: Option<String>) -> ArtifactRequest {
        ArtifactRequest::new(self.endpoint(apis))
            .auth_token(token)
            .auth_scheme(self.auth_scheme())
    }
}

/// Cache key of an app's release descriptor.
pub fn cache_key(app: &str) -> String {
    format!("{app}_cache.json")
}

impl fmt::Display for ReleaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseSource::GitHub { owner, repo } => write!(f, "github:{owner}/{repo}"),
            ReleaseSource::GitLab { project } => write!(f, "gitlab:{project}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid release source {0:?}: expected [github:]owner/repo or gitlab:project")]
pub struct ParseReleaseSourceError(pub String);

impl FromStr for ReleaseSource {
    type Err = ParseReleaseSourceError;

    /// `owner/repo`, `github:owner/repo` or `gitlab:<id or path>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseReleaseSourceError(s.to_string());
        let s = s.trim();

        if let Some(project) = s.strip_prefix("gitlab:") {
            if project.is_empty() {
                return Err(invalid());
            }
            return Ok(ReleaseSource::gitlab(project));
        }

        let path = s.strip_prefix("github:").unwrap_or(s);
        match path.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(ReleaseSource::github(owner, repo))
            }
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_endpoint() {
        let src = ReleaseSource::github("peazip", "PeaZip");
        assert_eq!(
            src.endpoint(&ReleaseApis::default()),
            "https://api.github.com/repos/peazip/PeaZip/releases/latest"
        );
    }

    #[test]
    fn test_gitlab_endpoint() {
        let apis = ReleaseApis {
            gitlab: "https://gitlab.example.org/api/v4/".into(),
            ..ReleaseApis::default()
        };
        assert_eq!(
            ReleaseSource::gitlab("group/tool").endpoint(&apis),
            "https://gitlab.example.org/api/v4/projects/group%2Ftool/releases/permalink/latest"
        );
        assert_eq!(
            ReleaseSource::gitlab("1234").endpoint(&ReleaseApis::default()),
            "https://gitlab.com/api/v4/projects/1234/releases/permalink/latest"
        );
    }

    #[test]
    fn test_request_auth() {
        let apis = ReleaseApis::default();
        let gh = ReleaseSource::github("a", "b").request(&apis, Some("t".into()));
        assert!(gh.headers("ua").contains(&("Authorization".into(), "Bearer t".into())));

        let gl = ReleaseSource::gitlab("1").request(&apis, Some("t".into()));
        assert!(gl.headers("ua").contains(&("PRIVATE-TOKEN".into(), "t".into())));
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("peazip"), "peazip_cache.json");
        assert_eq!(cache_key(ReleaseSource::github("o", "tool").app_name()), "tool_cache.json");
        assert_eq!(ReleaseSource::gitlab("group/sub/app").app_name(), "app");
        assert_eq!(ReleaseSource::gitlab("1234").app_name(), "1234");
    }

    #[test]
    fn test_parse() {
        assert_eq!("a/b".parse(), Ok(ReleaseSource::github("a", "b")));
        assert_eq!("github:a/b".parse(), Ok(ReleaseSource::github("a", "b")));
        assert_eq!("gitlab:g/p".parse(), Ok(ReleaseSource::gitlab("g/p")));
        for bad in ["", "a", "a/", "/b", "a/b/c", "gitlab:"] {
            assert!(bad.parse::<ReleaseSource>().is_err(), "{bad}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for src in [ReleaseSource::github("o", "r"), ReleaseSource::gitlab("42")] {
            assert_eq!(src.to_string().parse(), Ok(src));
        }
    }
}
