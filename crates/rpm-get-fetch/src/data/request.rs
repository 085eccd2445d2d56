/// How a static token is attached to outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>`
    #[default]
    Bearer,
    /// `PRIVATE-TOKEN: <token>`, as GitLab expects.
    PrivateToken,
}

/// One artifact to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub source_url: String,
    pub auth_token: Option<String>,
    pub auth_scheme: AuthScheme,
}

impl ArtifactRequest {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            auth_token: None,
            auth_scheme: AuthScheme::default(),
        }
    }

    #[must_use]
    pub fn auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    #[must_use]
    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.auth_scheme = scheme;
        self
    }

    /// Headers sent with every request for this artifact, HEAD and GET alike.
    pub fn headers(&self, user_agent: &str) -> Vec<(String, String)> {
        let mut headers = vec![("User-Agent".to_string(), user_agent.to_string())];
        if let Some(token) = &self.auth_token {
            headers.push(match self.auth_scheme {
                AuthScheme::Bearer => ("Authorization".to_string(), format!("Bearer {token}")),
                AuthScheme::PrivateToken => ("PRIVATE-TOKEN".to_string(), token.clone()),
            });
        }
        headers
    }
}
