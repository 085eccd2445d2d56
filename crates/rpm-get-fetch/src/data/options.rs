use std::fmt;

use rpm_get_platform::arch::{self, Arch};

use crate::core::DEFAULT_EXTENSION_TOKEN;

/// Redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Phases of one fetch invocation.
///
/// `NotStarted → Resolving → Downloading → Completed`, with `Failed`
/// reachable from `Resolving` and `Downloading`. A download handed an
/// already-resolved location, or an explicit key that is cached, enters
/// `Downloading` straight from `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchPhase {
    #[default]
    NotStarted,

    /// Following redirects with metadata-only requests.
    Resolving,

    /// Streaming the body into a staging file. Re-entered on every chunk.
    Downloading,

    /// The artifact is in the cache under its key.
    Completed,

    /// Terminal failure; nothing was placed in the cache.
    Failed,
}

/// A transition [`FetchPhase::advance`] refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("illegal fetch phase transition {from} -> {to}")]
pub struct IllegalTransition {
    pub from: FetchPhase,
    pub to: FetchPhase,
}

impl FetchPhase {
    pub fn can_transition_to(self, next: FetchPhase) -> bool {
        use FetchPhase::*;
        matches!(
            (self, next),
            (NotStarted, Resolving)
                | (NotStarted, Downloading)
                | (Resolving, Downloading)
                | (Resolving, Failed)
                | (Downloading, Downloading)
                | (Downloading, Completed)
                | (Downloading, Failed)
        )
    }

    pub fn advance(self, next: FetchPhase) -> Result<FetchPhase, IllegalTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(IllegalTransition {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, FetchPhase::Completed | FetchPhase::Failed)
    }
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::NotStarted => write!(f, "NotStarted"),
            FetchPhase::Resolving => write!(f, "Resolving"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Completed => write!(f, "Completed"),
            FetchPhase::Failed => write!(f, "Failed"),
        }
    }
}

/// Browser-like agent string; some mirrors refuse unknown clients.
pub fn default_user_agent(arch: Arch) -> String {
    format!(
        "Mozilla/5.0 (X11; Linux {arch}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36"
    )
}

/// Knobs shared by the resolver and the downloader.
///
/// ```
/// use rpm_get_fetch::FetchOptions;
///
/// let options = FetchOptions::default().max_redirects(3).extension_token(".deb");
/// assert_eq!(options.max_redirects, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub max_redirects: u32,
    /// Marker after which a filename is cut, `.rpm` by default.
    pub extension_token: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(arch::detect()),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            extension_token: DEFAULT_EXTENSION_TOKEN.to_string(),
        }
    }
}

impl FetchOptions {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use FetchPhase::*;

    #[test]
    fn test_happy_path() {
        let phase = NotStarted.advance(Resolving).unwrap();
        let phase = phase.advance(Downloading).unwrap();
        let phase = phase.advance(Downloading).unwrap();
        let phase = phase.advance(Completed).unwrap();
        assert!(phase.is_terminal());
    }

    #[test]
    fn test_resolving_failure_skips_downloading() {
        assert_eq!(Resolving.advance(Failed), Ok(Failed));
    }

    #[test]
    fn test_illegal_transitions() {
        for (from, to) in [
            (NotStarted, Completed),
            (Resolving, Completed),
            (Resolving, Resolving),
            (Completed, Downloading),
            (Failed, Resolving),
            (Downloading, Resolving),
        ] {
            assert_eq!(from.advance(to), Err(IllegalTransition { from, to }));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(NotStarted.to_string(), "NotStarted");
        assert_eq!(
            IllegalTransition { from: Failed, to: Resolving }.to_string(),
            "illegal fetch phase transition Failed -> Resolving"
        );
    }

    #[test]
    fn test_default_user_agent() {
        let ua = default_user_agent(Arch::X86_64);
        assert!(ua.starts_with("Mozilla/5.0 (X11; Linux x86_64)"));
        assert!(ua.ends_with("Safari/537.36"));
    }

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert_eq!(options.max_redirects, DEFAULT_MAX_REDIRECTS);
        assert_eq!(options.extension_token, ".rpm");
        assert!(options.user_agent.contains("Linux"));
    }
}
