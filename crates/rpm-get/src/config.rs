use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use rpm_get_fetch::{FetchOptions, ReleaseApis, ReleaseSource};
use rpm_get_platform::{arch, dir, env};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "RPMGET_";

/// Settings layered from defaults, `config.toml` and `RPMGET_*` variables,
/// later layers winning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults to `<user-cache-home>/rpm-get`.
    pub cache_dir: Option<PathBuf>,
    /// Defaults to a desktop browser string for the host architecture.
    pub user_agent: Option<String>,
    pub max_redirects: u32,
    pub extension_token: String,
    /// Variable holding the bearer token.
    pub token_env: String,
    /// Variable holding the GitLab private token.
    pub gitlab_token_env: String,
    pub connect_timeout_secs: u64,
    pub github_api: String,
    pub gitlab_api: String,
}

impl Default for Config {
    fn default() -> Self {
        let fetch = FetchOptions::default();
        let apis = ReleaseApis::default();
        Self {
            cache_dir: None,
            user_agent: None,
            max_redirects: fetch.max_redirects,
            extension_token: fetch.extension_token,
            token_env: env::TOKEN_VAR.to_string(),
            gitlab_token_env: env::GITLAB_TOKEN_VAR.to_string(),
            connect_timeout_secs: rpm_get_fetch::DEFAULT_CONNECT_TIMEOUT.as_secs(),
            github_api: apis.github,
            gitlab_api: apis.gitlab,
        }
    }
}

impl Config {
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = config_file {
            fig = fig.merge(Toml::file(path));
        }
        fig.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load from `explicit`, or from `<user-config-home>/rpm-get/config.toml`.
    /// A missing file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, figment::Error> {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(Self::default_file);
        Self::figment(file.as_deref()).extract()
    }

    pub fn default_file() -> Option<PathBuf> {
        dir::config_dir().map(|d| d.join(CONFIG_FILE))
    }

    pub fn cache_root(&self) -> anyhow::Result<PathBuf> {
        self.cache_dir
            .clone()
            .or_else(dir::cache_root)
            .context("cannot determine the cache directory; set `cache_dir` in config.toml")
    }

    pub fn fetch_options(&self) -> FetchOptions {
        let mut options = FetchOptions::default()
            .max_redirects(self.max_redirects)
            .extension_token(self.extension_token.clone());
        if let Some(ua) = &self.user_agent {
            options = options.user_agent(ua.clone());
        }
        options
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn release_apis(&self) -> ReleaseApis {
        ReleaseApis {
            github: self.github_api.clone(),
            gitlab: self.gitlab_api.clone(),
        }
    }

    /// Name of the variable a release host's token is read from.
    pub fn token_env_for(&self, source: &ReleaseSource) -> &str {
        match source {
            ReleaseSource::GitHub { .. } => &self.token_env,
            ReleaseSource::GitLab { .. } => &self.gitlab_token_env,
        }
    }

    pub fn describe_host(&self) -> String {
        format!("{} ({})", arch::detect(), std::env::consts::OS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_| {
            let config: Config = Config::figment(None).extract()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.max_redirects, 10);
            assert_eq!(config.extension_token, ".rpm");
            assert_eq!(config.token_env, "RPMGET_TOKEN");
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    cache_dir = "/var/cache/rpm-get"
                    max_redirects = 4
                    github_api = "https://ghe.example.org/api/v3"
                "#,
            )?;
            let config: Config = Config::figment(Some(Path::new(CONFIG_FILE))).extract()?;
            assert_eq!(config.cache_dir, Some(PathBuf::from("/var/cache/rpm-get")));
            assert_eq!(config.max_redirects, 4);
            assert_eq!(config.release_apis().github, "https://ghe.example.org/api/v3");
            assert_eq!(config.extension_token, ".rpm");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "max_redirects = 4\nuser_agent = \"from-file\"")?;
            jail.set_env("RPMGET_MAX_REDIRECTS", "2");
            jail.set_env("RPMGET_TOKEN", "not-a-setting");
            let config: Config = Config::figment(Some(Path::new(CONFIG_FILE))).extract()?;
            assert_eq!(config.max_redirects, 2);
            assert_eq!(config.user_agent.as_deref(), Some("from-file"));
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_is_ignored() {
        Jail::expect_with(|_| {
            let config: Config = Config::figment(Some(Path::new("absent.toml"))).extract()?;
            assert_eq!(config.max_redirects, 10);
            Ok(())
        });
    }

    #[test]
    fn test_fetch_options() {
        let config = Config {
            user_agent: Some("custom/1".into()),
            max_redirects: 3,
            extension_token: ".deb".into(),
            ..Config::default()
        };
        let options = config.fetch_options();
        assert_eq!(options.user_agent, "custom/1");
        assert_eq!(options.max_redirects, 3);
        assert_eq!(options.extension_token, ".deb");

        let options = Config::default().fetch_options();
        assert!(options.user_agent.starts_with("Mozilla/5.0 (X11; Linux "));
    }

    #[test]
    fn test_cache_root_prefers_config() {
        let config = Config {
            cache_dir: Some("/srv/cache".into()),
            ..Config::default()
        };
        assert_eq!(config.cache_root().unwrap(), PathBuf::from("/srv/cache"));
    }

    #[test]
    fn test_token_env_for() {
        let config = Config::default();
        assert_eq!(config.token_env_for(&ReleaseSource::github("a", "b")), "RPMGET_TOKEN");
        assert_eq!(config.token_env_for(&ReleaseSource::gitlab("1")), "GITLAB_TOKEN");
    }
}
