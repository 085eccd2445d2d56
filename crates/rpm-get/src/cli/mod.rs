pub mod app;
pub mod cache;
pub mod doctor;
pub mod fetch;
pub mod query;
pub mod release;
pub mod resolve;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use rpm_get_cache::CacheStore;
use rpm_get_fetch::{BlockingFetcher, FetchOptions, Fetcher, ReleaseSource, ReqwestClient};
use rpm_get_platform::LogSink;
use rpm_get_platform::env::token_from_env;

pub use app::{App, Commands};

use crate::config::Config;
use crate::ui::ProgressTracker;

/// Everything a command needs, built once per process.
pub struct Context {
    pub config: Config,
    pub sink: Arc<dyn LogSink>,
    pub quiet: bool,
    token: Option<String>,
    gitlab_token: Option<String>,
}

impl Context {
    pub fn new(config: Config, sink: Arc<dyn LogSink>, quiet: bool) -> Self {
        let token = token_from_env(&config.token_env);
        let gitlab_token = token_from_env(&config.gitlab_token_env);
        Self {
            config,
            sink,
            quiet,
            token,
            gitlab_token,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.clone()
    }

    pub fn token_for(&self, source: &ReleaseSource) -> Option<String> {
        match source {
            ReleaseSource::GitHub { .. } => self.token.clone(),
            ReleaseSource::GitLab { .. } => self.gitlab_token.clone(),
        }
    }

    pub fn cache(&self) -> Result<CacheStore> {
        Ok(CacheStore::new(self.config.cache_root()?))
    }

    pub fn fetcher(&self, options: FetchOptions) -> Result<BlockingFetcher<ReqwestClient>> {
        let client = ReqwestClient::with_connect_timeout(self.config.connect_timeout())
            .context("failed to build the HTTP client")?;
        let fetcher = Fetcher::new(client, self.cache()?, options).with_sink(self.sink.clone());
        BlockingFetcher::new(fetcher).context("failed to start the I/O runtime")
    }

    pub fn tracker(&self, prefix: &str) -> ProgressTracker {
        ProgressTracker::new(prefix, self.quiet)
    }
}

pub fn run(app: App, sink: Arc<dyn LogSink>) -> Result<()> {
    let config = Config::load(app.config.as_deref()).context("failed to load configuration")?;
    let ctx = Context::new(config, sink, app.quiet);

    match app.cmd {
        Commands::Resolve(arg) => arg.run(&ctx),
        Commands::Fetch(arg) => arg.run(&ctx),
        Commands::Release(arg) => arg.run(&ctx),
        Commands::Query(arg) => arg.run(&ctx),
        Commands::Cache(cmd) => cmd.run(&ctx),
        Commands::Doctor(arg) => arg.run(&ctx),
    }
}
