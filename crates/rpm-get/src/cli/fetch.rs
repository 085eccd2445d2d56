use anyhow::{Context as _, Result};
use clap::Args;
use rpm_get_fetch::ArtifactRequest;

use super::Context;

#[derive(Clone, Debug, Args)]
pub struct FetchArg {
    /// Upstream download link.
    pub url: String,

    /// Cache key; defaults to the resolved filename. A cached key is reused
    /// without contacting the server.
    #[arg(long)]
    pub key: Option<String>,

    /// Also print the SHA-256 of the cached file.
    #[arg(long)]
    pub sha256: bool,
}

impl FetchArg {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let fetcher = ctx.fetcher(ctx.config.fetch_options())?;
        let request = ArtifactRequest::new(&self.url).auth_token(ctx.token());

        let tracker = ctx.tracker("Downloading").with_finish("done");
        let report = fetcher.fetch(&request, self.key.as_deref(), |done, total| {
            tracker.update(done, total)
        });
        tracker.finish();
        let report = report.with_context(|| format!("failed to fetch {}", self.url))?;

        println!("{}", report.path.display());
        if self.sha256 {
            let digest = fetcher.inner().cache().sha256(&report.key)?;
            println!("{digest}  {}", report.key);
        }
        Ok(())
    }
}
