use anyhow::{Context as _, Result};
use clap::Args;
use rpm_get_fetch::ArtifactRequest;

use super::Context;

#[derive(Clone, Debug, Args)]
pub struct ResolveArg {
    /// Upstream download link, possibly behind mirror redirectors.
    pub url: String,

    /// Redirect hops to follow before giving up.
    #[arg(long, value_name = "N")]
    pub max_redirects: Option<u32>,

    /// Marker after which the filename is cut.
    #[arg(long, value_name = "TOKEN")]
    pub extension: Option<String>,
}

impl ResolveArg {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let mut options = ctx.config.fetch_options();
        if let Some(max) = self.max_redirects {
            options = options.max_redirects(max);
        }
        if let Some(token) = self.extension {
            options = options.extension_token(token);
        }

        let fetcher = ctx.fetcher(options)?;
        let request = ArtifactRequest::new(&self.url).auth_token(ctx.token());
        let location = fetcher
            .resolve(&request)
            .with_context(|| format!("failed to resolve {}", self.url))?;

        if location.redirects > 0 {
            ctx.sink.info(&format!("Followed {} redirect(s)", location.redirects));
        }
        println!("{}", location.final_url);
        println!("{}", location.canonical_filename);
        Ok(())
    }
}
