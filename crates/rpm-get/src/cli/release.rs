use anyhow::{Context as _, Result, bail};
use clap::Args;
use regex::Regex;
use rpm_get_fetch::release::cache_key;
use rpm_get_fetch::{ArtifactRequest, ReleaseSource};
use rpm_get_meta::{JsonTree, QueryPath, Value, rate_limit_message};

use super::Context;

/// `(list, url field)` pairs holding asset links: GitHub first, then GitLab.
const ASSET_LISTS: [(&[&str], &str); 3] = [
    (&["assets"], "browser_download_url"),
    (&["assets", "links"], "direct_asset_url"),
    (&["assets", "links"], "url"),
];

#[derive(Clone, Debug, Args)]
pub struct ReleaseArg {
    /// `owner/repo`, `github:owner/repo` or `gitlab:<id or path>`.
    pub source: ReleaseSource,

    /// Name the descriptor is cached under; defaults to the repository name.
    #[arg(long)]
    pub app: Option<String>,

    /// Drop the cached descriptor and fetch it again.
    #[arg(long)]
    pub refresh: bool,

    /// Print the first asset URL matching this pattern.
    #[arg(long, value_name = "REGEX")]
    pub asset: Option<Regex>,

    /// Download the matched asset into the cache.
    #[arg(long, requires = "asset")]
    pub download: bool,
}

/// Every asset URL in a release descriptor, in document order.
pub(crate) fn asset_urls(tree: &JsonTree) -> Vec<String> {
    let mut urls = Vec::new();
    for (list, field) in ASSET_LISTS {
        let list: QueryPath = list.iter().copied().collect();
        let Some(Value::Array(items)) = tree.query(&list) else {
            continue;
        };
        for index in 0..items.len() {
            let path = list.clone().index(index).field(field);
            if let Some(url) = tree.query_str(&path) {
                urls.push(url.to_string());
            }
        }
    }
    urls
}

impl ReleaseArg {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let app = self.app.clone().unwrap_or_else(|| self.source.app_name().to_string());
        let key = cache_key(&app);
        let fetcher = ctx.fetcher(ctx.config.fetch_options())?;
        let cache = fetcher.inner().cache();

        if self.refresh && cache.remove(&key)? {
            ctx.sink.info(&format!("Removed cached {key}"));
        }

        let request = self
            .source
            .request(&ctx.config.release_apis(), ctx.token_for(&self.source));
        let report = match fetcher.fetch(&request, Some(&key), |_, _| {}) {
            Ok(report) => report,
            Err(e) => {
                if matches!(e.status(), Some(403 | 429)) {
                    ctx.sink.warn(&format!(
                        "{} refused the request; the API rate limit may be exhausted. Set {} to authenticate.",
                        self.source,
                        ctx.config.token_env_for(&self.source)
                    ));
                }
                return Err(e).with_context(|| format!("failed to fetch the release of {}", self.source));
            }
        };

        let tree = JsonTree::load(&report.path)
            .with_context(|| format!("failed to read {}", report.path.display()))?;
        if let Some(message) = rate_limit_message(&tree) {
            cache.remove(&key)?;
            ctx.sink.warn(&format!("{message}. Removed {key} from the cache."));
            bail!("the release descriptor for {app} is a rate-limit response");
        }

        if let Some(tag) = tree.query_str(&QueryPath::default().field("tag_name")) {
            ctx.sink.info(&format!("{app} {tag}"));
        }
        println!("{}", report.path.display());

        let Some(pattern) = &self.asset else {
            return Ok(());
        };
        let url = asset_urls(&tree)
            .into_iter()
            .find(|url| pattern.is_match(url))
            .with_context(|| format!("no asset of {app} matches {pattern}"))?;
        println!("{url}");

        if self.download {
            let tracker = ctx.tracker("Downloading").with_finish("done");
            let artifact = fetcher.fetch(&ArtifactRequest::new(&url), None, |done, total| {
                tracker.update(done, total)
            });
            tracker.finish();
            let artifact = artifact.with_context(|| format!("failed to fetch {url}"))?;
            println!("{}", artifact.path.display());
        }
        Ok(())
    }
}
