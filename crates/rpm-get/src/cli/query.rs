use std::path::PathBuf;

use anyhow::{Context as _, Result, anyhow};
use clap::Args;
use regex::Regex;
use rpm_get_meta::{JsonTree, QueryPath, Value, rewrite_match};

use super::Context;

#[derive(Clone, Debug, Args)]
pub struct QueryArg {
    /// Cache key of a JSON document, or a path to one.
    pub document: String,

    /// Field path, e.g. `assets[0].browser_download_url` or `$.tag_name`.
    pub path: QueryPath,

    /// Rewrite the value with this pattern; fails if it does not match.
    #[arg(long, value_name = "REGEX", requires = "replace")]
    pub regex: Option<Regex>,

    /// Replacement for `--regex`; `$1` refers to the first group.
    #[arg(long, value_name = "REPLACEMENT", requires = "regex")]
    pub replace: Option<String>,
}

/// Strings print raw, everything else as compact JSON.
pub(crate) fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl QueryArg {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let cache = ctx.cache()?;
        let file = if cache.exists(&self.document) {
            cache.path_for(&self.document)
        } else {
            PathBuf::from(&self.document)
        };
        let tree = JsonTree::load(&file).with_context(|| format!("failed to read {}", file.display()))?;

        let value = tree
            .query(&self.path)
            .ok_or_else(|| anyhow!("nothing at {} in {}", self.path, self.document))?;
        let mut text = render(value);

        if let (Some(pattern), Some(replacement)) = (&self.regex, &self.replace) {
            text = rewrite_match(&text, pattern, replacement)
                .with_context(|| format!("{pattern} does not match {text:?}"))?;
        }

        println!("{text}");
        Ok(())
    }
}
