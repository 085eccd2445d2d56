use anyhow::{Result, bail};
use clap::Subcommand;

use super::Context;

#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Print the cache root.
    #[command(name = "path")]
    Path,
    /// List cached entries with their sizes.
    #[command(alias = "ls", name = "list")]
    List,
    /// Delete one entry.
    #[command(alias = "rm", name = "remove")]
    Remove { key: String },
    /// Delete every entry.
    #[command(name = "clean")]
    Clean,
    /// Print the SHA-256 of an entry.
    #[command(name = "hash")]
    Hash { key: String },
}

impl CacheCommands {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let cache = ctx.cache()?;
        match self {
            CacheCommands::Path => println!("{}", cache.root().display()),
            CacheCommands::List => {
                for entry in cache.entries()? {
                    let size = cache.size_of(&entry.key)?;
                    println!("{size:>12}  {}", entry.key);
                }
            }
            CacheCommands::Remove { key } => {
                if !cache.remove(&key)? {
                    bail!("{key} is not cached");
                }
                ctx.sink.info(&format!("Removed {key}"));
            }
            CacheCommands::Clean => {
                let removed = cache.clear()?;
                ctx.sink.info(&format!("Removed {removed} cached file(s) from {}", cache.root().display()));
            }
            CacheCommands::Hash { key } => {
                if !cache.exists(&key) {
                    bail!("{key} is not cached");
                }
                println!("{}  {key}", cache.sha256(&key)?);
            }
        }
        Ok(())
    }
}
