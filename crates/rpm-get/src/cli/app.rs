use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use super::{cache, doctor, fetch, query, release, resolve};

#[derive(Clone, Debug, Parser)]
#[command(name = "rpm-get", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// More diagnostics on stderr (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print warnings, errors and results.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Read settings from this file instead of the user config directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Follow redirects and print the final URL and filename.
    #[command(alias = "r", name = "resolve")]
    Resolve(resolve::ResolveArg),
    /// Download an artifact into the cache.
    #[command(alias = "f", name = "fetch")]
    Fetch(fetch::FetchArg),
    /// Fetch a GitHub or GitLab "latest release" descriptor.
    #[command(alias = "rel", name = "release")]
    Release(release::ReleaseArg),
    /// Extract a field from a cached JSON document.
    #[command(alias = "q", name = "query")]
    Query(query::QueryArg),
    /// Inspect or clean the cache.
    #[command(subcommand, name = "cache")]
    Cache(cache::CacheCommands),
    /// Check for the tools rpm-get relies on.
    #[command(name = "doctor")]
    Doctor(doctor::DoctorArg),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let app = App::try_parse_from(["rpm-get", "resolve", "https://h/a.rpm", "-vv", "-q"]).unwrap();
        assert_eq!(app.verbose, 2);
        assert!(app.quiet);
        assert!(matches!(app.cmd, Commands::Resolve(_)));
    }

    #[test]
    fn test_aliases() {
        let app = App::try_parse_from(["rpm-get", "f", "https://h/a.rpm", "--key", "a.rpm"]).unwrap();
        let Commands::Fetch(arg) = app.cmd else {
            panic!("expected fetch");
        };
        assert_eq!(arg.key.as_deref(), Some("a.rpm"));
    }

    #[test]
    fn test_cache_subcommands() {
        let app = App::try_parse_from(["rpm-get", "cache", "rm", "a.rpm"]).unwrap();
        assert!(matches!(app.cmd, Commands::Cache(cache::CacheCommands::Remove { ref key }) if key == "a.rpm"));
    }

    #[test]
    fn test_release_source_is_validated() {
        assert!(App::try_parse_from(["rpm-get", "release", "peazip/PeaZip"]).is_ok());
        assert!(App::try_parse_from(["rpm-get", "release", "not-a-repo"]).is_err());
    }

    #[test]
    fn test_query_path_is_validated() {
        assert!(App::try_parse_from(["rpm-get", "query", "x.json", "assets[0].name"]).is_ok());
        assert!(App::try_parse_from(["rpm-get", "query", "x.json", "assets[oops"]).is_err());
    }

    #[test]
    fn test_download_requires_asset() {
        assert!(App::try_parse_from(["rpm-get", "release", "a/b", "--download"]).is_err());
    }
}
