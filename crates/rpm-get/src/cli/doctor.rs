use anyhow::{Result, bail};
use clap::Args;
use rpm_get_platform::probe::{is_executable_on_path, locate};

use super::Context;
use crate::config::Config;

/// Needed to install what rpm-get downloads.
const REQUIRED: [&str; 2] = ["rpm", "dnf"];

/// At least one of these is needed for system-wide installs.
const ELEVATION: [&str; 2] = ["sudo", "pkexec"];

#[derive(Clone, Debug, Args)]
pub struct DoctorArg {}

impl DoctorArg {
    pub fn run(self, ctx: &Context) -> Result<()> {
        ctx.sink.info(&format!("Host: {}", ctx.config.describe_host()));
        ctx.sink.info(&format!("Cache: {}", ctx.config.cache_root()?.display()));
        if let Some(file) = Config::default_file() {
            let state = if file.is_file() { "" } else { " (absent)" };
            ctx.sink.info(&format!("Config: {}{state}", file.display()));
        }
        let token = if ctx.token().is_some() { "set" } else { "unset" };
        ctx.sink.info(&format!("{}: {token}", ctx.config.token_env));

        let mut missing = Vec::new();
        for tool in REQUIRED {
            match locate(tool) {
                Some(path) => ctx.sink.info(&format!("{tool}: {}", path.display())),
                None => {
                    ctx.sink.error(&format!("{tool}: not found on PATH"));
                    missing.push(tool);
                }
            }
        }
        if !ELEVATION.iter().any(|tool| is_executable_on_path(tool)) {
            ctx.sink.warn(&format!("none of {} found; system installs will fail", ELEVATION.join(", ")));
        }

        if !missing.is_empty() {
            bail!("missing required tools: {}", missing.join(", "));
        }
        Ok(())
    }
}
