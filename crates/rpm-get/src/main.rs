mod cli;
mod config;
mod ui;

use std::sync::Arc;

use clap::Parser;
use rpm_get_platform::{ConsoleSink, LogSink, Severity};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::App;

fn main() {
    let app = App::parse();
    init_tracing(app.verbose);

    let sink = Arc::new(ConsoleSink::new().quiet(app.quiet));
    if let Err(err) = cli::run(app, sink.clone()) {
        tracing::debug!(error = ?err, "command failed");
        sink.log(&format!("{err:#}"), Severity::Fatal);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
