// ABOUTME: Entry point for the shear CLI application.
// ABOUTME: Opens the log sink, loads the allow-list and runs one retention pass.

mod cli;

use clap::Parser;
use cli::Cli;
use shear::allowlist::AllowSet;
use shear::config::Config;
use shear::error::Result;
use shear::logging;
use shear::retention::{ConfigUnavailableSnafu, RetentionEngine, RunReport, TracingSink};
use shear::runtime;
use snafu::ResultExt;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Held until main returns so the file is flushed on every exit path.
    let _log_guard = match logging::init(&config.log_file, &config.log_level, cli.verbose) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "shear starting");

    match run(&config, cli.dry_run).await {
        Ok(report) => {
            if report.has_failures() {
                tracing::warn!(failed = report.failed, "some images could not be removed");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            logging::fatal(&e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::discover(cli.config.as_deref())?;
    if let Some(ref path) = cli.allowlist {
        config.allowlist = path.clone();
    }
    if let Some(ref path) = cli.log_file {
        config.log_file = path.clone();
    }
    Ok(config)
}

async fn run(config: &Config, dry_run: bool) -> Result<RunReport> {
    // The allow-list must be readable before the runtime is touched.
    let allow = AllowSet::load(&config.allowlist).context(ConfigUnavailableSnafu)?;
    if allow.is_empty() {
        tracing::warn!(
            path = %config.allowlist.display(),
            "allow-list is empty, every image is eligible for removal"
        );
    } else {
        tracing::debug!(
            path = %config.allowlist.display(),
            entries = allow.len(),
            "loaded allow-list"
        );
    }

    let runtime = runtime::connect_local(&config.runtime_config(), config.timeout)?;
    tracing::debug!(runtime = %runtime.runtime_type(), "connected to container runtime");

    let mut engine = RetentionEngine::new(&runtime, allow, TracingSink).dry_run(dry_run);
    Ok(engine.run().await?)
}
