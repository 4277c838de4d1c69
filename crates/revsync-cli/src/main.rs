//! revsync binary.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use revsync_git::GitBackend;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        },
    }
}

fn execute(cli: &Cli) -> anyhow::Result<bool> {
    let config = cli.backend_config()?;

    tracing::info!("revsync v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Git repository: {}", config.repo_url());
    tracing::info!("Working directory: {}", config.working_dir().display());

    let backend = GitBackend::with_process_runner(config);
    let stdout = std::io::stdout();
    cli::run(&cli.action, cli.json, &backend, &mut stdout.lock())
}
