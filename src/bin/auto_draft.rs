use clap::Parser;
use draft_order::app::runner;
use draft_order::utils::logger;
use draft_order::{CliConfig, StoredNameCollector};
use std::process::ExitCode;

/// Non-interactive draft: stored team names are used as-is, anything
/// empty or invalid falls back to the timestamp salt.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting non-interactive draft");
    tracing::debug!("CLI config: {:?}", config);

    runner::run_to_exit(config, StoredNameCollector).await
}
