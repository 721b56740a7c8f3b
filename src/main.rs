use clap::Parser;
use draft_order::app::runner;
use draft_order::utils::logger;
use draft_order::{CliConfig, InteractiveCollector};
use std::process::ExitCode;
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting interactive draft");
    tracing::debug!("CLI config: {:?}", config);

    let mut collector = InteractiveCollector::new(BufReader::new(tokio::io::stdin()), std::io::stdout());
    if let Err(e) = collector.print_instructions() {
        eprintln!("❌ {}", e.user_friendly_message());
        return ExitCode::FAILURE;
    }

    runner::run_to_exit(config, collector).await
}
