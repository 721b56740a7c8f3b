use crate::config::cli::LocalStorage;
use crate::config::CliConfig;
use crate::core::engine::DraftEngine;
use crate::core::report;
use crate::domain::model::{DraftReport, RunTimestamp};
use crate::domain::ports::{ConfigProvider, TeamNameCollector};
use crate::utils::error::{DraftError, Result};
use crate::utils::validation::Validate;
use std::process::ExitCode;

/// Validates options, captures the run timestamp and drives the engine
/// against the local store.
pub async fn run_draft<K: TeamNameCollector>(config: &CliConfig, collector: K) -> Result<DraftReport> {
    config.validate()?;
    let settings = config.settings();
    settings.validate()?;

    let run_timestamp = RunTimestamp::capture(&settings.timezone());
    tracing::debug!("Run timestamp: {}", run_timestamp);

    let storage = LocalStorage::new(config.data_dir.clone());
    let mut engine = DraftEngine::new(storage, settings, collector).with_dry_run(config.dry_run);
    engine.run(run_timestamp).await
}

/// Shared tail of every entry point: print the report or the failure and
/// map it to an exit status.
pub async fn run_to_exit<K: TeamNameCollector>(config: CliConfig, collector: K) -> ExitCode {
    let outcome = run_draft(&config, collector)
        .await
        .and_then(|draft| report::render(&draft, config.format));

    match outcome {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

fn report_failure(e: &DraftError) {
    tracing::error!("❌ Draft run failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
