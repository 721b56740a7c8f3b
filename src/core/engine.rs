use crate::core::draft::{audit_trail, compute_entries, order_by_digest};
use crate::core::store::TeamNameStore;
use crate::domain::model::{DraftReport, RunTimestamp};
use crate::domain::ports::{ConfigProvider, Storage, TeamNameCollector};
use crate::utils::error::Result;

/// Load -> Collect -> Save -> Compute -> Sort, once per run.
pub struct DraftEngine<S: Storage, C: ConfigProvider, K: TeamNameCollector> {
    store: TeamNameStore<S>,
    config: C,
    collector: K,
    dry_run: bool,
}

impl<S: Storage, C: ConfigProvider, K: TeamNameCollector> DraftEngine<S, C, K> {
    pub fn new(storage: S, config: C, collector: K) -> Self {
        let store = TeamNameStore::new(storage, config.store_file(), config.roster().len());
        Self {
            store,
            config,
            collector,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&mut self, run_timestamp: RunTimestamp) -> Result<DraftReport> {
        let roster = self.config.roster();

        let stored = self.store.load().await?;
        tracing::info!("Loaded {} stored team names", stored.len());

        let finalized = self.collector.collect(roster, &stored).await?;

        if self.dry_run {
            tracing::info!("Dry run, leaving '{}' untouched", self.store.file_name());
        } else {
            self.store.save(&finalized).await?;
        }

        let entries = compute_entries(
            roster,
            &finalized,
            self.config.fallback_salt(),
            &run_timestamp,
        );
        let fallbacks = entries.iter().filter(|e| e.used_fallback()).count();
        if fallbacks > 0 {
            tracing::info!("{} participant(s) used the timestamp fallback", fallbacks);
        }

        let audit = audit_trail(&entries);
        let order = order_by_digest(entries);
        let store_path = self.store.resolved_path().await?;

        Ok(DraftReport {
            timezone: self.config.timezone().name().to_string(),
            run_timestamp: run_timestamp.to_iso8601(),
            order,
            audit,
            store_path,
            saved: !self.dry_run,
        })
    }
}
