pub mod cli;
pub mod settings;

pub use settings::DraftSettings;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Options shared by the interactive and non-interactive entry points.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "draft-order")]
#[command(about = "Deterministic fantasy draft order from hashed team names")]
pub struct CliConfig {
    /// Directory holding the team-name store
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    /// File name of the team-name store inside the data directory
    #[arg(long, default_value = settings::DEFAULT_STORE_FILE)]
    pub store_file: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Compute and print the order without rewriting the store
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> DraftSettings {
        DraftSettings::default().with_store_file(self.store_file.clone())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        validation::validate_file_name("store_file", &self.store_file)?;
        Ok(())
    }
}
