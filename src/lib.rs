pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, DraftSettings, ReportFormat};

pub use core::collect::{InteractiveCollector, StoredNameCollector};
pub use core::engine::DraftEngine;
pub use utils::error::{DraftError, Result};
