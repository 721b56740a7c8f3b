pub mod collect;
pub mod draft;
pub mod engine;
pub mod hashing;
pub mod report;
pub mod store;

pub use crate::domain::model::{DraftEntry, DraftReport, Participant, RunTimestamp};
pub use crate::domain::ports::{ConfigProvider, Storage, TeamNameCollector};
pub use crate::utils::error::Result;
