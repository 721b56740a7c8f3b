use crate::domain::model::Participant;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono_tz::Tz;
use std::path::PathBuf;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = Result<bool>> + Send;
    fn resolve(&self, path: &str) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster(&self) -> &[Participant];
    fn timezone(&self) -> Tz;
    fn fallback_salt(&self) -> &str;
    fn store_file(&self) -> &str;
}

/// Produces the finalized team name for every roster slot. An empty
/// string marks the fallback.
#[async_trait]
pub trait TeamNameCollector: Send {
    async fn collect(&mut self, roster: &[Participant], stored: &[String]) -> Result<Vec<String>>;
}
