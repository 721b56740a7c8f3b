use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.full_path(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool> {
        Ok(fs::try_exists(self.full_path(path)).await?)
    }

    async fn resolve(&self, path: &str) -> Result<PathBuf> {
        Ok(fs::canonicalize(self.full_path(path)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        assert!(!storage.exists("team_names.txt").await.unwrap());
        storage.write_file("team_names.txt", b"a\nb").await.unwrap();
        assert!(storage.exists("team_names.txt").await.unwrap());
        assert_eq!(storage.read_file("team_names.txt").await.unwrap(), b"a\nb");
    }

    #[tokio::test]
    async fn test_resolve_is_absolute() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());

        assert!(storage.resolve("team_names.txt").await.is_err());

        storage.write_file("team_names.txt", b"").await.unwrap();
        let resolved = storage.resolve("team_names.txt").await.unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("team_names.txt"));
    }
}
