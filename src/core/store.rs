use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Positional team-name file: one line per roster slot, newline-joined.
pub struct TeamNameStore<S: Storage> {
    storage: S,
    file_name: String,
    roster_len: usize,
}

impl<S: Storage> TeamNameStore<S> {
    pub fn new(storage: S, file_name: impl Into<String>, roster_len: usize) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
            roster_len,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns exactly `roster_len` entries. A missing file is created with
    /// empty lines first; a short or long file is padded or truncated in
    /// memory only.
    pub async fn load(&self) -> Result<Vec<String>> {
        if !self.storage.exists(&self.file_name).await? {
            tracing::info!(
                "Team-name store '{}' not found, initializing {} empty entries",
                self.file_name,
                self.roster_len
            );
            let blank = "\n".repeat(self.roster_len.saturating_sub(1));
            self.storage.write_file(&self.file_name, blank.as_bytes()).await?;
        }

        let data = self.storage.read_file(&self.file_name).await?;
        let content = String::from_utf8_lossy(&data);
        let mut entries: Vec<String> = content.lines().map(str::to_string).collect();

        if entries.len() != self.roster_len {
            tracing::debug!(
                "Store has {} lines for a roster of {}, normalizing",
                entries.len(),
                self.roster_len
            );
        }
        entries.resize(self.roster_len, String::new());

        Ok(entries)
    }

    pub async fn save(&self, entries: &[String]) -> Result<()> {
        let content = entries.join("\n");
        self.storage.write_file(&self.file_name, content.as_bytes()).await?;
        tracing::info!("Saved {} team names to '{}'", entries.len(), self.file_name);
        Ok(())
    }

    pub async fn resolved_path(&self) -> Result<PathBuf> {
        self.storage.resolve(&self.file_name).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::error::DraftError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    pub(crate) struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) async fn with_file(path: &str, content: &str) -> Self {
            let storage = Self::new();
            storage.write_file(path, content.as_bytes()).await.unwrap();
            storage
        }

        pub(crate) async fn get_file(&self, path: &str) -> Option<String> {
            let files = self.files.lock().await;
            files
                .get(path)
                .map(|data| String::from_utf8_lossy(data).into_owned())
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                DraftError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn exists(&self, path: &str) -> Result<bool> {
            Ok(self.files.lock().await.contains_key(path))
        }

        async fn resolve(&self, path: &str) -> Result<PathBuf> {
            Ok(PathBuf::from("/mock").join(path))
        }
    }

    #[tokio::test]
    async fn test_load_initializes_missing_file() {
        let storage = MockStorage::new();
        let store = TeamNameStore::new(storage.clone(), "team_names.txt", 12);

        let entries = store.load().await.unwrap();

        assert_eq!(entries, vec![String::new(); 12]);
        assert_eq!(
            storage.get_file("team_names.txt").await.unwrap(),
            "\n".repeat(11)
        );
    }

    #[tokio::test]
    async fn test_load_pads_short_file_without_rewriting() {
        let storage = MockStorage::with_file("team_names.txt", "Raptors\nSharks").await;
        let store = TeamNameStore::new(storage.clone(), "team_names.txt", 4);

        let entries = store.load().await.unwrap();

        assert_eq!(entries, vec!["Raptors", "Sharks", "", ""]);
        assert_eq!(
            storage.get_file("team_names.txt").await.unwrap(),
            "Raptors\nSharks"
        );
    }

    #[tokio::test]
    async fn test_load_truncates_long_file() {
        let storage = MockStorage::with_file("team_names.txt", "a\nb\nc\nd\ne").await;
        let store = TeamNameStore::new(storage, "team_names.txt", 3);

        assert_eq!(store.load().await.unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let storage = MockStorage::new();
        let store = TeamNameStore::new(storage.clone(), "team_names.txt", 3);
        let names = vec![
            "Rocket Raptors".to_string(),
            String::new(),
            " stale ".to_string(),
        ];

        store.save(&names).await.unwrap();

        assert_eq!(
            storage.get_file("team_names.txt").await.unwrap(),
            "Rocket Raptors\n\n stale "
        );
        assert_eq!(store.load().await.unwrap(), names);
    }

    #[tokio::test]
    async fn test_all_empty_round_trips() {
        let storage = MockStorage::new();
        let store = TeamNameStore::new(storage, "team_names.txt", 12);
        let names = vec![String::new(); 12];

        store.save(&names).await.unwrap();

        assert_eq!(store.load().await.unwrap(), names);
    }
}
