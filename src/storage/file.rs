use crate::error::Result;
use crate::storage::KeyValueStore;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<key>.json` file per key inside a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;

        // write-then-rename so readers never see half a file
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        match tokio::fs::metadata(&self.dir).await {
            Ok(meta) => meta.is_dir(),
            // created lazily on first write
            Err(e) => e.kind() == ErrorKind::NotFound,
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("walking-route-history").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.set("walking-route-history", "[]").await.unwrap();
        assert_eq!(
            store.get("walking-route-history").await.unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir
            .path()
            .join("nested")
            .join("walking-route-history.json")
            .exists());
    }

    #[tokio::test]
    async fn keys_are_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store.set("../escape", "x").await.unwrap();
        assert!(dir.path().join("___escape.json").exists());
        assert_eq!(store.get("../escape").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn write_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = FileStore::new(&blocker);
        assert!(store.set("k", "v").await.is_err());
        assert!(!store.health_check().await);
    }

    #[tokio::test]
    async fn health_of_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileStore::new(dir.path()).health_check().await);
        assert!(FileStore::new(dir.path().join("later")).health_check().await);
        assert_eq!(FileStore::new(dir.path()).backend_name(), "file");
    }
}
