use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{BlobStore, Result, StoreError};

/// Blob store keeping one `<key>.json` file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// Characters outside `[A-Za-z0-9_-]` become `_`, and leading or
    /// trailing underscores are dropped, so `@saved_colors` maps to
    /// `saved_colors.json`.
    ///
    /// The mapping is not injective: `@saved_colors`, `saved.colors` and
    /// `saved_colors` all share `saved_colors.json`. Callers sharing one
    /// directory must pick keys that stay distinct after sanitizing.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let sanitized: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        let stem = sanitized.trim_matches('_');
        if stem.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.dir.join(format!("{stem}.json")))
    }
}

impl BlobStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no blob at {}", path.display());
                Ok(None)
            },
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, blob: String) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).await?;
        write_atomic(&path, blob.as_bytes()).await?;
        log::debug!("wrote {} bytes to {}", blob.len(), path.display());
        Ok(())
    }
}

async fn write_atomic(path: &Path, payload: &[u8]) -> io::Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload).await?;
    fs::rename(tmp_path, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn given_prefixed_key_when_mapped_then_file_name_is_sanitized() {
        let store = FileStore::new("/data");

        let path = store.path_for("@saved_colors").expect("valid key");

        assert_eq!(path, PathBuf::from("/data/saved_colors.json"));
        assert_eq!(
            store.path_for("../etc/passwd").expect("valid key"),
            PathBuf::from("/data/etc_passwd.json")
        );
    }

    #[test]
    fn given_keys_differing_only_in_punctuation_then_they_share_a_file() {
        let store = FileStore::new("/data");
        let expected = PathBuf::from("/data/saved_colors.json");

        for key in ["@saved_colors", "saved.colors", "saved_colors"] {
            assert_eq!(store.path_for(key).expect("valid key"), expected);
        }
    }

    #[test]
    fn given_key_without_usable_characters_when_mapped_then_rejected() {
        let store = FileStore::new("/data");

        assert!(matches!(
            store.path_for("@@"),
            Err(StoreError::InvalidKey(_))
        ));
    }

    #[tokio::test]
    async fn given_missing_file_when_get_then_returns_none() {
        let root = test_temp_dir("missing");
        let store = FileStore::new(&root);

        let blob = store.get("colors").await.expect("read should succeed");

        assert_eq!(blob, None);
    }

    #[tokio::test]
    async fn given_blob_when_set_and_get_then_round_trips() {
        let root = test_temp_dir("round_trip");
        let store = FileStore::new(root.join("nested"));

        store
            .set("@saved_colors", String::from("[{\"id\":\"1\"}]"))
            .await
            .expect("write should succeed");
        store
            .set("@saved_colors", String::from("[]"))
            .await
            .expect("overwrite should succeed");

        let blob = store
            .get("@saved_colors")
            .await
            .expect("read should succeed");
        assert_eq!(blob.as_deref(), Some("[]"));
        assert!(!root.join("nested").join("saved_colors.json.tmp").exists());

        std::fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "swatch-store-{test_name}-{stamp}-{}",
            std::process::id()
        ))
    }
}
