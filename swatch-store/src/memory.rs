use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::{BlobStore, Result, StoreError};

/// In-process blob store.
///
/// Clones share the same data, so a test can keep a handle while another
/// component owns the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    blobs: RwLock<HashMap<String, String>>,
    unavailable: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one blob.
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), blob.into());
        Self {
            inner: Arc::new(MemoryInner {
                blobs: RwLock::new(blobs),
                ..MemoryInner::default()
            }),
        }
    }

    /// Make every following read and write fail until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of successful writes since creation.
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    fn ensure_available(&self) -> Result<()> {
        if self.inner.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(String::from(
                "memory store switched off",
            )));
        }
        Ok(())
    }
}

impl BlobStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_available()?;
        Ok(self.inner.blobs.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: String) -> Result<()> {
        self.ensure_available()?;
        self.inner.blobs.write().await.insert(key.to_string(), blob);
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
