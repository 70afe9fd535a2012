//! Persisted, ordered collection of saved colors.
//!
//! [`Collection`] is the in-memory value with pure transitions;
//! [`ColorCollection`] pairs it with a [`BlobStore`] and only replaces its
//! committed value once the store has accepted the new blob.

mod model;

pub use model::{
    Collection, CollectionLoad, ColorRecord, LoadStatus, RecordId,
};

use swatch_color::Rgb;
use swatch_store::BlobStore;

use crate::error::Result;

/// Committed collection backed by one key of a blob store.
#[derive(Debug)]
pub struct ColorCollection<S> {
    store: S,
    key: String,
    committed: Collection,
}

impl<S: BlobStore> ColorCollection<S> {
    /// Read the blob under `key` and build the collection from it.
    pub async fn open(store: S, key: impl Into<String>) -> Result<Self> {
        let mut collection = Self {
            store,
            key: key.into(),
            committed: Collection::new(),
        };
        collection.reload().await?;
        Ok(collection)
    }

    /// Re-read the stored blob, replacing the committed collection.
    ///
    /// A failed read keeps the current collection.
    pub async fn reload(&mut self) -> Result<LoadStatus> {
        let blob = self.store.get(&self.key).await.inspect_err(|err| {
            log::warn!("failed to read saved colors: {err}");
        })?;

        let (collection, status) =
            Collection::load(blob.as_deref()).into_parts();
        match &status {
            LoadStatus::Missing => log::debug!("no saved colors yet"),
            LoadStatus::Loaded { dropped } => log::info!(
                "loaded {} saved colors ({dropped} dropped)",
                collection.len()
            ),
            LoadStatus::Invalid(message) => {
                log::warn!("saved colors blob is unreadable: {message}")
            },
        }

        self.committed = collection;
        Ok(status)
    }

    /// Append a record and persist it.
    pub async fn add(&mut self, name: &str, value: Rgb) -> Result<ColorRecord> {
        let (next, record) = self.committed.add(name, value)?;
        self.commit(next).await?;
        log::info!("saved color {} as {:?}", record.value(), record.name());
        Ok(record)
    }

    /// Remove a record and persist the result.
    ///
    /// Returns whether a record was removed; unknown ids skip the write.
    pub async fn remove(&mut self, id: &RecordId) -> Result<bool> {
        if !self.committed.contains(id) {
            log::debug!("delete of unknown color {id} ignored");
            return Ok(false);
        }

        let next = self.committed.remove(id);
        self.commit(next).await?;
        log::info!("deleted color {id}");
        Ok(true)
    }

    pub fn collection(&self) -> &Collection {
        &self.committed
    }

    pub fn records(&self) -> &[ColorRecord] {
        self.committed.records()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn commit(&mut self, next: Collection) -> Result<()> {
        let blob = next.serialize()?;
        self.store.set(&self.key, blob).await.inspect_err(|err| {
            log::warn!("failed to persist saved colors: {err}");
        })?;
        self.committed = next;
        Ok(())
    }
}
