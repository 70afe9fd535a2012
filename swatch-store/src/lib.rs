//! Storage collaborator for swatch.
//!
//! The rest of the workspace treats durable storage as an asynchronous
//! get/set of opaque text blobs under string keys, described by
//! [`BlobStore`]. Two implementations ship here:
//! - [`MemoryStore`], an in-process map that can be switched into a failing
//!   mode to exercise error paths;
//! - [`FileStore`], one JSON file per key under a directory, replaced
//!   atomically on every write.

use std::future::Future;

mod error;
mod file;
mod memory;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Asynchronous key-value store for text blobs.
pub trait BlobStore {
    /// Read the blob stored under `key`; `None` when nothing was stored.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Replace the blob stored under `key`.
    fn set(
        &self,
        key: &str,
        blob: String,
    ) -> impl Future<Output = Result<()>> + Send;
}
