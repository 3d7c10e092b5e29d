//! Common test utilities

use snappy_inventory::{ItemStore, MemoryStorage, StoreOptions};
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)]
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Store over fresh in-memory storage, seeded, with no latency
#[allow(dead_code)]
pub fn memory_store() -> ItemStore<MemoryStorage> {
    ItemStore::new(MemoryStorage::new(), StoreOptions::immediate())
        .expect("Failed to create item store")
}
