//! # sessionhub-store
//!
//! Generic document storage for SessionHub.
//!
//! The store is treated as an external collaborator by the domain logic: it
//! offers create/find/update-by-id over named partitions and nothing more.
//! The abstraction uses a [`StorageBackend`] trait so the backend can be
//! swapped (in-memory, RocksDB, Sled, ...) without touching core logic, and a
//! typed [`EntityStore`] trait that layers key typing and JSON serialization
//! on top.

pub mod entity_store;
pub mod memory;
pub mod storage_trait;

pub use entity_store::EntityStore;
pub use memory::MemoryBackend;
pub use storage_trait::{Partition, Result, StorageBackend, StorageError};
