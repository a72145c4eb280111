//! Storage backend abstraction for pluggable storage implementations.
//!
//! Defines a `StorageBackend` trait with the operations the domain layer
//! needs: get/put/delete for key-value access and scan for listing a
//! partition. Different backends map partitions to their native concepts:
//!
//! - **In-Memory**: Partition = HashMap namespace (the default backend)
//! - **RocksDB**: Partition = Column Family
//! - **Sled**: Partition = Tree
//!
//! Every operation touches exactly one key (or scans one partition), and
//! backends are required to apply each write atomically; no multi-record
//! transactions exist anywhere in SessionHub.

use std::fmt;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Partition (namespace, column family, tree) not found
    PartitionNotFound(String),

    /// Generic I/O error from the underlying storage
    IoError(String),

    /// Serialization/deserialization error
    SerializationError(String),

    /// Lock poisoning error (internal concurrency issue)
    LockPoisoned(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::PartitionNotFound(p) => write!(f, "Partition not found: {}", p),
            StorageError::IoError(msg) => write!(f, "I/O error: {}", msg),
            StorageError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
            StorageError::Other(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// A named partition within a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Partition(String);

impl Partition {
    /// Creates a partition handle with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the partition name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generic key-value operations over named partitions.
///
/// Implementations must be safe for concurrent use; individual operations are
/// atomic with respect to each other.
pub trait StorageBackend: Send + Sync {
    /// Retrieves the value stored under `key`, if any.
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()>;

    /// Stores `value` under `key` only if the key is currently absent.
    ///
    /// Returns `true` when the value was written, `false` when the key was
    /// already present. Used to enforce unique indexes (e.g. emails) without
    /// a check-then-write race.
    fn put_if_absent(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<bool>;

    /// Removes the value stored under `key`. Removing an absent key is a no-op.
    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()>;

    /// Returns all key-value pairs in the partition, in key order.
    fn scan_all(&self, partition: &Partition) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;
}
