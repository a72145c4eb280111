//! In-memory storage backend.
//!
//! Partitions are created lazily on first write; reads from a partition that
//! was never written behave as an empty partition rather than an error, which
//! matches how the repositories use the store (a fresh server has no users or
//! sessions yet).

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use crate::storage_trait::{Partition, Result, StorageBackend, StorageError};

type PartitionMap = BTreeMap<Vec<u8>, Vec<u8>>;

/// Thread-safe in-memory implementation of [`StorageBackend`].
#[derive(Default)]
pub struct MemoryBackend {
    partitions: RwLock<HashMap<String, PartitionMap>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, partition: &Partition, key: &[u8]) -> Result<Option<Vec<u8>>> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(partitions
            .get(partition.name())
            .and_then(|map| map.get(key).cloned()))
    }

    fn put(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<()> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        partitions
            .entry(partition.name().to_string())
            .or_default()
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn put_if_absent(&self, partition: &Partition, key: &[u8], value: &[u8]) -> Result<bool> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        let map = partitions.entry(partition.name().to_string()).or_default();
        if map.contains_key(key) {
            return Ok(false);
        }
        map.insert(key.to_vec(), value.to_vec());
        Ok(true)
    }

    fn delete(&self, partition: &Partition, key: &[u8]) -> Result<()> {
        let mut partitions = self
            .partitions
            .write()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        if let Some(map) = partitions.get_mut(partition.name()) {
            map.remove(key);
        }
        Ok(())
    }

    fn scan_all(&self, partition: &Partition) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let partitions = self
            .partitions
            .read()
            .map_err(|e| StorageError::LockPoisoned(e.to_string()))?;
        Ok(partitions
            .get(partition.name())
            .map(|map| {
                map.iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default())
    }
}
