//! Type-safe entity storage with generic key types.
//!
//! `EntityStore<K, V>` layers typed keys and automatic JSON serialization on
//! top of [`StorageBackend`]:
//!
//! ```text
//! EntityStore<K, V>        ← Typed entity CRUD (this file)
//!     ↓
//! StorageBackend           ← Generic K/V operations (storage_trait.rs)
//!     ↓
//! MemoryBackend/...        ← Actual storage implementation
//! ```
//!
//! Typed keys give compile-time safety: a `UserId` cannot be used to fetch a
//! session record, even though both serialize to bytes.

use std::sync::Arc;

use sessionhub_commons::StorageKey;
use serde::{Deserialize, Serialize};

use crate::storage_trait::{Partition, Result, StorageBackend, StorageError};

/// Trait for typed entity storage with automatic serialization.
///
/// Implementors supply the backend handle and a partition name; CRUD
/// operations with JSON serialization are provided.
pub trait EntityStore<K, V>
where
    K: StorageKey,
    V: Serialize + for<'de> Deserialize<'de> + Send + Sync,
{
    /// Returns a reference to the storage backend.
    fn backend(&self) -> &Arc<dyn StorageBackend>;

    /// Returns the partition for this entity type.
    fn partition(&self) -> Partition;

    /// Serializes an entity to bytes. Default: JSON.
    fn serialize(&self, entity: &V) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Deserializes bytes to an entity. Default: JSON.
    fn deserialize(&self, bytes: &[u8]) -> Result<V> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::SerializationError(e.to_string()))
    }

    /// Stores an entity under its key, overwriting any previous value.
    fn put(&self, key: &K, entity: &V) -> Result<()> {
        let bytes = self.serialize(entity)?;
        self.backend()
            .put(&self.partition(), &key.storage_key(), &bytes)
    }

    /// Retrieves an entity by key.
    fn get(&self, key: &K) -> Result<Option<V>> {
        match self.backend().get(&self.partition(), &key.storage_key())? {
            Some(bytes) => Ok(Some(self.deserialize(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Removes an entity by key.
    fn delete(&self, key: &K) -> Result<()> {
        self.backend()
            .delete(&self.partition(), &key.storage_key())
    }

    /// Returns all entities in the partition, in key order.
    fn scan_all(&self) -> Result<Vec<V>> {
        self.backend()
            .scan_all(&self.partition())?
            .into_iter()
            .map(|(_, bytes)| self.deserialize(&bytes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        body: String,
    }

    struct NoteStore {
        backend: Arc<dyn StorageBackend>,
    }

    impl EntityStore<String, Note> for NoteStore {
        fn backend(&self) -> &Arc<dyn StorageBackend> {
            &self.backend
        }

        fn partition(&self) -> Partition {
            Partition::new("notes")
        }
    }

    #[test]
    fn typed_round_trip() {
        let store = NoteStore {
            backend: Arc::new(MemoryBackend::new()),
        };
        let note = Note {
            id: "n1".to_string(),
            body: "hello".to_string(),
        };

        store.put(&note.id.clone(), &note).unwrap();
        assert_eq!(store.get(&"n1".to_string()).unwrap(), Some(note.clone()));
        assert_eq!(store.scan_all().unwrap(), vec![note]);

        store.delete(&"n1".to_string()).unwrap();
        assert_eq!(store.get(&"n1".to_string()).unwrap(), None);
    }
}
