//! Storage key trait for type-safe key serialization.
//!
//! Entity stores persist values under byte keys. Relying on `AsRef<[u8]>` for
//! key serialization invites wrong-key bugs (any string-ish type would
//! compile); this trait provides an explicit contract for storage
//! serialization, separate from `AsRef` which may be used for other purposes.
//!
//! All SessionHub keys are single UTF-8 strings (nanoid identifiers or
//! normalized email addresses), so plain byte encoding preserves ordering and
//! no composite-key encoding scheme is required.

/// Trait for types that can serve as storage keys.
pub trait StorageKey {
    /// Serializes this key to its storage byte representation.
    fn storage_key(&self) -> Vec<u8>;
}

impl StorageKey for String {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl StorageKey for &str {
    fn storage_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}
