use crate::error::Result;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `PersistentStore` handles the "what" (key names, encoding).
///
/// It mirrors browser local storage: string keys, string values, whole-value
/// overwrites. All methods take `&self`; implementations that hold state use
/// interior mutability.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the value under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
