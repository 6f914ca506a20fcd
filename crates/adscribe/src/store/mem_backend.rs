use super::backend::StorageBackend;
use crate::error::{AdScribeError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since adscribe is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes: RefCell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(AdScribeError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(AdScribeError::Store("Simulated write error".to_string()));
        }
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemBackend::new();
        assert_eq!(backend.get("k").unwrap(), None);
        backend.set("k", "v1").unwrap();
        backend.set("k", "v2").unwrap();
        assert_eq!(backend.get("k").unwrap(), Some("v2".to_string()));
        assert_eq!(backend.write_count(), 2);
        backend.remove("k").unwrap();
        assert_eq!(backend.get("k").unwrap(), None);
    }

    #[test]
    fn test_simulated_write_error() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        assert!(backend.set("k", "v").is_err());
        assert_eq!(backend.get("k").unwrap(), None);
        assert_eq!(backend.write_count(), 0);
    }
}
