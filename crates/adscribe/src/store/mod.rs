//! # Storage Layer
//!
//! adscribe keeps all of its state in a small key-value store, the same
//! shape as browser local storage: two independent keys, each holding one
//! JSON document.
//!
//! ```text
//! <data dir>/
//! ├── adScribeCampaigns.json   # Serialized campaign collection (newest first)
//! ├── adScribeUser.json        # Authenticated user {email, name}, absent when logged out
//! └── adscribe.toml            # Optional configuration
//! ```
//!
//! ## Layers
//!
//! 1. [`backend::StorageBackend`]: raw `get`/`set`/`remove` of strings by key.
//!    - [`fs_backend::FsBackend`]: production, one file per key, atomic writes.
//!    - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//! 2. [`PersistentStore`]: knows the key names and the JSON encoding. No
//!    business logic.
//! 3. [`campaign_store::CampaignStore`]: the in-memory owner of the campaign
//!    collection, writing through to the persistent store on every mutation.
//!
//! ## Corruption
//!
//! A value that exists but does not decode is reported as
//! [`AdScribeError::Parse`]. The adapter never repairs data; callers decide
//! whether to treat it as absent.

use crate::error::{AdScribeError, Result};
use crate::model::{Campaign, User};
use backend::StorageBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod backend;
pub mod campaign_store;
pub mod fs_backend;
pub mod mem_backend;

pub const CAMPAIGNS_KEY: &str = "adScribeCampaigns";
pub const USER_KEY: &str = "adScribeUser";

/// Typed access to the persisted keys.
pub struct PersistentStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn read_campaigns(&self) -> Result<Option<Vec<Campaign>>> {
        self.read_json(CAMPAIGNS_KEY)
    }

    pub fn write_campaigns(&self, campaigns: &[Campaign]) -> Result<()> {
        self.write_json(CAMPAIGNS_KEY, campaigns)
    }

    pub fn clear_campaigns(&self) -> Result<()> {
        self.backend.remove(CAMPAIGNS_KEY)
    }

    pub fn read_user(&self) -> Result<Option<User>> {
        self.read_json(USER_KEY)
    }

    pub fn write_user(&self, user: &User) -> Result<()> {
        self.write_json(USER_KEY, user)
    }

    pub fn clear_user(&self) -> Result<()> {
        self.backend.remove(USER_KEY)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(|source| AdScribeError::Parse {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let content = serde_json::to_string_pretty(value).map_err(AdScribeError::Serialization)?;
        self.backend.set(key, &content)
    }
}
