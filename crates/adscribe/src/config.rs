//! # Configuration
//!
//! adscribe configuration is managed by [`confique`], which handles layered
//! loading from environment variables, a TOML file, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ADSCRIBE_DATA_DIR`, `ADSCRIBE_GENERATOR_ENDPOINT`, etc.
//! 2. **Config file**: `adscribe.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | platform data dir | Where campaigns and the session are stored |
//! | `generator_endpoint` | `http://localhost:11434/api/generate` | Text-generation endpoint |
//! | `generator_model` | `mistral` | Model name sent with each request |
//! | `generator_timeout_secs` | `30` | Connect/read/write timeout for generation |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adcopy::OllamaClient;
use crate::error::{AdScribeError, Result};

pub const CONFIG_FILE: &str = "adscribe.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdScribeConfig {
    /// Directory holding the persisted keys. Defaults to the platform data dir.
    #[config(env = "ADSCRIBE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Text-generation endpoint (Ollama `/api/generate`).
    #[config(env = "ADSCRIBE_GENERATOR_ENDPOINT", default = "http://localhost:11434/api/generate")]
    pub generator_endpoint: String,

    /// Model identifier sent with every generation request.
    #[config(env = "ADSCRIBE_GENERATOR_MODEL", default = "mistral")]
    pub generator_model: String,

    /// Timeout in seconds applied to connect, read and write.
    #[config(env = "ADSCRIBE_GENERATOR_TIMEOUT_SECS", default = 30)]
    pub generator_timeout_secs: u64,
}

impl Default for AdScribeConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            generator_endpoint: crate::adcopy::DEFAULT_ENDPOINT.to_string(),
            generator_model: crate::adcopy::DEFAULT_MODEL.to_string(),
            generator_timeout_secs: crate::adcopy::DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Platform data directory, e.g. `~/.local/share/adscribe` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "adscribe", "adscribe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AdScribeError::Config("Could not determine data dir".to_string()))
}

impl AdScribeConfig {
    /// Load from the environment, then `<dir>/adscribe.toml`, then defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| AdScribeError::Config(e.to_string()))
    }

    /// Load from a single TOML file and defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::builder()
            .file(path)
            .load()
            .map_err(|e| AdScribeError::Config(e.to_string()))
    }

    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    pub fn generator_timeout(&self) -> Duration {
        Duration::from_secs(self.generator_timeout_secs.max(1))
    }

    pub fn ollama_client(&self) -> OllamaClient {
        OllamaClient::new(
            self.generator_endpoint.clone(),
            self.generator_model.clone(),
            self.generator_timeout(),
        )
    }
}
