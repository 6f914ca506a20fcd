//! # adscribe Architecture
//!
//! adscribe is a **UI-agnostic campaign library**: it keeps a collection of
//! ad campaigns in a persistent key-value store, derives analytics from it,
//! and asks a local text-generation server for ad copy. The `adscribe`
//! binary is just one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (adscribe-cli)                                         │
//! │  - Arguments, terminal output, exit codes, session gate     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Validation, id resolution, user-facing messages          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Campaign Store (store/)  │ │  Ad-Copy Client (adcopy.rs)   │
//! │  write-through, newest    │ │  Ollama with templated        │
//! │  first                    │ │  fallback                     │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr or exits the process. The
//! only I/O is the storage backend and the HTTP call to the generator, and
//! both sit behind traits ([`store::backend::StorageBackend`],
//! [`adcopy::TextGenerator`]) so tests swap them for in-memory fakes.
//!
//! ## Logging
//!
//! The library emits [`tracing`] events and never installs a subscriber.

pub mod adcopy;
pub mod analytics;
pub mod api;
pub mod auth;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod query;
pub mod store;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
