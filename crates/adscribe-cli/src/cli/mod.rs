//! # CLI Behavior
//!
//! This is **one possible UI client** for adscribe. The CLI is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ## Naked Execution
//!
//! Running `adscribe` with no arguments defaults to `adscribe list`.
//!
//! ## Session Gate
//!
//! Every command that reads or changes campaigns requires a logged-in user.
//! `login`, `config` and `generate` work without one.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers
//! - `render`: output formatting (tables, colors, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
