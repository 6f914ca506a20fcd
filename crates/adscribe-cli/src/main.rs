//! # adscribe CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/adscribe/`: campaign store, analytics, ad-copy generation
//! - `crates/adscribe-cli/`: this terminal client
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/adscribe-cli/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, session gate, dispatch (commands.rs)     │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/adscribe/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dashboard screens of the browser build map onto subcommands: the
//! campaign list is `list`, the creator is `create`/`generate`, the detail
//! page is `show`, and the analytics page is `analytics`. The login page's
//! protected-route behavior is the session gate in `commands.rs`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
