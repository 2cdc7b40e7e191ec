//! # Randnote CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! - `crates/randnoteapp/`: library with the selector, graph sources and commands
//! - `crates/randnote/`: this CLI, one client of the library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/randnote/src/cli/)                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal and JSON rendering (render.rs, styles.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/randnoteapp/src/api.rs)                  │
//! │  - Turns configuration + free-text counts into options      │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/randnoteapp/src/commands/*)          │
//! │  - Selection, link blocks, writing into pages               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI owns every user-facing concern: argument parsing, logging setup,
//! the random source, clipboard access, rendering and exit codes.
//!
//! ## Output Streams
//!
//! Picked links go to stdout on their own so they can be piped into an editor.
//! Messages (warnings about empty selections, confirmations) go to stderr.
//! Empty selections are not failures: the exit status stays 0.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests per module, property tests for the selector.
//! - **Rendering**: canned `CmdResult`/`Page` values rendered without color.
//! - **End to end**: `tests/cli_e2e.rs` runs the binary against temporary graphs
//!   with `--seed` for reproducible picks.

mod cli;
mod clipboard;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
