//! # CLI Behavior
//!
//! This is **one possible UI client** for randnote, not the application itself.
//!
//! ## Naked Execution (`randnote`)
//!
//! Running `randnote` with no subcommand is `randnote pick`: pick links and print
//! them. A leading number is the count, read the way an editor reads the text
//! before the cursor, so `randnote 3`, `randnote "3 notes"` and `randnote x`
//! (one page) all work.
//!
//! ## Where Links Go
//!
//! 1. **Stdout** (default): the outline, ready to paste or pipe.
//! 2. **Clipboard** (`--copy`): copied instead of printed.
//! 3. **A page** (`--page NAME` or `--today`): appended, or prepended with
//!    `--prepend`, to a page of the graph.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch and per-command handlers
//! - `render`: Output formatting (outline, page lists, messages, JSON)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
