//! # Randnote Architecture
//!
//! Randnote picks random pages out of a note graph and turns them into links.
//! Like any good note tool it is a library first: the `randnote` binary is one
//! client of it, and nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/randnote)                                      │
//! │  - Parses arguments, renders output, owns stdout/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, generic over the graph source │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - pick / pages / config, returning structured CmdResults   │
//! │  - Built on the pure Selector (selector.rs)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Graph Layer (graph/)                                       │
//! │  - Abstract Graph trait                                     │
//! │  - FsGraph (Logseq directory), JsonGraph, MemGraph          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Selector
//!
//! The only real logic lives in [`selector`]: filter the page population by
//! per-attribute [`attributes::FilterMode`]s, draw a uniform sample without
//! replacement, and optionally sort it by display name. It is a pure function
//! over a borrowed slice and an injected random source, so it is tested in
//! isolation (including property tests) and reused by every command.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never assumes a terminal. Empty selections are reported as
//! warning messages in the [`commands::CmdResult`], not as errors.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Command logic (`pick`, `pages`, `config`)
//! - [`selector`]: Filter, sample and order pages
//! - [`attributes`]: Filter modes and the attribute dimension registry
//! - [`count`]: Requested count parsing
//! - [`blocks`]: Link blocks, header wrapping and outline rendering
//! - [`graph`]: Graph sources
//! - [`model`]: Page records
//! - [`config`]: Configuration
//! - [`init`]: Graph discovery and context setup
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod blocks;
pub mod commands;
pub mod config;
pub mod count;
pub mod error;
pub mod graph;
pub mod init;
pub mod model;
pub mod selector;

#[cfg(test)]
pub mod test_utils;
