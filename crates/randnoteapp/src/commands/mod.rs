//! # Command Layer
//!
//! Each command lives in its own submodule as a plain function over a
//! [`Graph`](crate::graph::Graph) and typed options.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Load the page population and run the [`selector`](crate::selector)
//! - Build and place link blocks
//! - Return structured [`CmdResult`] values with pages and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: that's the CLI layer's job
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! Conditions the user should hear about but that are not failures, such as an
//! empty selection, come back as warning messages on an `Ok` result.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`MemGraph`](crate::graph::MemGraph), with a seeded
//! RNG wherever randomness is involved.
//!
//! ## Command Modules
//!
//! - [`pick`]: Select random pages and emit links to them
//! - [`pages`]: List the filtered population
//! - [`config`]: Show configuration or generate a template

use crate::blocks::Block;
use crate::config::RandnoteConfig;
use crate::model::Page;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod pages;
pub mod pick;

/// Severity of a [`CmdMessage`]. Failures are `Err`s, not messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        let content = content.into();
        Self { level, content }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Pages picked or listed, in output order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_pages: Vec<Page>,
    /// Link blocks built from the picked pages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Rendered outline of `blocks`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    /// File the blocks were written to, if they were written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written_to: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RandnoteConfig>,
    /// Generated config file contents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pages(mut self, pages: Vec<Page>) -> Self {
        self.listed_pages = pages;
        self
    }

    pub fn with_config(mut self, config: RandnoteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is a warning, e.g. an empty selection.
    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
