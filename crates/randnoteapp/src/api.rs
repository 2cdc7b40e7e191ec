//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for randnote operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: free-text counts become a [`Count`], configuration
//!   becomes [`PickOptions`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O.
//!
//! ## Generic Over Graph
//!
//! `RandnoteApi<G: Graph>` is generic over the page source:
//! - Production: `RandnoteApi<Box<dyn Graph>>`, a directory or a page export
//! - Testing: `RandnoteApi<MemGraph>`

use crate::attributes::PageFilters;
use crate::commands::{self, pick::Destination, pick::PickOptions};
use crate::config::RandnoteConfig;
use crate::count::Count;
use crate::error::Result;
use crate::graph::Graph;
use rand::Rng;

pub struct RandnoteApi<G: Graph> {
    graph: G,
    config: RandnoteConfig,
}

impl<G: Graph> RandnoteApi<G> {
    pub fn new(graph: G, config: RandnoteConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn config(&self) -> &RandnoteConfig {
        &self.config
    }

    /// Pick options as configured: count, sort, filters and header, printing.
    pub fn pick_options(&self) -> PickOptions {
        PickOptions {
            select: self.config.select_options(),
            header: self.config.header().map(str::to_string),
            destination: Destination::Print,
        }
    }

    /// Pick options with the count read from free text, e.g. `"3"` or `"3 notes"`.
    pub fn pick_options_for(&self, count_text: &str) -> PickOptions {
        let mut options = self.pick_options();
        options.select.count = Count::parse_lenient(count_text);
        options
    }

    pub fn pick<R: Rng + ?Sized>(
        &mut self,
        options: &PickOptions,
        rng: &mut R,
    ) -> Result<commands::CmdResult> {
        commands::pick::run(&mut self.graph, options, rng)
    }

    pub fn pages(&self, filters: &PageFilters) -> Result<commands::CmdResult> {
        commands::pages::run(&self.graph, filters)
    }
}
