//! # Graph Sources
//!
//! A graph is wherever pages come from. The selector only ever needs the full
//! page list, fetched fresh on every invocation; writing links back is the one
//! other operation, used when links go into a page instead of to the caller.
//!
//! ## Implementations
//!
//! - [`fs::FsGraph`]: a Logseq graph directory (`pages/`, `journals/`). Pages are
//!   derived from markdown and org files plus everything they reference.
//! - [`json::JsonGraph`]: a JSON dump of the host's page list. Read-only.
//! - [`memory::MemGraph`]: in-memory pages for tests.
//!
//! The API layer is generic over [`Graph`], so commands are tested against
//! `MemGraph` without touching the filesystem.

use crate::blocks::Block;
use crate::error::Result;
use crate::model::Page;
use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::PathBuf;

pub mod fs;
pub mod json;
pub mod logseq;
pub mod memory;

pub use fs::FsGraph;
pub use json::JsonGraph;
pub use memory::MemGraph;

/// Page that receives written links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A page by title. Created if it does not exist.
    Page(String),
    /// The journal page of a given day.
    Journal(NaiveDate),
}

impl Target {
    pub fn today() -> Self {
        Target::Journal(Local::now().date_naive())
    }

    /// Display title of the target page.
    pub fn title(&self) -> String {
        match self {
            Target::Page(title) => title.clone(),
            Target::Journal(date) => logseq::journal_title(*date),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// Where written blocks go inside the target page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// After the last block.
    #[default]
    Append,
    /// Before the first block, below any page properties.
    Prepend,
}

impl Placement {
    pub fn from_append(append: bool) -> Self {
        if append {
            Placement::Append
        } else {
            Placement::Prepend
        }
    }
}

pub trait Graph {
    /// Every page of the graph, including dangling ones.
    fn all_pages(&self) -> Result<Vec<Page>>;

    /// Write `blocks` into the `target` page. Returns the path of the written file
    /// (a virtual path for graphs without files).
    fn write_blocks(
        &mut self,
        target: &Target,
        blocks: &[Block],
        placement: Placement,
    ) -> Result<PathBuf>;

    /// Short human description, e.g. the graph directory.
    fn describe(&self) -> String;
}

impl<G: Graph + ?Sized> Graph for Box<G> {
    fn all_pages(&self) -> Result<Vec<Page>> {
        (**self).all_pages()
    }

    fn write_blocks(
        &mut self,
        target: &Target,
        blocks: &[Block],
        placement: Placement,
    ) -> Result<PathBuf> {
        (**self).write_blocks(target, blocks, placement)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
