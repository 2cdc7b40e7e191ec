//! Page list exported from a running Logseq host.
//!
//! Accepts either a flat array of page objects or the nested shape returned by
//! datascript queries (`[[page], [page], ...]`). Both are flattened in order.

use super::{Graph, Placement, Target};
use crate::blocks::Block;
use crate::error::{RandnoteError, Result};
use crate::model::Page;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum PageEntry {
    One(Page),
    Many(Vec<Page>),
}

pub struct JsonGraph {
    source: String,
    pages: Vec<Page>,
}

impl JsonGraph {
    pub fn open(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(RandnoteError::Io)?;
        Self::parse(path.display().to_string(), &text)
    }

    /// Parse an export held in memory. `source` names it in messages.
    pub fn parse(source: impl Into<String>, text: &str) -> Result<Self> {
        let entries: Vec<PageEntry> = serde_json::from_str(text)?;
        let pages: Vec<Page> = entries
            .into_iter()
            .flat_map(|entry| match entry {
                PageEntry::One(page) => vec![page],
                PageEntry::Many(pages) => pages,
            })
            .collect();
        let source = source.into();
        debug!(source = %source, pages = pages.len(), "loaded page export");
        Ok(Self { source, pages })
    }
}

impl Graph for JsonGraph {
    fn all_pages(&self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }

    fn write_blocks(&mut self, target: &Target, _: &[Block], _: Placement) -> Result<PathBuf> {
        Err(RandnoteError::Graph(format!(
            "Cannot write to \"{}\": page export {} is read-only",
            target, self.source
        )))
    }

    fn describe(&self) -> String {
        self.source.clone()
    }
}
