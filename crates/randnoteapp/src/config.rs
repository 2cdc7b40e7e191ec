//! # Configuration
//!
//! Randnote configuration is managed by [`clapfig`], which handles layered
//! loading from TOML files and environment variables.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Command line flags**: applied by the CLI on top of the loaded value.
//! 2. **Environment variables**: `RANDNOTE__COUNT`, `RANDNOTE__SORT_PAGES`, etc.
//! 3. **Graph Config**: `<graph>/logseq/randnote.toml`, settings for one graph.
//! 4. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 5. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `count` | `1` | Pages to pick when no count is given |
//! | `sort_pages` | `true` | Sort picked pages by name |
//! | `journal_mode` | `include` | Journal pages: `none`, `include` or `only` |
//! | `dangling_mode` | `include` | Pages without a file |
//! | `namespace_mode` | `include` | Pages inside a namespace |
//! | `properties_mode` | `include` | Pages with properties |
//! | `header_block` | `""` | Header block to nest links under (empty: none) |
//! | `append_pages` | `true` | Append to the target page (`false`: prepend) |
//!
//! Mode values outside `none`/`include`/`only` fail loading instead of being
//! silently treated as `include`.

use crate::attributes::{Dimension, FilterMode, PageFilters};
use crate::count::Count;
use crate::error::{RandnoteError, Result};
use crate::graph::Placement;
use crate::selector::SelectOptions;
use clapfig::{Clapfig, SearchMode, SearchPath};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

pub const CONFIG_FILE: &str = "randnote.toml";

/// Configuration for randnote, stored in `randnote.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RandnoteConfig {
    /// Number of pages to pick when none is given on the command line.
    #[config(default = 1)]
    pub count: Count,

    /// Sort picked pages alphabetically (case-insensitive).
    #[config(default = true)]
    pub sort_pages: bool,

    /// Journal pages: "none", "include" or "only".
    #[config(default = "include")]
    pub journal_mode: FilterMode,

    /// Pages that are referenced but have no file: "none", "include" or "only".
    #[config(default = "include")]
    pub dangling_mode: FilterMode,

    /// Pages inside a namespace (`parent/child`): "none", "include" or "only".
    #[config(default = "include")]
    pub namespace_mode: FilterMode,

    /// Pages carrying page properties: "none", "include" or "only".
    #[config(default = "include")]
    pub properties_mode: FilterMode,

    /// Header block to nest the links under. Empty for no header.
    #[config(default = "")]
    pub header_block: String,

    /// Add links at the end of the target page. When false, they go first.
    #[config(default = true)]
    pub append_pages: bool,
}

impl Default for RandnoteConfig {
    fn default() -> Self {
        Self {
            count: Count::ONE,
            sort_pages: true,
            journal_mode: FilterMode::Include,
            dangling_mode: FilterMode::Include,
            namespace_mode: FilterMode::Include,
            properties_mode: FilterMode::Include,
            header_block: String::new(),
            append_pages: true,
        }
    }
}

impl RandnoteConfig {
    /// Load and merge `randnote.toml` from each directory, later ones winning.
    pub fn load(dirs: Vec<PathBuf>) -> Result<Self> {
        debug!(?dirs, "loading config");
        Clapfig::builder()
            .app_name("randnote")
            .file_name(CONFIG_FILE)
            .search_paths(dirs.into_iter().map(SearchPath::Path).collect())
            .search_mode(SearchMode::Merge)
            .load()
            .map_err(|e| RandnoteError::Config(e.to_string()))
    }

    pub fn mode(&self, dimension: Dimension) -> FilterMode {
        match dimension {
            Dimension::Journal => self.journal_mode,
            Dimension::Dangling => self.dangling_mode,
            Dimension::Namespace => self.namespace_mode,
            Dimension::Properties => self.properties_mode,
        }
    }

    pub fn filters(&self) -> PageFilters {
        Dimension::ALL
            .iter()
            .fold(PageFilters::default(), |filters, &dim| {
                filters.with(dim, self.mode(dim))
            })
    }

    pub fn select_options(&self) -> SelectOptions {
        SelectOptions::new(self.count)
            .sorted(self.sort_pages)
            .with_filters(self.filters())
    }

    /// The header, or `None` when blank.
    pub fn header(&self) -> Option<&str> {
        Some(self.header_block.trim()).filter(|h| !h.is_empty())
    }

    pub fn placement(&self) -> Placement {
        Placement::from_append(self.append_pages)
    }

    /// Every setting as `(key, value)`, in file order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("count", self.count.to_string()),
            ("sort_pages", self.sort_pages.to_string()),
            ("journal_mode", self.journal_mode.to_string()),
            ("dangling_mode", self.dangling_mode.to_string()),
            ("namespace_mode", self.namespace_mode.to_string()),
            ("properties_mode", self.properties_mode.to_string()),
            ("header_block", format!("{:?}", self.header_block)),
            ("append_pages", self.append_pages.to_string()),
        ]
    }
}

/// Commented `randnote.toml` with every setting at its default.
pub fn template() -> String {
    confique::toml::template::<RandnoteConfig>(confique::toml::FormatOptions::default())
}
