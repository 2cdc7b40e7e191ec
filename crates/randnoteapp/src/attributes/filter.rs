//! Filter modes.
//!
//! Every attribute dimension gets a tri-state [`FilterMode`]:
//!
//! | Mode | Keeps |
//! |------|-------|
//! | `only` | pages where the attribute is truthy |
//! | `none` | pages where the attribute is falsy |
//! | `include` | every page (no filtering) |
//!
//! [`PageFilters`] bundles one mode per dimension. Each dimension is an
//! independent predicate, so the filtered set is the intersection of all `only`
//! constraints and the complements of all `none` constraints, whatever order they
//! are applied in.

use super::spec::Dimension;
use crate::model::Page;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    None,
    #[default]
    Include,
    Only,
}

impl FilterMode {
    pub const VARIANTS: [&'static str; 3] = ["none", "include", "only"];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::None => "none",
            FilterMode::Include => "include",
            FilterMode::Only => "only",
        }
    }

    /// Whether a page whose attribute is `truthy` passes this mode.
    pub fn keeps(self, truthy: bool) -> bool {
        match self {
            FilterMode::None => !truthy,
            FilterMode::Include => true,
            FilterMode::Only => truthy,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(FilterMode::None),
            "include" => Ok(FilterMode::Include),
            "only" => Ok(FilterMode::Only),
            _ => Err(format!(
                "Invalid filter mode \"{}\" (expected one of: {})",
                s,
                Self::VARIANTS.join(", ")
            )),
        }
    }
}

/// One filter mode per attribute dimension. Defaults to `include` everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFilters {
    #[serde(default)]
    pub journal: FilterMode,
    #[serde(default)]
    pub dangling: FilterMode,
    #[serde(default)]
    pub namespace: FilterMode,
    #[serde(default)]
    pub properties: FilterMode,
}

impl PageFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, dimension: Dimension, mode: FilterMode) -> Self {
        self.set(dimension, mode);
        self
    }

    pub fn set(&mut self, dimension: Dimension, mode: FilterMode) {
        match dimension {
            Dimension::Journal => self.journal = mode,
            Dimension::Dangling => self.dangling = mode,
            Dimension::Namespace => self.namespace = mode,
            Dimension::Properties => self.properties = mode,
        }
    }

    pub fn mode(&self, dimension: Dimension) -> FilterMode {
        match dimension {
            Dimension::Journal => self.journal,
            Dimension::Dangling => self.dangling,
            Dimension::Namespace => self.namespace,
            Dimension::Properties => self.properties,
        }
    }

    /// Dimensions whose mode actually filters (anything but `include`).
    pub fn active(&self) -> impl Iterator<Item = (Dimension, FilterMode)> + '_ {
        Dimension::ALL
            .into_iter()
            .map(|dim| (dim, self.mode(dim)))
            .filter(|(_, mode)| *mode != FilterMode::Include)
    }

    pub fn is_noop(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn matches(&self, page: &Page) -> bool {
        self.active().all(|(dim, mode)| mode.keeps(dim.holds(page)))
    }
}
