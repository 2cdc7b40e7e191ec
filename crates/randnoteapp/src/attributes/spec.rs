//! Attribute dimensions and their registry.
//!
//! Each dimension names one boolean property of a [`Page`] that can be filtered
//! on. The predicate answers "is the attribute truthy for this page"; filter
//! modes then keep the truthy or the falsy side.

use crate::model::Page;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Journal,
    Dangling,
    Namespace,
    Properties,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Journal,
        Dimension::Dangling,
        Dimension::Namespace,
        Dimension::Properties,
    ];

    pub fn spec(self) -> &'static AttributeSpec {
        // ATTRIBUTES is declared in `Dimension::ALL` order.
        &ATTRIBUTES[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Whether the attribute is truthy for `page`.
    pub fn holds(self, page: &Page) -> bool {
        (self.spec().predicate)(page)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        get_spec(s).map(|spec| spec.dimension).ok_or_else(|| {
            format!(
                "Unknown attribute \"{}\" (expected one of: {})",
                s,
                ATTRIBUTES
                    .iter()
                    .map(|spec| spec.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// Specification for a single filterable attribute.
pub struct AttributeSpec {
    pub dimension: Dimension,
    /// Name used in configuration keys (`<name>_mode`) and CLI flags (`--<name>`).
    pub name: &'static str,
    pub predicate: fn(&Page) -> bool,
}

impl fmt::Debug for AttributeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeSpec")
            .field("dimension", &self.dimension)
            .field("name", &self.name)
            .finish()
    }
}

pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec {
        dimension: Dimension::Journal,
        name: "journal",
        predicate: |page| page.journal,
    },
    AttributeSpec {
        dimension: Dimension::Dangling,
        name: "dangling",
        predicate: |page| page.file.is_none(),
    },
    AttributeSpec {
        dimension: Dimension::Namespace,
        name: "namespace",
        predicate: |page| page.namespace.is_some(),
    },
    AttributeSpec {
        dimension: Dimension::Properties,
        name: "properties",
        predicate: |page| page.properties.is_some(),
    },
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}
