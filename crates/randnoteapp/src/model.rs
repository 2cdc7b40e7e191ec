//! # Page Records
//!
//! A [`Page`] is a named node of the note graph. The shape mirrors the page
//! objects a Logseq host hands out (`originalName`, `journal?`, `file`, ...), so a
//! JSON export of the host's page list deserializes straight into it, while the
//! file system graph builds the same records from markdown files.
//!
//! Attributes that the filters look at are modelled as explicit optional fields
//! rather than an open map:
//!
//! | Field | Meaning when present / true |
//! |-------|-----------------------------|
//! | `journal` | The page is a daily journal note |
//! | `file` | A backing file exists; absence makes the page *dangling* |
//! | `namespace` | The page lives under a namespace (`parent/child`) |
//! | `properties` | The page carries `key:: value` metadata |
//!
//! Pages are identified by `name`, the lowercased form of the title. The title as
//! typed by the user lives in `original_name`; [`Page::display_name`] falls back to
//! `name` when it is missing.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Backing file of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl PageFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            id: None,
            path: Some(path.into()),
        }
    }
}

/// Reference to the parent namespace page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NamespaceRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,

    #[serde(
        rename = "journal?",
        default,
        deserialize_with = "null_as_false",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub journal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PageFile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<NamespaceRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    /// Milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl Page {
    /// A regular page titled `title`, without file or attributes.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            name: page_key(&title),
            original_name: Some(title),
            ..Default::default()
        }
    }

    pub fn with_file(mut self, file: PageFile) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_journal(mut self, journal: bool) -> Self {
        self.journal = journal;
        self
    }

    pub fn with_namespace(mut self, namespace: NamespaceRef) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub fn with_properties(mut self, properties: BTreeMap<String, serde_json::Value>) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Title shown to the user: `original_name`, or `name` when absent.
    pub fn display_name(&self) -> &str {
        self.original_name.as_deref().unwrap_or(&self.name)
    }

    /// Wiki link to this page, e.g. `[[Rust Ownership]]`.
    pub fn link(&self) -> String {
        format!("[[{}]]", self.display_name())
    }

    pub fn is_dangling(&self) -> bool {
        self.file.is_none()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().and_then(|f| f.path.as_ref())
    }
}

/// Normalized identity of a page title: trimmed and lowercased.
pub fn page_key(title: &str) -> String {
    title.trim().to_lowercase()
}
