//! Logseq graph directory.
//!
//! ```text
//! <graph>/
//!   logseq/           # app folder, marks the graph root
//!   pages/            # one file per page (`Projects___Alpha.md`)
//!   journals/         # one file per day (`2024_01_15.md`)
//! ```
//!
//! The page list is rebuilt on every call:
//!
//! 1. Every `.md`/`.markdown`/`.org` file in `pages/` and `journals/` is a page
//!    with a file. Journal files become journal pages titled after their date.
//!    A `title::` property overrides the title derived from the file name.
//! 2. Leading page properties fill `properties`.
//! 3. Titles containing `/` are namespaced; each ancestor namespace is a page too.
//! 4. Every referenced title without a file becomes a dangling page.
//!
//! Titles are unique case-insensitively; the first spelling encountered wins.
//! Unreadable files are skipped with a warning rather than failing the scan.

use super::logseq;
use super::{Graph, Placement, Target};
use crate::blocks::{render_outline, Block};
use crate::error::{RandnoteError, Result};
use crate::model::{page_key, NamespaceRef, Page, PageFile};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub const PAGES_DIR: &str = "pages";
pub const JOURNALS_DIR: &str = "journals";
const PAGE_EXTENSIONS: &[&str] = &["md", "markdown", "org"];

pub struct FsGraph {
    root: PathBuf,
}

/// Accumulates pages keyed by normalized title, preserving discovery order.
#[derive(Default)]
struct PageSet {
    pages: Vec<Page>,
    index: HashMap<String, usize>,
}

impl PageSet {
    fn contains(&self, title: &str) -> bool {
        self.index.contains_key(&page_key(title))
    }

    fn insert(&mut self, page: Page) {
        if self.index.contains_key(&page.name) {
            return;
        }
        self.index.insert(page.name.clone(), self.pages.len());
        self.pages.push(page);
    }

    /// Add a page for `title` if unknown, without a file, along with its namespace ancestors.
    fn insert_dangling(&mut self, title: &str) {
        for ancestor in namespace_ancestors(title) {
            if !self.contains(&ancestor) {
                self.insert(bare_page(&ancestor));
            }
        }
        if !self.contains(title) {
            self.insert(bare_page(title));
        }
    }
}

fn bare_page(title: &str) -> Page {
    let mut page = Page::new(title);
    page.journal = logseq::parse_journal_title(title).is_some();
    page.namespace = namespace_of(title);
    page
}

/// `a/b/c` -> `["a", "a/b"]`.
fn namespace_ancestors(title: &str) -> Vec<String> {
    let parts: Vec<&str> = title.split('/').collect();
    (1..parts.len()).map(|n| parts[..n].join("/")).collect()
}

fn namespace_of(title: &str) -> Option<NamespaceRef> {
    title
        .rsplit_once('/')
        .map(|(parent, _)| NamespaceRef::named(page_key(parent)))
}

struct ScannedFile {
    page: Page,
    refs: Vec<String>,
}

impl FsGraph {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_files(&self, dir: &str) -> Result<Vec<PathBuf>> {
        let dir = self.root.join(dir);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut files = Vec::new();
        for entry in fs::read_dir(&dir).map_err(RandnoteError::Io)? {
            let path = entry.map_err(RandnoteError::Io)?.path();
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
            if path.is_file() && supported {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn scan_file(&self, path: &Path, journal_dir: bool) -> Option<ScannedFile> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable page file");
                return None;
            }
        };
        let stem = path.file_stem()?.to_string_lossy().to_string();
        let org = path.extension().is_some_and(|ext| ext == "org");

        let (props, _) = logseq::parse_page_properties(&content, org);
        let journal_date = journal_dir
            .then(|| logseq::parse_journal_file_stem(&stem))
            .flatten();
        let title = props
            .get("title")
            .filter(|t| !t.is_empty())
            .cloned()
            .or_else(|| journal_date.map(logseq::journal_title))
            .unwrap_or_else(|| logseq::decode_file_stem(&stem));

        let mut refs = if org {
            logseq::org_refs(&content)
        } else {
            logseq::markdown_refs(&content)
        };
        for key in ["tags", "alias"] {
            if let Some(value) = props.get(key) {
                refs.extend(logseq::property_refs(value));
            }
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();
        let mut page = Page::new(title.clone())
            .with_file(PageFile::at(relative))
            .with_journal(journal_dir);
        page.namespace = namespace_of(&title);
        if !props.is_empty() {
            page = page.with_properties(
                props
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::String(v)))
                    .collect::<BTreeMap<_, _>>(),
            );
        }
        page.updated_at = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(|t| DateTime::<Utc>::from(t).timestamp_millis());

        Some(ScannedFile { page, refs })
    }

    fn scan(&self) -> Result<Vec<Page>> {
        let mut set = PageSet::default();
        let mut refs = Vec::new();

        for (dir, journal_dir) in [(PAGES_DIR, false), (JOURNALS_DIR, true)] {
            for path in self.page_files(dir)? {
                if let Some(scanned) = self.scan_file(&path, journal_dir) {
                    refs.extend(scanned.refs);
                    set.insert(scanned.page);
                }
            }
        }
        let with_files = set.pages.len();

        // Ancestors of real pages first, then everything referenced.
        let titles: Vec<String> = set
            .pages
            .iter()
            .map(|p| p.display_name().to_string())
            .collect();
        for title in titles.iter().chain(refs.iter()) {
            set.insert_dangling(title);
        }

        debug!(
            root = %self.root.display(),
            with_files,
            dangling = set.pages.len() - with_files,
            "scanned graph"
        );
        Ok(set.pages)
    }

    /// File that holds `target`, existing or to be created.
    fn target_path(&self, target: &Target) -> Result<PathBuf> {
        match target {
            Target::Journal(date) => Ok(self
                .root
                .join(JOURNALS_DIR)
                .join(format!("{}.md", logseq::journal_file_stem(*date)))),
            Target::Page(title) => {
                let key = page_key(title);
                if key.is_empty() {
                    return Err(RandnoteError::Graph("Target page title is empty".into()));
                }
                let existing = self
                    .scan()?
                    .into_iter()
                    .find(|p| p.name == key)
                    .and_then(|p| p.file_path().cloned());
                Ok(match existing {
                    Some(relative) => self.root.join(relative),
                    None => self
                        .root
                        .join(PAGES_DIR)
                        .join(format!("{}.md", logseq::encode_file_stem(title.trim()))),
                })
            }
        }
    }
}

/// Splice `outline` into `content` at the requested placement.
fn place_outline(content: &str, outline: &str, placement: Placement) -> String {
    match placement {
        Placement::Append => {
            let mut out = content.to_string();
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(outline);
            out
        }
        Placement::Prepend => {
            let (_, prop_lines) = logseq::parse_page_properties(content, false);
            let lines: Vec<&str> = content.lines().collect();
            let (head, body) = lines.split_at(prop_lines.min(lines.len()));
            let mut out = String::new();
            for line in head {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(outline);
            for line in body {
                out.push_str(line);
                out.push('\n');
            }
            out
        }
    }
}

/// Write through a tmp file in the same directory, then rename over `path`.
/// The tmp file never outlives a failed write.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| RandnoteError::Graph(format!("Invalid page path {}", path.display())))?;
    fs::create_dir_all(dir).map_err(RandnoteError::Io)?;

    let tmp = dir.join(format!(".randnote-{}.tmp", Uuid::new_v4()));
    let written = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = written {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(path = %tmp.display(), error = %cleanup, "could not remove tmp file");
            }
        }
        return Err(RandnoteError::Io(e));
    }
    Ok(())
}

impl Graph for FsGraph {
    fn all_pages(&self) -> Result<Vec<Page>> {
        if !self.root.is_dir() {
            return Err(RandnoteError::Graph(format!(
                "Graph directory not found: {}",
                self.root.display()
            )));
        }
        self.scan()
    }

    fn write_blocks(
        &mut self,
        target: &Target,
        blocks: &[Block],
        placement: Placement,
    ) -> Result<PathBuf> {
        let path = self.target_path(target)?;
        if path.extension().is_some_and(|ext| ext == "org") {
            return Err(RandnoteError::Graph(format!(
                "Writing to org pages is not supported: {}",
                path.display()
            )));
        }

        let content = if path.exists() {
            fs::read_to_string(&path).map_err(RandnoteError::Io)?
        } else {
            String::new()
        };
        let updated = place_outline(&content, &render_outline(blocks), placement);

        write_atomic(&path, &updated)?;

        debug!(path = %path.display(), blocks = blocks.len(), ?placement, "wrote blocks");
        Ok(path)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
