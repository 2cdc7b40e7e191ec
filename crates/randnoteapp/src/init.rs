//! # Context Initialization
//!
//! Works out which graph to read and which configuration applies, then builds
//! the API.
//!
//! ## Graph Discovery
//!
//! 1. `--json FILE`: pages come from a page export. Writing is unavailable.
//! 2. `--graph DIR`: that directory is the graph.
//! 3. Otherwise walk up from the working directory to the first directory
//!    holding a `logseq/` or `pages/` folder, stopping at the home directory.
//!
//! ## Configuration Sources
//!
//! `randnote.toml` is read from the global config directory, then from the
//! graph's `logseq/` folder, the latter winning. The global directory is
//! `RANDNOTE_CONFIG_DIR` when set (used by tests to isolate global state), or
//! the OS config directory otherwise.

use crate::api::RandnoteApi;
use crate::config::RandnoteConfig;
use crate::error::{RandnoteError, Result};
use crate::graph::{FsGraph, Graph, JsonGraph};
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_DIR: &str = "logseq";
pub const CONFIG_DIR_ENV: &str = "RANDNOTE_CONFIG_DIR";

pub struct RandnoteContext {
    pub api: RandnoteApi<Box<dyn Graph>>,
    pub config: RandnoteConfig,
    /// Graph directory, when one was found or given.
    pub graph_root: Option<PathBuf>,
}

fn is_graph_root(dir: &Path) -> bool {
    dir.join(APP_DIR).is_dir() || dir.join(crate::graph::fs::PAGES_DIR).is_dir()
}

/// Walk up from `cwd` to the nearest graph directory.
pub fn find_graph_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if is_graph_root(&current) {
            return Some(current);
        }

        if home_dir.as_ref() == Some(&current) {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

pub fn global_config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "randnote", "randnote")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RandnoteError::Config("Could not determine config directory".into()))
}

/// Global configuration merged with the graph's own, if there is a graph.
pub fn load_config(graph_root: Option<&Path>) -> Result<RandnoteConfig> {
    load_config_from(&global_config_dir()?, graph_root)
}

/// [`load_config`] with an explicit global config directory.
pub fn load_config_from(global_dir: &Path, graph_root: Option<&Path>) -> Result<RandnoteConfig> {
    let mut config_dirs = vec![global_dir.to_path_buf()];
    if let Some(root) = graph_root {
        config_dirs.push(root.join(APP_DIR));
    }
    RandnoteConfig::load(config_dirs)
}

pub fn initialize(
    cwd: &Path,
    graph_override: Option<PathBuf>,
    json_override: Option<PathBuf>,
) -> Result<RandnoteContext> {
    initialize_with(&global_config_dir()?, cwd, graph_override, json_override)
}

/// [`initialize`] with an explicit global config directory.
pub fn initialize_with(
    global_dir: &Path,
    cwd: &Path,
    graph_override: Option<PathBuf>,
    json_override: Option<PathBuf>,
) -> Result<RandnoteContext> {
    let graph_root = graph_override.or_else(|| find_graph_root(cwd));
    let config = load_config_from(global_dir, graph_root.as_deref())?;

    let graph: Box<dyn Graph> = match (json_override, &graph_root) {
        (Some(json), _) => Box::new(JsonGraph::open(&json)?),
        (None, Some(root)) => Box::new(FsGraph::new(root.clone())),
        (None, None) => {
            return Err(RandnoteError::Graph(format!(
                "No Logseq graph found from {} (use --graph DIR or --json FILE)",
                cwd.display()
            )))
        }
    };
    debug!(graph = %graph.describe(), "initialized");

    Ok(RandnoteContext {
        api: RandnoteApi::new(graph, config.clone()),
        config,
        graph_root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_graph_root_from_nested_dir() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("notes");
        fs::create_dir_all(root.join("logseq")).unwrap();
        let nested = root.join("pages").join("deep");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_graph_root(&nested), Some(root.clone()));
        assert_eq!(find_graph_root(&root), Some(root));
    }

    #[test]
    fn no_graph_root_outside_a_graph() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("plain");
        fs::create_dir_all(&dir).unwrap();
        assert_eq!(find_graph_root(&dir), None);
    }

    #[test]
    fn graph_config_overrides_global() {
        let temp = tempdir().unwrap();
        let global = temp.path().join("global");
        let root = temp.path().join("graph");
        fs::create_dir_all(&global).unwrap();
        fs::create_dir_all(root.join(APP_DIR)).unwrap();
        fs::write(global.join("randnote.toml"), "count = 4\nsort_pages = false\n").unwrap();
        fs::write(root.join(APP_DIR).join("randnote.toml"), "count = 2\n").unwrap();

        let ctx = initialize_with(&global, temp.path(), Some(root.clone()), None).unwrap();

        assert_eq!(ctx.config.count.get(), 2);
        assert!(!ctx.config.sort_pages);
        assert_eq!(ctx.graph_root, Some(root));
        assert_eq!(ctx.api.config(), &ctx.config);
    }

    #[test]
    fn json_export_replaces_graph() {
        let temp = tempdir().unwrap();
        let json = temp.path().join("pages.json");
        fs::write(&json, r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();
        let global = temp.path().join("global");
        fs::create_dir_all(&global).unwrap();
        fs::write(global.join("randnote.toml"), "count = 3\n").unwrap();

        let ctx = initialize_with(&global, temp.path(), None, Some(json)).unwrap();
        assert_eq!(ctx.config.count.get(), 3);
        assert_eq!(ctx.api.graph().all_pages().unwrap().len(), 2);
    }
}
