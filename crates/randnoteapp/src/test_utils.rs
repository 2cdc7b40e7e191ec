use crate::graph::logseq::{encode_file_stem, journal_file_stem};
use crate::graph::FsGraph;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway Logseq graph directory.
pub struct TestEnv {
    // Kept so the directory lives until the test is done
    pub _temp_dir: TempDir,
    pub graph: FsGraph,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join("logseq")).expect("failed to create logseq dir");
        let graph = FsGraph::new(root.clone());
        Self {
            _temp_dir: temp_dir,
            graph,
            root,
        }
    }

    /// Write `relative` under the graph root, creating parent directories.
    pub fn write_raw(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write page");
        path
    }

    pub fn write_page(&self, title: &str, content: &str) -> PathBuf {
        self.write_raw(&format!("pages/{}.md", encode_file_stem(title)), content)
    }

    pub fn write_journal(&self, date: NaiveDate, content: &str) -> PathBuf {
        self.write_raw(&format!("journals/{}.md", journal_file_stem(date)), content)
    }
}
