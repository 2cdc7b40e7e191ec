use super::{Graph, Placement, Target};
use crate::blocks::Block;
use crate::error::{RandnoteError, Result};
use crate::model::Page;
use std::path::PathBuf;

/// A recorded `write_blocks` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub target: Target,
    pub blocks: Vec<Block>,
    pub placement: Placement,
}

/// In-memory graph for testing.
#[derive(Debug, Default)]
pub struct MemGraph {
    pages: Vec<Page>,
    pub written: Vec<Written>,
    simulate_write_error: bool,
}

impl MemGraph {
    pub fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    /// Make every write fail, for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl Graph for MemGraph {
    fn all_pages(&self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }

    fn write_blocks(
        &mut self,
        target: &Target,
        blocks: &[Block],
        placement: Placement,
    ) -> Result<PathBuf> {
        if self.simulate_write_error {
            return Err(RandnoteError::Graph("Simulated write error".to_string()));
        }
        self.written.push(Written {
            target: target.clone(),
            blocks: blocks.to_vec(),
            placement,
        });
        Ok(PathBuf::from(format!("memory://{}", target.title())))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
