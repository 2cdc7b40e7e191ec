//! Link blocks.
//!
//! A selection is turned into outline blocks before it goes anywhere. Without a
//! header every page becomes its own top-level link block; with a header the
//! links are nested as children of a single header block:
//!
//! ```text
//! - Random notes
//! 	- [[Alpha]]
//! 	- [[Bravo]]
//! ```
//!
//! Rendering follows Logseq's markdown outline: `- ` bullets, one tab per level.

use crate::model::Page;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

impl Block {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.children = children;
        self
    }

    fn write_outline(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push('\t');
        }
        out.push_str("- ");
        // Continuation lines of a multi-line block align under the bullet text.
        let mut lines = self.content.lines();
        out.push_str(lines.next().unwrap_or(""));
        out.push('\n');
        for line in lines {
            for _ in 0..depth {
                out.push('\t');
            }
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        for child in &self.children {
            child.write_outline(depth + 1, out);
        }
    }
}

/// Build the blocks for a selection. A blank `header` means no header block.
pub fn link_blocks(pages: &[&Page], header: Option<&str>) -> Vec<Block> {
    let links: Vec<Block> = pages.iter().map(|page| Block::new(page.link())).collect();

    match header.map(str::trim).filter(|h| !h.is_empty()) {
        Some(header) => vec![Block::new(header).with_children(links)],
        None => links,
    }
}

/// Render blocks as a markdown outline, one line per block.
pub fn render_outline(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        block.write_outline(0, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Vec<Page> {
        vec![Page::new("Alpha"), Page::new("Projects/Bravo")]
    }

    #[test]
    fn flat_links_without_header() {
        let pages = pages();
        let refs: Vec<&Page> = pages.iter().collect();
        let blocks = link_blocks(&refs, None);
        assert_eq!(
            blocks,
            vec![Block::new("[[Alpha]]"), Block::new("[[Projects/Bravo]]")]
        );
        assert_eq!(render_outline(&blocks), "- [[Alpha]]\n- [[Projects/Bravo]]\n");
    }

    #[test]
    fn blank_header_is_ignored() {
        let pages = pages();
        let refs: Vec<&Page> = pages.iter().collect();
        assert_eq!(link_blocks(&refs, Some("   ")).len(), 2);
        assert_eq!(link_blocks(&refs, Some("")).len(), 2);
    }

    #[test]
    fn header_wraps_links_as_children() {
        let pages = pages();
        let refs: Vec<&Page> = pages.iter().collect();
        let blocks = link_blocks(&refs, Some("  Random notes "));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].content, "Random notes");
        assert_eq!(blocks[0].children.len(), 2);
        assert_eq!(
            render_outline(&blocks),
            "- Random notes\n\t- [[Alpha]]\n\t- [[Projects/Bravo]]\n"
        );
    }

    #[test]
    fn multiline_content_is_indented() {
        let block = Block::new("first\nsecond").with_children(vec![Block::new("child")]);
        assert_eq!(
            render_outline(&[block]),
            "- first\n  second\n\t- child\n"
        );
    }

    #[test]
    fn serializes_without_empty_children() {
        let value = serde_json::to_value(Block::new("[[Alpha]]")).unwrap();
        assert_eq!(value, serde_json::json!({"content": "[[Alpha]]"}));
    }
}
