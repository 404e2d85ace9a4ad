//! Document-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// A parsed resume document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    /// Header metadata mined from the pre-delimiter region, if present
    pub header: Option<Header>,

    /// Titled sections in input order
    pub sections: Vec<Section>,
}

impl Resume {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            header: None,
            sections: Vec::new(),
        }
    }

    /// Get the number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Get the total number of blocks across all sections.
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    /// Find the first section with the given title.
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get plain markup-bearing text of the entire document.
    pub fn plain_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}

/// Name and contact lines from the document's header region.
///
/// The header region never becomes a section; the renderer places these
/// lines in its own header band, next to the profile image when one is
/// discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Candidate name from the top-level heading line
    pub name: String,

    /// Remaining tagline/contact lines, sanitized, in input order
    pub lines: Vec<String>,
}

impl Header {
    /// Create a new header.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }
}

/// A titled group of blocks corresponding to one resume section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, sanitized
    pub title: String,

    /// Ordered content blocks
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a new section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Add a block to the section.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Check if the section has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the section's text with one line per block.
    pub fn plain_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        for block in &self.blocks {
            lines.push(block.text().to_string());
            for sub in block.sub_bullets() {
                lines.push(sub.clone());
            }
        }
        lines.join("\n")
    }
}
