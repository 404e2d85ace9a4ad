//! Visitor seam for walking a parsed resume.
//!
//! External renderers implement [`DocumentVisitor`] and drive it with
//! [`walk`], which delivers the header and every block in document order.
//! All methods default to no-ops so a visitor only implements the
//! callbacks it cares about.
//!
//! # Example
//!
//! ```
//! use mdcv::model::{Block, Resume};
//! use mdcv::render::{walk, DocumentVisitor};
//!
//! struct BulletCounter(usize);
//!
//! impl DocumentVisitor for BulletCounter {
//!     fn on_block(&mut self, block: &Block) {
//!         if matches!(block, Block::Bullet { .. }) {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let mut counter = BulletCounter(0);
//! walk(&Resume::new(), &mut counter);
//! assert_eq!(counter.0, 0);
//! ```

use crate::model::{Block, Header, Resume, Section};

/// Trait for visiting document elements in order.
pub trait DocumentVisitor {
    /// Called once with the header, when one was mined.
    fn on_header(&mut self, header: &Header) {
        let _ = header;
    }

    /// Called before a section's blocks are delivered.
    fn on_section_start(&mut self, section: &Section) {
        let _ = section;
    }

    /// Called for every block within the current section.
    fn on_block(&mut self, block: &Block) {
        let _ = block;
    }

    /// Called after a section's blocks are delivered.
    fn on_section_end(&mut self, section: &Section) {
        let _ = section;
    }
}

/// Drive a visitor over the document in input order.
pub fn walk(doc: &Resume, visitor: &mut dyn DocumentVisitor) {
    if let Some(ref header) = doc.header {
        visitor.on_header(header);
    }
    for section in &doc.sections {
        visitor.on_section_start(section);
        for block in &section.blocks {
            visitor.on_block(block);
        }
        visitor.on_section_end(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl DocumentVisitor for Recorder {
        fn on_header(&mut self, header: &Header) {
            self.events.push(format!("header:{}", header.name));
        }
        fn on_section_start(&mut self, section: &Section) {
            self.events.push(format!("start:{}", section.title));
        }
        fn on_block(&mut self, block: &Block) {
            self.events.push(format!("block:{}", block.kind()));
        }
        fn on_section_end(&mut self, section: &Section) {
            self.events.push(format!("end:{}", section.title));
        }
    }

    #[test]
    fn test_walk_order() {
        let mut doc = Resume::new();
        doc.header = Some(Header::new("Ada"));
        let mut section = Section::new("Work");
        section.add_block(Block::Paragraph {
            text: "p".to_string(),
        });
        doc.sections.push(section);

        let mut recorder = Recorder::default();
        walk(&doc, &mut recorder);
        assert_eq!(
            recorder.events,
            vec!["header:Ada", "start:Work", "block:paragraph", "end:Work"]
        );
    }
}
