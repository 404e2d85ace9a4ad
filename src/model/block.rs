//! Typed content blocks.

use serde::{Deserialize, Serialize};

/// One classified, sanitized unit of content within a section.
///
/// Text fields are free of pictographic characters and raw markdown
/// bold/link syntax, and are safe to embed directly in the target inline
/// markup (structural characters already escaped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A section heading. The parser consumes heading lines into section
    /// titles, so this variant is produced on the render side when the
    /// title re-enters the element stream.
    Heading {
        /// Heading text
        text: String,
    },

    /// A second-level heading without bold markup, commonly icon-prefixed.
    Subheading {
        /// Subheading text
        text: String,
    },

    /// A second-level heading with a bolded label (a role or position).
    JobTitle {
        /// Title text
        text: String,
    },

    /// An italic date/location line such as `2020 - Present | Remote`.
    DateRange {
        /// Date range text, italic markers already stripped
        text: String,
    },

    /// A top-level list item, possibly owning nested items.
    Bullet {
        /// Item text
        text: String,
        /// Nested items bound to this bullet; empty unless contiguous
        /// one-level-deeper lines immediately followed it in the source
        sub_bullets: Vec<String>,
    },

    /// A plain body line.
    Paragraph {
        /// Paragraph text
        text: String,
    },
}

impl Block {
    /// Get the block's primary text.
    pub fn text(&self) -> &str {
        match self {
            Block::Heading { text }
            | Block::Subheading { text }
            | Block::JobTitle { text }
            | Block::DateRange { text }
            | Block::Bullet { text, .. }
            | Block::Paragraph { text } => text,
        }
    }

    /// Get the block kind as a stable lowercase name.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Subheading { .. } => "subheading",
            Block::JobTitle { .. } => "job_title",
            Block::DateRange { .. } => "date_range",
            Block::Bullet { .. } => "bullet",
            Block::Paragraph { .. } => "paragraph",
        }
    }

    /// Nested items, if this is a bullet.
    pub fn sub_bullets(&self) -> &[String] {
        match self {
            Block::Bullet { sub_bullets, .. } => sub_bullets,
            _ => &[],
        }
    }
}
