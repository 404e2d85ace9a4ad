//! The fixed block-to-style mapping consumed by external renderers.
//!
//! `to_layout` flattens a parsed resume into an ordered sequence of
//! styled elements. Each element carries its markup text and a style
//! class; the class-to-style table below is a fixed contract the
//! renderer must honor.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Resume};

use super::RenderOptions;

/// Style class of one layout element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleClass {
    /// Document name line (header region)
    Title,
    /// Header tagline/contact line
    Contact,
    /// Section heading — large bold
    Heading,
    /// Icon-prefixed second-level heading — medium bold
    Subheading,
    /// Role/position heading — medium bold
    JobTitle,
    /// Date/location line — small italic
    DateRange,
    /// Top-level bulleted line, indented once
    BulletItem,
    /// Nested bulleted line, indented twice
    SubBulletItem,
    /// Justified body text
    Body,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Resolved visual style for a style class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,

    /// Bold face
    pub bold: bool,

    /// Italic face
    pub italic: bool,

    /// Text alignment
    pub alignment: Alignment,

    /// Text color in hex
    pub color: &'static str,
}

impl StyleClass {
    /// The fixed style table.
    pub fn style(&self) -> TextStyle {
        match self {
            StyleClass::Title => TextStyle {
                font_size: 24.0,
                bold: true,
                italic: false,
                alignment: Alignment::Left,
                color: "#1a1a1a",
            },
            StyleClass::Contact => TextStyle {
                font_size: 11.0,
                bold: false,
                italic: false,
                alignment: Alignment::Left,
                color: "#4a4a4a",
            },
            StyleClass::Heading => TextStyle {
                font_size: 14.0,
                bold: true,
                italic: false,
                alignment: Alignment::Left,
                color: "#1a1a1a",
            },
            StyleClass::Subheading | StyleClass::JobTitle => TextStyle {
                font_size: 12.0,
                bold: true,
                italic: false,
                alignment: Alignment::Left,
                color: "#2a2a2a",
            },
            StyleClass::DateRange => TextStyle {
                font_size: 10.0,
                bold: false,
                italic: true,
                alignment: Alignment::Left,
                color: "#3a3a3a",
            },
            StyleClass::BulletItem | StyleClass::SubBulletItem => TextStyle {
                font_size: 10.0,
                bold: false,
                italic: false,
                alignment: Alignment::Left,
                color: "#3a3a3a",
            },
            StyleClass::Body => TextStyle {
                font_size: 10.0,
                bold: false,
                italic: false,
                alignment: Alignment::Justify,
                color: "#3a3a3a",
            },
        }
    }
}

/// One renderer-ready element: markup text plus its style class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledElement {
    /// Style class; resolves to a `TextStyle` via the fixed table
    pub class: StyleClass,

    /// Markup-bearing text, bullet glyphs already applied
    pub markup: String,

    /// Indent level (0 = flush left)
    pub indent: u8,
}

impl StyledElement {
    fn new(class: StyleClass, markup: impl Into<String>) -> Self {
        Self {
            class,
            markup: markup.into(),
            indent: 0,
        }
    }

    fn indented(class: StyleClass, markup: impl Into<String>, indent: u8) -> Self {
        Self {
            class,
            markup: markup.into(),
            indent,
        }
    }

    /// The resolved style for this element.
    pub fn style(&self) -> TextStyle {
        self.class.style()
    }
}

/// Flatten a resume into the styled element sequence.
pub fn to_layout(doc: &Resume, options: &RenderOptions) -> Vec<StyledElement> {
    let mut elements = Vec::with_capacity(doc.block_count() + doc.section_count() + 4);

    if options.include_header {
        if let Some(ref header) = doc.header {
            elements.push(StyledElement::new(StyleClass::Title, header.name.clone()));
            for line in &header.lines {
                elements.push(StyledElement::new(StyleClass::Contact, line.clone()));
            }
        }
    }

    for section in &doc.sections {
        elements.push(StyledElement::new(
            StyleClass::Heading,
            section.title.clone(),
        ));
        for block in &section.blocks {
            push_block(&mut elements, block, options);
        }
    }

    elements
}

/// Serialize a styled element sequence as JSON.
pub fn to_layout_string(
    elements: &[StyledElement],
    format: super::JsonFormat,
) -> crate::error::Result<String> {
    let result = match format {
        super::JsonFormat::Pretty => serde_json::to_string_pretty(elements),
        super::JsonFormat::Compact => serde_json::to_string(elements),
    };
    result.map_err(|e| crate::error::Error::Render(format!("JSON serialization error: {}", e)))
}

fn push_block(elements: &mut Vec<StyledElement>, block: &Block, options: &RenderOptions) {
    match block {
        Block::Heading { text } => {
            elements.push(StyledElement::new(StyleClass::Heading, text.clone()));
        }
        Block::Subheading { text } => {
            elements.push(StyledElement::new(StyleClass::Subheading, text.clone()));
        }
        Block::JobTitle { text } => {
            elements.push(StyledElement::new(StyleClass::JobTitle, text.clone()));
        }
        Block::DateRange { text } => {
            elements.push(StyledElement::new(StyleClass::DateRange, text.clone()));
        }
        Block::Bullet { text, sub_bullets } => {
            let marker = options.list_marker;
            elements.push(StyledElement::indented(
                StyleClass::BulletItem,
                format!("{marker} {text}"),
                1,
            ));
            for sub in sub_bullets {
                elements.push(StyledElement::indented(
                    StyleClass::SubBulletItem,
                    format!("{marker} {sub}"),
                    2,
                ));
            }
        }
        Block::Paragraph { text } => {
            elements.push(StyledElement::new(StyleClass::Body, text.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Header, Section};

    fn sample() -> Resume {
        let mut doc = Resume::new();
        doc.header = Some(Header {
            name: "Ada Lovelace".to_string(),
            lines: vec!["[email] ada@example.com".to_string()],
        });
        let mut section = Section::new("Experience");
        section.add_block(Block::JobTitle {
            text: "Senior Engineer".to_string(),
        });
        section.add_block(Block::DateRange {
            text: "2020 - Present | Remote".to_string(),
        });
        section.add_block(Block::Bullet {
            text: "<b>Led</b> rollout".to_string(),
            sub_bullets: vec!["Reduced latency".to_string()],
        });
        doc.sections.push(section);
        doc
    }

    #[test]
    fn test_layout_order_and_classes() {
        let elements = to_layout(&sample(), &RenderOptions::default());
        let classes: Vec<StyleClass> = elements.iter().map(|e| e.class).collect();
        assert_eq!(
            classes,
            vec![
                StyleClass::Title,
                StyleClass::Contact,
                StyleClass::Heading,
                StyleClass::JobTitle,
                StyleClass::DateRange,
                StyleClass::BulletItem,
                StyleClass::SubBulletItem,
            ]
        );
    }

    #[test]
    fn test_bullet_markup_and_indent() {
        let elements = to_layout(&sample(), &RenderOptions::default());
        let bullet = &elements[5];
        assert_eq!(bullet.markup, "\u{2022} <b>Led</b> rollout");
        assert_eq!(bullet.indent, 1);

        let sub = &elements[6];
        assert_eq!(sub.markup, "\u{2022} Reduced latency");
        assert_eq!(sub.indent, 2);
    }

    #[test]
    fn test_header_can_be_suppressed() {
        let elements = to_layout(&sample(), &RenderOptions::new().with_header(false));
        assert_eq!(elements[0].class, StyleClass::Heading);
    }

    #[test]
    fn test_style_table() {
        assert!(StyleClass::Heading.style().bold);
        assert_eq!(StyleClass::Heading.style().font_size, 14.0);
        assert!(StyleClass::DateRange.style().italic);
        assert_eq!(StyleClass::Body.style().alignment, Alignment::Justify);
        assert_eq!(StyleClass::Title.style().font_size, 24.0);
    }

    #[test]
    fn test_layout_serializes() {
        let elements = to_layout(&sample(), &RenderOptions::default());
        let json = serde_json::to_string(&elements).unwrap();
        assert!(json.contains(r#""class":"job_title""#));
        assert!(json.contains(r#""indent":2"#));
    }
}
