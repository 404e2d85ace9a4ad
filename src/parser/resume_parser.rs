//! The block parser: one linear pass from markdown source to `Resume`.

use log::debug;

use crate::error::{Error, Result};
use crate::model::{Block, Header, Resume, Section};
use crate::sanitize::Sanitizer;

use super::lines::{classify, is_sub_bullet, LineClass, LineCursor};
use super::options::{ErrorMode, ParseOptions};

/// Region delimiter: a horizontal rule followed by a blank line.
const REGION_DELIMITER: &str = "---\n\n";

/// Parser for resume-flavored markdown.
pub struct ResumeParser {
    options: ParseOptions,
    sanitizer: Sanitizer,
}

impl ResumeParser {
    /// Create a parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        let sanitizer = Sanitizer::new(options.sanitize.clone());
        Self { options, sanitizer }
    }

    /// Parse a complete document.
    ///
    /// Lenient mode (the default) is total over any text input: malformed
    /// lines degrade to paragraphs and regions without a recognized
    /// heading are dropped. Strict mode rejects input that yields no
    /// sections at all.
    pub fn parse(&self, source: &str) -> Result<Resume> {
        let source = source.replace("\r\n", "\n");
        let regions: Vec<&str> = source.split(REGION_DELIMITER).collect();

        let mut doc = Resume::new();
        for (index, region) in regions.iter().enumerate() {
            match self.parse_region(region) {
                Some(section) => doc.sections.push(section),
                None => {
                    debug!("dropping region {index}: no titled content");
                    if doc.header.is_none() {
                        doc.header = self.parse_header(region);
                    }
                }
            }
        }

        if self.options.error_mode == ErrorMode::Strict && doc.is_empty() {
            return Err(Error::UnrecognizedDocument(
                "no titled sections found".to_string(),
            ));
        }

        Ok(doc)
    }

    /// Parse one delimited region into a section.
    ///
    /// Returns `None` when the region has no recognized heading or no
    /// blocks; such regions are excluded from the result wherever they
    /// appear, which is what skips the document header.
    fn parse_region(&self, region: &str) -> Option<Section> {
        let mut title: Option<String> = None;
        let mut blocks: Vec<Block> = Vec::new();

        let mut cursor = LineCursor::new(region.trim());
        while let Some(raw) = cursor.next_line() {
            let line = raw.trim();
            match classify(line) {
                LineClass::SectionHeading => {
                    title = Some(self.heading_text(line, "## **"));
                }
                LineClass::JobTitle => {
                    blocks.push(Block::JobTitle {
                        text: self.heading_text(line, "### **"),
                    });
                }
                LineClass::Subheading => {
                    blocks.push(Block::Subheading {
                        text: self.sanitizer.sanitize(&line["### ".len()..]),
                    });
                }
                LineClass::DateRange => {
                    blocks.push(Block::DateRange {
                        text: self.sanitizer.sanitize(line.trim_matches('*')),
                    });
                }
                LineClass::Bullet => {
                    let text = self.sanitizer.sanitize(&line[2..]);
                    let sub_bullets = cursor
                        .take_while(is_sub_bullet)
                        .into_iter()
                        .map(|nested| self.sanitizer.sanitize(&nested["    * ".len()..]))
                        .collect();
                    blocks.push(Block::Bullet { text, sub_bullets });
                }
                LineClass::Paragraph => {
                    blocks.push(Block::Paragraph {
                        text: self.sanitizer.sanitize(line),
                    });
                }
                LineClass::Skip => {}
            }
        }

        match (title, blocks.is_empty()) {
            (Some(title), false) => Some(Section { title, blocks }),
            _ => None,
        }
    }

    /// Mine name and contact lines from a titleless region.
    ///
    /// The first `# `-level heading provides the name; remaining
    /// paragraph-class lines become header lines. Regions without a name
    /// line yield no header.
    fn parse_header(&self, region: &str) -> Option<Header> {
        let mut name: Option<String> = None;
        let mut lines: Vec<String> = Vec::new();

        for raw in region.trim().lines() {
            let line = raw.trim();
            if name.is_none() && line.starts_with("# ") {
                name = Some(self.heading_text(line, "# "));
                continue;
            }
            if classify(line) == LineClass::Paragraph {
                lines.push(self.sanitizer.sanitize(line));
            }
        }

        name.map(|name| Header { name, lines })
    }

    /// Strip a heading prefix and any bold markers, then sanitize.
    fn heading_text(&self, line: &str, prefix: &str) -> String {
        let inner = line.strip_prefix(prefix).unwrap_or(line);
        self.sanitizer.sanitize(&inner.replace("**", ""))
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Resume {
        ResumeParser::default().parse(source).unwrap()
    }

    #[test]
    fn test_single_section() {
        let doc = parse("header\n\n---\n\n## **Experience**\n\nSome text\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Experience");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::Paragraph {
                text: "Some text".to_string()
            }]
        );
    }

    #[test]
    fn test_titleless_region_is_dropped() {
        let doc = parse("* a bullet\n\nA paragraph\n\n---\n\n## **Real**\n\ncontent\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Real");
    }

    #[test]
    fn test_heading_with_no_blocks_is_dropped() {
        let doc = parse("x\n\n---\n\n## **Empty**\n");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_title_overwrite_keeps_single_section() {
        let doc = parse("x\n\n---\n\n## **First**\n\nbody\n\n## **Second**\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Second");
        assert_eq!(doc.sections[0].blocks.len(), 1);
    }

    #[test]
    fn test_sub_bullets_bind_to_owner() {
        let source = "\
x

---

## **Work**

* owner one
    * nested a
    * nested b

* owner two
";
        let doc = parse(source);
        let blocks = &doc.sections[0].blocks;
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Bullet {
                text: "owner one".to_string(),
                sub_bullets: vec!["nested a".to_string(), "nested b".to_string()],
            }
        );
        assert_eq!(blocks[1].sub_bullets(), &[] as &[String]);
    }

    #[test]
    fn test_header_mining() {
        let source = "\
# **Ada Lovelace**

**Analytical Engine Programmer**

[email] ada@example.com | London

---

## **Experience**

body
";
        let doc = parse(source);
        let header = doc.header.expect("header should be mined");
        assert_eq!(header.name, "Ada Lovelace");
        assert_eq!(header.lines.len(), 2);
        assert!(header.lines[0].contains("<b>Analytical Engine Programmer</b>"));
    }

    #[test]
    fn test_strict_mode_rejects_sectionless_input() {
        let parser = ResumeParser::new(ParseOptions::new().strict());
        let err = parser.parse("just some prose\n").unwrap_err();
        assert!(matches!(err, Error::UnrecognizedDocument(_)));
    }

    #[test]
    fn test_lenient_mode_accepts_anything() {
        let doc = parse("just some prose\n");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let doc = parse("x\r\n\r\n---\r\n\r\n## **A**\r\n\r\nbody\r\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "A");
    }
}
