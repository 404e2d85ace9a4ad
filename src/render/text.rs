//! Plain text rendering.
//!
//! Strips the inline markup the sanitizer produced and lays blocks out
//! with indentation, via the visitor walk.

use regex::Regex;

use crate::error::Result;
use crate::model::{Block, Header, Resume, Section};

use super::visitor::{walk, DocumentVisitor};
use super::RenderOptions;

/// Convert a document to plain text.
pub fn to_text(doc: &Resume, options: &RenderOptions) -> Result<String> {
    let mut collector = TextCollector::new(options);
    walk(doc, &mut collector);
    Ok(collector.finish())
}

/// Remove markup tags and unescape entities.
fn strip_markup(text: &str) -> String {
    let tag_re = Regex::new(r"</?[a-z]+(?:\s[^>]*)?>").unwrap();
    let stripped = tag_re.replace_all(text, "");
    stripped
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

struct TextCollector<'a> {
    options: &'a RenderOptions,
    out: String,
}

impl<'a> TextCollector<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn push_line(&mut self, indent: usize, line: &str) {
        self.out
            .push_str(&" ".repeat(indent * self.options.indent_width));
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}

impl DocumentVisitor for TextCollector<'_> {
    fn on_header(&mut self, header: &Header) {
        if !self.options.include_header {
            return;
        }
        self.push_line(0, &strip_markup(&header.name));
        for line in &header.lines {
            self.push_line(0, &strip_markup(line));
        }
        self.out.push('\n');
    }

    fn on_section_start(&mut self, section: &Section) {
        self.push_line(0, &strip_markup(&section.title));
    }

    fn on_block(&mut self, block: &Block) {
        let marker = self.options.list_marker;
        match block {
            Block::Bullet { text, sub_bullets } => {
                self.push_line(1, &format!("{marker} {}", strip_markup(text)));
                for sub in sub_bullets {
                    self.push_line(2, &format!("{marker} {}", strip_markup(sub)));
                }
            }
            other => self.push_line(0, &strip_markup(other.text())),
        }
    }

    fn on_section_end(&mut self, _section: &Section) {
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<b>Led</b> rollout"), "Led rollout");
        assert_eq!(
            strip_markup(r#"<a href="https://x.com">x.com</a>"#),
            "x.com"
        );
        assert_eq!(strip_markup("a &amp; b &lt;c&gt;"), "a & b <c>");
    }

    #[test]
    fn test_to_text_layout() {
        let mut doc = Resume::new();
        let mut section = Section::new("Experience");
        section.add_block(Block::Bullet {
            text: "<b>Led</b> rollout".to_string(),
            sub_bullets: vec!["Reduced latency".to_string()],
        });
        doc.sections.push(section);

        let text = to_text(&doc, &RenderOptions::default()).unwrap();
        assert!(text.contains("Experience"));
        assert!(text.contains("    \u{2022} Led rollout"));
        assert!(text.contains("        \u{2022} Reduced latency"));
        assert!(!text.contains("<b>"));
    }
}
