//! # mdcv
//!
//! Resume-markdown parsing library for Rust.
//!
//! This library converts a resume written in a constrained markdown
//! subset into a sequence of typed, styled content blocks ready for
//! layout by an external document renderer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdcv::{parse_file, render};
//!
//! fn main() -> mdcv::Result<()> {
//!     // Parse a resume file
//!     let doc = parse_file("README.md")?;
//!
//!     // Convert to plain text
//!     let options = render::RenderOptions::default();
//!     let text = render::to_text(&doc, &options)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Typed blocks**: headings, job titles, date ranges, nested bullets,
//!   paragraphs
//! - **Markup-safe text**: emoji normalization, bold and link conversion,
//!   structural-character escaping
//! - **Renderer contract**: a fixed block-to-style mapping plus text and
//!   JSON outputs
//! - **Asset discovery**: font family and profile image probes for the
//!   paginating renderer

pub mod assets;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod sanitize;

// Re-export commonly used types
pub use detect::{inspect, is_resume_markdown, DocumentShape};
pub use error::{Error, Result};
pub use model::{Block, Header, Resume, Section};
pub use parser::{ErrorMode, ParseOptions, ResumeParser};
pub use render::{JsonFormat, RenderOptions, StyleClass, StyledElement};
pub use sanitize::{SanitizeOptions, Sanitizer};

use std::path::Path;

/// Parse resume markdown from a string.
///
/// # Example
///
/// ```
/// let doc = mdcv::parse_str("x\n\n---\n\n## **Skills**\n\n* Rust\n").unwrap();
/// assert_eq!(doc.section_count(), 1);
/// ```
pub fn parse_str(source: &str) -> Result<Resume> {
    ResumeParser::default().parse(source)
}

/// Parse resume markdown from a string with custom options.
pub fn parse_str_with_options(source: &str, options: ParseOptions) -> Result<Resume> {
    ResumeParser::new(options).parse(source)
}

/// Parse a resume markdown file.
///
/// Reading the file is the only fatal path: an unreadable input
/// propagates as [`Error::Io`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    let source = std::fs::read_to_string(path)?;
    parse_str(&source)
}

/// Parse a resume markdown file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Resume> {
    let source = std::fs::read_to_string(path)?;
    parse_str_with_options(&source, options)
}

/// Extract plain text from a resume file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, &RenderOptions::default())
}

/// Convert a resume file to the styled-element layout as JSON.
pub fn to_layout_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    let elements = render::to_layout(&doc, &RenderOptions::default());
    render::to_layout_string(&elements, format)
}

/// Builder for parsing and rendering resume documents.
///
/// # Example
///
/// ```no_run
/// use mdcv::Mdcv;
///
/// let text = Mdcv::new()
///     .plain_links()
///     .without_header()
///     .parse("README.md")?
///     .to_text()?;
/// # Ok::<(), mdcv::Error>(())
/// ```
pub struct Mdcv {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Mdcv {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable strict parsing: reject input with no sections.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Discard link targets, keeping labels only.
    pub fn plain_links(mut self) -> Self {
        self.parse_options = self.parse_options.plain_links();
        self
    }

    /// Exclude header elements from rendered output.
    pub fn without_header(mut self) -> Self {
        self.render_options = self.render_options.with_header(false);
        self
    }

    /// Set the list marker glyph.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Parse a file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<MdcvResult> {
        let document = parse_file_with_options(path, self.parse_options)?;
        Ok(MdcvResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a string and return a result wrapper.
    pub fn parse_str(self, source: &str) -> Result<MdcvResult> {
        let document = parse_str_with_options(source, self.parse_options)?;
        Ok(MdcvResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Mdcv {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a resume document.
#[derive(Debug)]
pub struct MdcvResult {
    /// The parsed document
    pub document: Resume,
    render_options: RenderOptions,
}

impl MdcvResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert the model to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Flatten to the styled-element layout.
    pub fn to_layout(&self) -> Vec<StyledElement> {
        render::to_layout(&self.document, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Resume {
        &self.document
    }
}
