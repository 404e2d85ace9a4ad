//! Rendering options and configuration.

/// Options for rendering a parsed resume.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit header (name/contact) elements before the sections
    pub include_header: bool,

    /// Glyph prefixed to bullet and sub-bullet lines
    pub list_marker: char,

    /// Spaces per indent level in plain text output
    pub indent_width: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable header elements.
    pub fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Set the list marker glyph.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the plain-text indent width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_header: true,
            list_marker: '\u{2022}',
            indent_width: 4,
        }
    }
}
