//! Text sanitization pipeline.
//!
//! Converts raw markdown-flavored, emoji-bearing text into clean strings
//! that are safe to embed in the inline markup language the renderer
//! consumes (`<b>`, `<i>`, `<a href="…">`). Sanitization is total: any
//! input produces a result, unknown pictographic characters fall through
//! to a generic replacement glyph instead of failing.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Generic replacement glyph for pictographic characters outside the
/// explicit symbol table. Never empty, so a leading icon that marks list
/// structure stays visible.
const FALLBACK_GLYPH: &str = "\u{2022}";

/// Explicit symbol substitutions applied before the broad range sweep.
///
/// Contact icons become short bracketed labels; decorative icons degrade
/// to the neutral bullet glyph.
const SYMBOL_TABLE: &[(char, &str)] = &[
    ('\u{1F4E7}', "[email]"),    // 📧
    ('\u{2709}', "[email]"),     // ✉
    ('\u{1F4E8}', "[email]"),    // 📨
    ('\u{1F4F1}', "[phone]"),    // 📱
    ('\u{1F4DE}', "[phone]"),    // 📞
    ('\u{260E}', "[phone]"),     // ☎
    ('\u{1F517}', "[link]"),     // 🔗
    ('\u{1F310}', "[web]"),      // 🌐
    ('\u{1F4CD}', "[location]"), // 📍
    ('\u{1F4BC}', FALLBACK_GLYPH),
    ('\u{1F393}', FALLBACK_GLYPH),
    ('\u{1F680}', FALLBACK_GLYPH),
    ('\u{1F916}', FALLBACK_GLYPH),
    ('\u{1F4A1}', FALLBACK_GLYPH),
    ('\u{1F3C6}', FALLBACK_GLYPH),
    ('\u{2B50}', FALLBACK_GLYPH),
];

/// Character ranges treated as pictographic: emoticons, symbols and
/// pictographs, transport, flags, dingbats, enclosed characters, and the
/// supplemental/extended pictograph planes.
const PICTOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2702, 0x27B0),
    (0x24C2, 0x1F251),
    (0x1F900, 0x1F9FF),
    (0x1FA70, 0x1FAFF),
];

/// Invisible presentation characters dropped before the symbol walk.
/// These only modify an adjacent pictograph and carry no content.
const PRESENTATION_CHARS: &[char] = &['\u{FE0E}', '\u{FE0F}', '\u{200D}'];

/// Options controlling sanitization behavior.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    /// Convert `[label](target)` into a hyperlink markup element. When
    /// false, only the label survives and the target is discarded.
    pub preserve_links: bool,

    /// Normalize Unicode to NFC form before any other stage.
    pub normalize_unicode: bool,
}

impl SanitizeOptions {
    /// Create options with defaults (links preserved).
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text preset: link targets are discarded, labels kept.
    pub fn plain_text() -> Self {
        Self {
            preserve_links: false,
            normalize_unicode: true,
        }
    }

    /// Enable or disable hyperlink markup.
    pub fn with_links(mut self, preserve: bool) -> Self {
        self.preserve_links = preserve;
        self
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            preserve_links: true,
            normalize_unicode: true,
        }
    }
}

/// Text sanitizer with pre-compiled patterns.
///
/// Holds no state across calls; `sanitize` is a pure function of its
/// input and the options the sanitizer was built with.
pub struct Sanitizer {
    options: SanitizeOptions,
    bold_re: Regex,
    link_re: Regex,
    tag_re: Regex,
    space_re: Regex,
}

impl Sanitizer {
    /// Create a sanitizer with the given options.
    pub fn new(options: SanitizeOptions) -> Self {
        Self {
            options,
            bold_re: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            link_re: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap(),
            tag_re: Regex::new(r#"^(?:</?b>|</?i>|<a href="[^"]*">|</a>)"#).unwrap(),
            space_re: Regex::new(r"\s{2,}").unwrap(),
        }
    }

    /// Sanitize one line or inline fragment of text.
    ///
    /// Stages run in a fixed order: NFC normalization, the pictograph
    /// walk, markup escaping, bold conversion, link conversion, and
    /// whitespace collapse. Replacement text produced by the pictograph
    /// walk is never re-scanned by it.
    pub fn sanitize(&self, raw: &str) -> String {
        let text = if self.options.normalize_unicode {
            raw.nfc().collect::<String>()
        } else {
            raw.to_string()
        };

        let text = self.replace_pictographs(&text);
        let text = self.escape_markup(&text);
        let text = self.convert_bold(&text);
        let text = self.convert_links(&text);

        self.space_re.replace_all(&text, " ").trim().to_string()
    }

    /// Single ordered pass over the characters: explicit table lookup
    /// first, broad range sweep second.
    fn replace_pictographs(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if PRESENTATION_CHARS.contains(&c) {
                continue;
            }
            if let Some((_, label)) = SYMBOL_TABLE.iter().find(|(sym, _)| *sym == c) {
                out.push_str(label);
            } else if is_pictograph(c) {
                out.push_str(FALLBACK_GLYPH);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Escape `&`, `<`, and `>` unless they begin an entity or markup tag
    /// this sanitizer itself produces. Re-running sanitize over already
    /// sanitized text therefore leaves it unchanged.
    fn escape_markup(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut i = 0;
        while i < text.len() {
            let rest = &text[i..];
            if rest.starts_with("&amp;") || rest.starts_with("&lt;") || rest.starts_with("&gt;") {
                let len = rest.find(';').unwrap() + 1;
                out.push_str(&rest[..len]);
                i += len;
            } else if let Some(m) = self.tag_re.find(rest) {
                out.push_str(m.as_str());
                i += m.end();
            } else {
                let c = rest.chars().next().unwrap();
                match c {
                    '&' => out.push_str("&amp;"),
                    '<' => out.push_str("&lt;"),
                    '>' => out.push_str("&gt;"),
                    _ => out.push(c),
                }
                i += c.len_utf8();
            }
        }
        out
    }

    fn convert_bold(&self, text: &str) -> String {
        self.bold_re.replace_all(text, "<b>$1</b>").to_string()
    }

    fn convert_links(&self, text: &str) -> String {
        if self.options.preserve_links {
            self.link_re
                .replace_all(text, r#"<a href="$2">$1</a>"#)
                .to_string()
        } else {
            self.link_re.replace_all(text, "$1").to_string()
        }
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizeOptions::default())
    }
}

fn is_pictograph(c: char) -> bool {
    let code = c as u32;
    PICTOGRAPH_RANGES
        .iter()
        .any(|(lo, hi)| (*lo..=*hi).contains(&code))
}
