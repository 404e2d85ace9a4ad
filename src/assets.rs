//! Renderer asset discovery.
//!
//! File-existence probes for the typeface family and the optional profile
//! image a paginating renderer wants. Discovery is total: a missing asset
//! degrades to a builtin fallback (with a warning) or to `None`, never to
//! an error.

use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Preferred TrueType family, probed as regular/bold/italic files.
const PREFERRED_FAMILY: [(&str, &str); 3] = [
    ("segoeui.ttf", "SegoeUI"),
    ("segoeuib.ttf", "SegoeUI-Bold"),
    ("segoeuii.ttf", "SegoeUI-Italic"),
];

/// Builtin face names every renderer ships.
const FALLBACK_FAMILY: [&str; 3] = ["Helvetica", "Helvetica-Bold", "Helvetica-Oblique"];

/// Relative paths probed for a profile image, in preference order.
const PROFILE_IMAGE_CANDIDATES: [&str; 3] = [
    "images/self/Me.jpg",
    "images/profile.jpg",
    "images/profile.png",
];

/// A resolved font family for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    /// Regular face name
    pub regular: String,

    /// Bold face name
    pub bold: String,

    /// Italic face name
    pub italic: String,

    /// Where the faces came from
    pub source: FontSource,
}

/// Origin of a resolved font family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// TrueType files found under this directory
    Discovered(PathBuf),
    /// Builtin renderer faces
    Builtin,
}

impl FontSet {
    /// The builtin fallback family.
    pub fn builtin() -> Self {
        Self {
            regular: FALLBACK_FAMILY[0].to_string(),
            bold: FALLBACK_FAMILY[1].to_string(),
            italic: FALLBACK_FAMILY[2].to_string(),
            source: FontSource::Builtin,
        }
    }

    /// Whether this set was discovered on disk.
    pub fn is_discovered(&self) -> bool {
        matches!(self.source, FontSource::Discovered(_))
    }
}

/// Platform font directories, probed in order.
pub fn default_font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("C:/Windows/Fonts"),
        PathBuf::from("/usr/share/fonts/truetype"),
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/Library/Fonts"),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(PathBuf::from(home).join(".fonts"));
    }
    dirs
}

/// Probe the given directories for the preferred family.
///
/// The regular face must exist for a directory to be accepted; bold and
/// italic fall back to the regular face if their files are absent.
pub fn discover_fonts(search_dirs: &[PathBuf]) -> FontSet {
    for dir in search_dirs {
        let regular = dir.join(PREFERRED_FAMILY[0].0);
        if !regular.is_file() {
            continue;
        }
        debug!("using fonts from {}", dir.display());
        let face = |(file, name): (&str, &str)| {
            if dir.join(file).is_file() {
                name.to_string()
            } else {
                PREFERRED_FAMILY[0].1.to_string()
            }
        };
        return FontSet {
            regular: PREFERRED_FAMILY[0].1.to_string(),
            bold: face(PREFERRED_FAMILY[1]),
            italic: face(PREFERRED_FAMILY[2]),
            source: FontSource::Discovered(dir.clone()),
        };
    }

    warn!("preferred font family not found, using builtin faces");
    FontSet::builtin()
}

/// Look for a profile image under the given base directory.
pub fn find_profile_image(base_dir: &Path) -> Option<PathBuf> {
    PROFILE_IMAGE_CANDIDATES
        .iter()
        .map(|candidate| base_dir.join(candidate))
        .find(|path| path.is_file())
}
