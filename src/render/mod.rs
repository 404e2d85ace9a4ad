//! Rendering module: the output side of the block contract.
//!
//! The parser's `Resume` is handed to an external document renderer. This
//! module carries the fixed block-to-style mapping that renderer must
//! honor (`layout`), plus plain text and JSON outputs and the visitor
//! seam custom renderers implement.

mod json;
mod layout;
mod options;
mod text;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use layout::{to_layout, to_layout_string, Alignment, StyleClass, StyledElement, TextStyle};
pub use options::RenderOptions;
pub use text::to_text;
pub use visitor::{walk, DocumentVisitor};
