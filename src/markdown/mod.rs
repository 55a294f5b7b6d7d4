//! Markdown document module
//!
//! Defines the parsed document tree consumed by the renderer.
//! Includes Document, Block, ListItem, Inline, plus the parser adapter
//! and the built-in sample document.

mod parser;
mod sample;
mod tree;

pub use parser::parse;
pub use sample::SAMPLE_MARKDOWN;
pub use tree::{Block, Document, Inline, ListItem};
