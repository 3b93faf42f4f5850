//! Marked up text and its construction from formatted characters.

pub mod builder;
pub mod node;

pub use builder::{formatted_text, formatted_text_with};
pub use node::{Markup, MarkupNode, Tag};
