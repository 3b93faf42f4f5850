//! Basic units processed while parsing.
//!
//! The unit of text is a single character (one Unicode scalar) carrying
//! the formatting of the run it came from.

pub mod character;
pub mod document;
pub mod extract;

pub use character::{Character, Format, raw_text};
pub use document::{Document, Paragraph, Run, read_document};
pub use extract::{extract_characters, extract_entries};
