//! Entry grammar and the scanning primitives it is built from.

pub mod grammar;
pub mod registry;
pub mod scan;

pub use grammar::{EntryParser, parse_entry};
pub use registry::{GrammarFn, grammar, grammar_names};
pub use scan::{Cursor, FormatPred, regex_opt};
