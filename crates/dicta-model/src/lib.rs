//! Parsed dictionary structures.
//!
//! Field declaration order is the output order, and fields holding
//! nothing are dropped from output entirely.

use serde::Serialize;

use dicta_markup::Markup;

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The word a dictionary entry describes.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Headword {
    pub value: String,
    /// Index distinguishing homographs, printed as a superscript after
    /// the headword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homonym_id: Option<u32>,
    /// Reconstructed forms are starred in print.
    #[serde(skip_serializing_if = "is_false")]
    pub assumed: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub headword: Headword,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<Markup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<Sense>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Sense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}
