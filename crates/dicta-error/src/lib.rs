use std::fmt;

#[derive(Debug)]
pub enum DictaError {
    PackageNotFound(String),
    CatalogError(String),
    ShellConfigError(String),
    ShellConfigExists(String),
    GrammarNotFound(String),
    DocumentError(String),
    ParseError(String),
    UnknownGlyph(String, u32),
    OutputError(String),
    IoError(String),
}

impl fmt::Display for DictaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PackageNotFound(name) => {
                write!(f, "Package '{name}' not found in the catalog")
            }
            Self::CatalogError(msg) => {
                write!(f, "Catalog error: {msg}")
            }
            Self::ShellConfigError(msg) => {
                write!(f, "Shell configuration error: {msg}")
            }
            Self::ShellConfigExists(path) => {
                write!(f, "Shell configuration already exists at {path}")
            }
            Self::GrammarNotFound(name) => {
                write!(f, "Grammar '{name}' is not defined")
            }
            Self::DocumentError(msg) => {
                write!(f, "Document error: {msg}")
            }
            Self::ParseError(msg) => {
                write!(f, "Parse error: {msg}")
            }
            Self::UnknownGlyph(font, code) => {
                write!(f, "No Unicode mapping for U+{code:04X} in font '{font}'")
            }
            Self::OutputError(msg) => {
                write!(f, "Output error: {msg}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
        }
    }
}

impl std::error::Error for DictaError {}

impl From<anyhow::Error> for DictaError {
    fn from(err: anyhow::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DictaError>;
