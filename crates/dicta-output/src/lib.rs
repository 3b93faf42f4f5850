//! YAML emission of parsing results.

use std::fs;
use std::path::Path;

use dicta_error::{DictaError, Result};
use dicta_model::Entry;

pub fn to_yaml(entries: &[Entry]) -> Result<String> {
    serde_yaml::to_string(entries).map_err(|e| DictaError::OutputError(e.to_string()))
}

/// Writes the entries as one YAML document, to the file when given and
/// to stdout otherwise.
pub fn write_entries(entries: &[Entry], output: Option<&Path>) -> Result<()> {
    let yaml = to_yaml(entries)?;
    match output {
        Some(path) => {
            fs::write(path, &yaml).map_err(|e| DictaError::IoError(e.to_string()))?;
        }
        None => print!("{yaml}"),
    }
    Ok(())
}
