use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use dicta_error::{DictaError, Result};

use crate::environment::{Runtime, Selection};

/// Declarative session configuration: the runtime to expose, the package
/// names to pull from the catalog, and optionally where the catalog lives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub runtime: Runtime,
    #[serde(default)]
    pub packages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl ShellConfig {
    #[must_use]
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            packages: Vec::new(),
            catalog: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.packages.iter().map(String::as_str).collect()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DictaError::ShellConfigError(e.to_string()))?;
        fs::write(path, content).map_err(|e| DictaError::IoError(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_drops_duplicates() {
        let mut config = ShellConfig::new(Runtime::new("python3"));
        config.packages = vec!["lsp".to_string(), "venv".to_string(), "lsp".to_string()];

        let selection = config.selection();
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("lsp"));
        assert!(selection.contains("venv"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");

        let mut config = ShellConfig::new(Runtime::with_version("python3", "3.12"));
        config.packages = vec!["docx".to_string()];
        config.save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let reloaded: ShellConfig = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded, config);
    }
}
