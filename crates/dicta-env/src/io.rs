use indexmap::IndexMap;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use dicta_constants::{CATALOG_FILE, CONFIG_DIR, SHELL_FILE};
use dicta_error::{DictaError, Result};

use crate::catalog::Catalog;
use crate::shell::ShellConfig;

pub fn read_catalog(path: &Path) -> Result<Catalog<Value>> {
    let content = fs::read_to_string(path)
        .map_err(|e| DictaError::CatalogError(format!("{}: {e}", path.display())))?;
    let entries: IndexMap<String, Value> = serde_json::from_str(&content)
        .map_err(|e| DictaError::CatalogError(format!("{}: {e}", path.display())))?;
    Ok(Catalog::from(entries))
}

pub fn read_shell_config(project_dir: &Path) -> Result<ShellConfig> {
    let path = project_dir.join(SHELL_FILE);
    let content = fs::read_to_string(&path)
        .map_err(|e| DictaError::ShellConfigError(format!("{}: {e}", path.display())))?;
    let parsed: ShellConfig = serde_json::from_str(&content)
        .map_err(|e| DictaError::ShellConfigError(format!("{}: {e}", path.display())))?;
    Ok(parsed)
}

#[must_use]
pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CATALOG_FILE))
}

/// Catalog location precedence: explicit flag, then the shell config,
/// then a project-local catalog file, then the user config dir.
pub fn resolve_catalog_path(
    explicit: Option<&Path>,
    config: Option<&ShellConfig>,
    project_dir: &Path,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = config.and_then(|c| c.catalog.as_ref()) {
        return Ok(path.clone());
    }

    let local = project_dir.join(CATALOG_FILE);
    if local.exists() {
        return Ok(local);
    }

    default_catalog_path()
        .filter(|path| path.exists())
        .ok_or_else(|| {
            DictaError::CatalogError(
                "no catalog found; pass --catalog or set one in shell.json".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Runtime;

    #[test]
    fn test_read_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r#"{"lsp": {"pname": "python-lsp-server"}, "venv": {"pname": "virtualenv"}}"#,
        )
        .unwrap();

        let catalog = read_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get("lsp").and_then(|d| d.get("pname")),
            Some(&Value::String("python-lsp-server".to_string()))
        );
    }

    #[test]
    fn test_read_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_catalog(&dir.path().join("catalog.json")).unwrap_err();
        assert!(matches!(err, DictaError::CatalogError(_)));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShellConfig::new(Runtime::new("python3"));
        let explicit = dir.path().join("elsewhere.json");

        let resolved = resolve_catalog_path(Some(&explicit), Some(&config), dir.path()).unwrap();
        assert_eq!(resolved, explicit);
    }

    #[test]
    fn test_resolve_falls_back_to_project_local() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join(CATALOG_FILE);
        fs::write(&local, "{}").unwrap();

        let resolved = resolve_catalog_path(None, None, dir.path()).unwrap();
        assert_eq!(resolved, local);
    }

    #[test]
    fn test_resolve_honors_shell_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ShellConfig::new(Runtime::new("python3"));
        config.catalog = Some(PathBuf::from("pkgs/catalog.json"));

        let resolved = resolve_catalog_path(None, Some(&config), dir.path()).unwrap();
        assert_eq!(resolved, PathBuf::from("pkgs/catalog.json"));
    }
}
