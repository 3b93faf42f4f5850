use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use dicta_env::Selection;
use dicta_env::io::{read_catalog, read_shell_config, resolve_catalog_path};

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list(dir: &Path, catalog_path: Option<&Path>) -> Result<()> {
        // shell.json is optional here; without it the catalog still lists
        let config = read_shell_config(dir).ok();
        let selection = config
            .as_ref()
            .map_or_else(Selection::new, dicta_env::ShellConfig::selection);

        let catalog_file = resolve_catalog_path(catalog_path, config.as_ref(), dir)
            .map_err(|e| anyhow::anyhow!(e))?;
        let catalog = read_catalog(&catalog_file).map_err(|e| anyhow::anyhow!(e))?;

        if catalog.is_empty() {
            dicta_logger::info(&format!("Catalog {} is empty", catalog_file.display()));
            return Ok(());
        }

        dicta_logger::info(&format!("Packages in {}:", catalog_file.display()));
        for (name, descriptor) in catalog.iter() {
            let version = descriptor.get("version").and_then(Value::as_str);
            let selected = if selection.contains(name) {
                " (selected)"
            } else {
                ""
            };
            match version {
                Some(version) => println!("  {name} {version}{selected}"),
                None => println!("  {name}{selected}"),
            }
        }
        Ok(())
    }
}
