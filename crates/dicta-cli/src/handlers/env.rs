use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use dicta_env::environment::Runtime;
use dicta_env::io::{read_catalog, read_shell_config, resolve_catalog_path};
use dicta_env::{Environment, compose};

pub struct EnvHandler;

impl EnvHandler {
    pub fn handle_env(dir: &Path, catalog_path: Option<&Path>, json: bool) -> Result<()> {
        let config = read_shell_config(dir).map_err(|e| anyhow::anyhow!(e))?;
        let catalog_file =
            resolve_catalog_path(catalog_path, Some(&config), dir).map_err(|e| anyhow::anyhow!(e))?;
        let catalog = read_catalog(&catalog_file).map_err(|e| anyhow::anyhow!(e))?;

        let env = compose(config.runtime.clone(), &config.selection(), &catalog)
            .map_err(|e| anyhow::anyhow!(e))?;

        if json {
            println!("{}", serde_json::to_string_pretty(&env)?);
        } else {
            Self::show_environment(&env);
        }
        Ok(())
    }

    fn show_environment(env: &Environment<Value>) {
        dicta_logger::info(&format!("Runtime: {}", describe_runtime(&env.runtime)));

        if env.package_count() == 0 {
            dicta_logger::info("No packages selected");
            return;
        }

        dicta_logger::info("Packages:");
        for (name, descriptor) in &env.packages {
            match descriptor.get("version").and_then(Value::as_str) {
                Some(version) => println!("  {name} {version}"),
                None => println!("  {name}"),
            }
        }
    }
}

fn describe_runtime(runtime: &Runtime) -> String {
    match &runtime.version {
        Some(version) => format!("{} {version}", runtime.name),
        None => runtime.name.clone(),
    }
}
