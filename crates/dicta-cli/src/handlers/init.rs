use anyhow::Result;
use inquire::Text;
use std::path::Path;

use dicta_constants::SHELL_FILE;
use dicta_env::{Runtime, ShellConfig};
use dicta_error::DictaError;

pub struct InitHandler;

impl InitHandler {
    pub fn handle_init(yes: bool) -> Result<()> {
        let path = Path::new(".").join(SHELL_FILE);
        if path.exists() {
            return Err(anyhow::anyhow!(DictaError::ShellConfigExists(
                path.to_string_lossy().into_owned(),
            )));
        }

        let config = if yes {
            ShellConfig::new(Runtime::new("python3"))
        } else {
            Self::prompt_config()?
        };

        config.save(&path).map_err(|e| anyhow::anyhow!(e))?;
        dicta_logger::success(&format!("Initialized {}", path.display()));
        Ok(())
    }

    fn prompt_config() -> Result<ShellConfig> {
        let name = Text::new("Runtime:").with_default("python3").prompt()?;
        let version = Text::new("Runtime version (empty for any):")
            .with_default("")
            .prompt()?;
        let packages = Text::new("Packages (comma separated):")
            .with_default("")
            .prompt()?;

        let runtime = if version.is_empty() {
            Runtime::new(&name)
        } else {
            Runtime::with_version(&name, &version)
        };

        let mut config = ShellConfig::new(runtime);
        config.packages = packages
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        Ok(config)
    }
}
