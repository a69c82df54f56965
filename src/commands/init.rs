//! Write a default config file

use std::path::Path;

use labelgrade::config::Config;
use labelgrade::output::{OperationResult, OutputMode};

/// Write the default config to `path` (or the global location)
pub fn init(path: Option<&Path>, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = path.map_or_else(Config::config_path, Path::to_path_buf);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Config already exists at {}. Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::write_default(&path)?;
    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
