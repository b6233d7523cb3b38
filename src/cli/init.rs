//! Init command - write an example config

use anyhow::{Context, Result};
use console::style;
use sentiscore::config::{init_config, CONFIG_FILE_NAME};
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    let created = init_config(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    if created {
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    } else {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    }
    Ok(())
}
