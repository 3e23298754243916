use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

use crate::collection::DEFAULT_CALORIE_THRESHOLD;
use crate::config::CONFIG_DIR;
use crate::templates;

/// Run the init command - write .recipebook/config.toml in the current directory
pub fn run(force: bool) -> Result<()> {
    let path = init_at(Path::new("."), force)?;

    println!("Wrote {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Adjust the calorie threshold and colors in the config");
    println!("  2. Run 'recipebook' to start entering recipes");

    Ok(())
}

/// Create `<root>/.recipebook/config.toml`, returning its path
pub fn init_at(root: &Path, force: bool) -> Result<PathBuf> {
    let config_dir = root.join(CONFIG_DIR);
    let config_path = config_dir.join("config.toml");

    if config_path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite, or manually remove it first.",
            config_path.display()
        );
    }

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create {}", config_dir.display()))?;

    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let content = templates::CONFIG_TEMPLATE
        .replace("{timestamp}", &timestamp)
        .replace(
            "{calorie_threshold}",
            &DEFAULT_CALORIE_THRESHOLD.to_string(),
        );

    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(config_path)
}
