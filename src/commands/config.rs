use anyhow::Result;

use crate::config::Config;

/// Run the config command - print the effective configuration
pub fn run(config: &Config, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml_string()?);
    }
    Ok(())
}
