/*
[INPUT]:  Config subcommands and the configuration file path
[OUTPUT]: Updated configuration on disk, or the current values on stdout
[POS]:    CLI layer - configuration management
[UPDATE]: When config keys or display format change
*/

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use tanuki_console::ConsoleConfig;

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Print the current configuration
    Show,
}

pub fn execute(command: ConfigCommand, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => {
            let mut config = ConsoleConfig::load(config_path)?;
            config.set(&key, &value)?;
            config.save(config_path)?;
            println!("Configuration updated: '{key}' = '{value}'");
        }
        ConfigCommand::Show => {
            let config = ConsoleConfig::load(config_path)?;
            let rendered =
                serde_json::to_string_pretty(&config).context("render configuration")?;
            println!("{rendered}");
        }
    }
    Ok(())
}
