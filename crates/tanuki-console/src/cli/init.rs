/*
[INPUT]:  Interactive user input via CLI
[OUTPUT]: Generated JSON configuration file
[POS]:    CLI initialization layer
[UPDATE]: When ConsoleConfig schema changes
*/

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, theme::ColorfulTheme};

use tanuki_console::ConsoleConfig;
use tanuki_console::config::{DEFAULT_API_BASE_URL, DEFAULT_MODEL_NAME, DEFAULT_SIMULATED_DELAY_MS};

pub fn execute(config_path: &Path) -> Result<()> {
    println!("{}", style("Welcome to Tanuki Console Init").bold().cyan());
    println!(
        "{}",
        style("This will guide you through creating a configuration file.").dim()
    );

    let theme = ColorfulTheme::default();

    let api_base_url: String = Input::with_theme(&theme)
        .with_prompt("Service URL")
        .default(DEFAULT_API_BASE_URL.to_string())
        .interact_text()?;

    let api_key: String = Input::with_theme(&theme)
        .with_prompt("API key (leave empty to use the simulated backend only)")
        .allow_empty(true)
        .interact_text()?;

    println!("\n{}", style("--- Models ---").bold());
    let model_name: String = Input::with_theme(&theme)
        .with_prompt("Backbone model")
        .default(DEFAULT_MODEL_NAME.to_string())
        .interact_text()?;

    let adapter_path: String = Input::with_theme(&theme)
        .with_prompt("LoRA adapters directory (optional)")
        .allow_empty(true)
        .interact_text()?;

    println!("\n{}", style("--- Simulation ---").bold());
    let simulated_delay_ms: u64 = Input::with_theme(&theme)
        .with_prompt("Simulated backend delay (ms)")
        .default(DEFAULT_SIMULATED_DELAY_MS)
        .interact_text()?;

    let config = ConsoleConfig {
        api_base_url,
        api_key: (!api_key.is_empty()).then_some(api_key),
        model_name,
        adapter_path: (!adapter_path.is_empty()).then_some(adapter_path),
        simulated_delay_ms,
    };

    config
        .save(config_path)
        .context("write configuration file")?;

    println!(
        "\n{} {}",
        style("Configuration written to").green(),
        style(config_path.display()).bold()
    );
    Ok(())
}
