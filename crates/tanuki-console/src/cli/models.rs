/*
[INPUT]:  Models subcommands and loaded configuration
[OUTPUT]: Model and adapter listing on stdout
[POS]:    CLI layer - model management
[UPDATE]: When the service exposes richer model metadata
*/

use clap::Subcommand;
use console::style;

use tanuki_console::ConsoleConfig;

#[derive(Subcommand, Debug)]
pub enum ModelsCommand {
    /// List the configured model and adapters
    List,
}

pub fn execute(command: ModelsCommand, config: &ConsoleConfig) {
    match command {
        ModelsCommand::List => {
            println!("{}", style("Available models and adapters:").bold());
            println!("  Backbone Model: {}", config.model_name);
            println!(
                "  LoRA Adapters Path: {}",
                config.adapter_path.as_deref().unwrap_or("Not configured")
            );
        }
    }
}
