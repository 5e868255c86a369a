/*
[INPUT]:  CLI arguments, JSON configuration file
[OUTPUT]: One-shot task runs, config management, or the interactive TUI
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or subcommands
*/

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tanuki_console::ConsoleConfig;

mod cli;
mod tui;

#[derive(Parser, Debug)]
#[command(name = "tanuki", version, about = "Interactive console for the Tanuki-Programmer service")]
struct Cli {
    /// Path to the configuration file
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a programming task and print its output
    Run(cli::run::RunArgs),
    /// Launch the interactive terminal UI
    Tui {
        #[command(flatten)]
        source: cli::SourceArgs,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: cli::config_cmd::ConfigCommand,
    },
    /// Manage models and adapters
    Models {
        #[command(subcommand)]
        command: cli::models::ModelsCommand,
    },
    /// Interactively create a configuration file
    Init,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let config_path = match &args.config_path {
        Some(path) => path.clone(),
        None => ConsoleConfig::default_path()?,
    };

    if let Command::Tui { source } = &args.command {
        // The TUI owns the terminal; logs go to the in-app buffer instead
        // of stderr.
        let log_buffer = tui::init_tui_tracing(&args.log_level)?;
        let config = ConsoleConfig::load(&config_path)?;
        let task_source = cli::build_task_source(source, &config)?;
        tui::run_tui(task_source, log_buffer).await?;
        return Ok(ExitCode::SUCCESS);
    }

    init_tracing(&args.log_level)?;
    let config = ConsoleConfig::load(&config_path)?;

    match args.command {
        Command::Run(run_args) => {
            info!(config_path = %config_path.display(), "starting one-shot run");
            cli::run::execute(run_args, &config).await
        }
        Command::Config { command } => {
            cli::config_cmd::execute(command, &config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Models { command } => {
            cli::models::execute(command, &config);
            Ok(ExitCode::SUCCESS)
        }
        Command::Init => {
            cli::init::execute(&config_path)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Tui { .. } => unreachable!("handled before tracing setup"),
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
