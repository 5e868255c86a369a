/*
[INPUT]:  Parsed CLI arguments and loaded configuration
[OUTPUT]: Subcommand handlers and the shared task source builder
[POS]:    CLI layer - module root
[UPDATE]: When adding subcommands or source selection flags
*/

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use tanuki_adapter::{Credentials, RemoteTaskSource, SimulatedBackend, TanukiClient, TaskSource};
use tanuki_console::ConsoleConfig;

pub mod config_cmd;
pub mod init;
pub mod models;
pub mod run;

/// Flags choosing and tuning the task source; shared by `run` and `tui`
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Submit to a deployed service instead of the simulated backend
    #[arg(long)]
    pub remote: bool,
    /// Extra context sent with each submission (remote only)
    #[arg(long, value_name = "TEXT")]
    pub context: Option<String>,
    /// File the service should consider; repeatable (remote only)
    #[arg(long = "file", value_name = "PATH")]
    pub file_paths: Vec<String>,
    /// Override the simulated delay in milliseconds
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,
    /// Override the configured service URL (remote only)
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
    /// Override the configured API key (remote only)
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,
}

/// Build the task source the surfaces submit to.
///
/// Default is the simulated backend; `--remote` switches to the HTTP
/// client, with flags taking precedence over configuration values.
pub fn build_task_source(
    args: &SourceArgs,
    config: &ConsoleConfig,
) -> Result<Arc<dyn TaskSource>> {
    if args.remote {
        let base_url = args
            .api_url
            .clone()
            .unwrap_or_else(|| config.api_base_url.clone());
        let api_key = args
            .api_key
            .clone()
            .or_else(|| config.api_key.clone())
            .context("no API key configured; run `tanuki config set api_key <KEY>` or pass --api-key")?;

        let mut client =
            TanukiClient::with_base_url(&base_url).context("build service client")?;
        client.set_credentials(Credentials { api_key });
        tracing::info!(base_url = %base_url, "submitting to remote service");

        let file_paths = if args.file_paths.is_empty() {
            None
        } else {
            Some(args.file_paths.clone())
        };
        Ok(Arc::new(
            RemoteTaskSource::new(client)
                .with_context(args.context.clone())
                .with_file_paths(file_paths),
        ))
    } else {
        let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.simulated_delay_ms));
        tracing::info!(delay_ms = delay.as_millis() as u64, "using simulated backend");
        Ok(Arc::new(SimulatedBackend::with_delay(delay)))
    }
}
