/*
[INPUT]:  JSON configuration file and `config set` key/value pairs
[OUTPUT]: Parsed console configuration
[POS]:    Configuration layer - service endpoint and simulation settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_MODEL_NAME: &str = "deepseek-ai/DeepSeek-Coder-V2-Lite";
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

/// Keys accepted by `config set`
pub const CONFIG_KEYS: [&str; 5] = [
    "api_base_url",
    "api_key",
    "model_name",
    "adapter_path",
    "simulated_delay_ms",
];

/// Persisted console configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Base URL of the deployed service
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key sent as X-API-Key on remote submissions
    #[serde(default)]
    pub api_key: Option<String>,
    /// Backbone model the service should run
    #[serde(default = "default_model_name")]
    pub model_name: String,
    /// Directory holding LoRA adapters
    #[serde(default)]
    pub adapter_path: Option<String>,
    /// Delay used by the simulated backend
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            model_name: default_model_name(),
            adapter_path: None,
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL_NAME.to_string()
}

fn default_simulated_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

impl ConsoleConfig {
    /// Default on-disk location: `<user config dir>/tanuki/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("could not determine the user config directory")?;
        Ok(base.join("tanuki").join("config.json"))
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Write configuration, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("write config file {}", path.display()))?;
        Ok(())
    }

    /// Apply one `config set` assignment
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_base_url" => self.api_base_url = value.to_string(),
            "api_key" => self.api_key = Some(value.to_string()),
            "model_name" => self.model_name = value.to_string(),
            "adapter_path" => self.adapter_path = Some(value.to_string()),
            "simulated_delay_ms" => {
                self.simulated_delay_ms = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a millisecond count"))?;
            }
            _ => bail!(
                "unknown configuration key '{key}' (valid keys: {})",
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
