//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shoecart_data::ApiConfig;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["shoecart.toml", ".shoecart.toml", "shoecart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storefront API settings.
    #[serde(default)]
    pub api: ApiSection,

    /// Local persistence settings.
    #[serde(default)]
    pub storage: StorageSection,
}

impl CliConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Connection settings for the catalog client.
    pub fn api_config(&self) -> ApiConfig {
        let config = match &self.api.base_url {
            Some(url) => ApiConfig::new(url.clone()),
            None => ApiConfig::from_host(&self.api.host),
        };
        match self.api.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Storefront API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Host the storefront is served from; the API is on port 3333.
    #[serde(default = "default_host")]
    pub host: String,

    /// Explicit base URL, overriding `host`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            base_url: None,
            timeout_secs: None,
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

/// Local persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the persisted cart, relative to the working directory.
    #[serde(default = "default_storage_dir")]
    pub dir: String,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

fn default_storage_dir() -> String {
    ".shoecart".to_string()
}

/// Commented config written by `config init`.
pub fn generate_default_config() -> String {
    r#"# ShoeCart configuration

[api]
# Host the storefront is served from. The API is reached at http://<host>:3333.
host = "localhost"
# base_url = "http://localhost:3333"
# timeout_secs = 10

[storage]
# Where the cart is persisted between runs.
dir = ".shoecart"
"#
    .to_string()
}
