//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use shoecart::CartStore;
use shoecart_cache::Cache;
use shoecart_data::CatalogClient;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::{Output, ToastPrinter};

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve(&cwd, path)),
            None => find_config(&cwd),
        };
        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Directory the cart is persisted in.
    pub fn storage_dir(&self) -> PathBuf {
        resolve(&self.cwd, &self.config.storage.dir)
    }

    /// Build the cart store for this invocation.
    pub fn open_store(&self) -> Result<CartStore> {
        let dir = self.storage_dir();
        tracing::debug!(storage = %dir.display(), "opening cart storage");
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;

        let api = self.config.api_config();
        self.output.debug(&format!("catalog API at {}", api.base_url));
        let catalog = CatalogClient::new(api);
        let notifier = ToastPrinter::new(self.output.clone());

        Ok(CartStore::new(Arc::new(catalog), Arc::new(notifier), cache))
    }
}

/// Find a config file in the directory tree, starting at `start`.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("shoecart.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.path().join("shoecart.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join("shoecart.toml"), "").unwrap();
        std::fs::write(nested.join(".shoecart.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(nested.join(".shoecart.toml")));
    }

    #[test]
    fn test_resolve() {
        let cwd = Path::new("/work");
        assert_eq!(resolve(cwd, ".shoecart"), PathBuf::from("/work/.shoecart"));
        assert_eq!(resolve(cwd, "/var/cart"), PathBuf::from("/var/cart"));
    }
}
