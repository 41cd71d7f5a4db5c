pub mod parse;
pub mod paths;

use std::path::PathBuf;

use serde::Deserialize;

pub use parse::parse_config_content;

/// Default inventory file, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "stock.json";

/// Environment variable overriding `store.path`.
pub const STORE_PATH_ENV: &str = "STOCKROOM_STORE";

/// Settings loaded from `stockroom.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StockroomConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[store]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: default_store_path() }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl StockroomConfig {
    /// Apply an override for the store path, ignoring blank values.
    pub fn with_store_override(mut self, value: Option<String>) -> Self {
        if let Some(path) = value.filter(|v| !v.trim().is_empty()) {
            self.store.path = PathBuf::from(path);
        }
        self
    }
}
