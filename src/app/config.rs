//! Configuration loading from the working directory and environment.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::{self, STORE_PATH_ENV, StockroomConfig, paths};
use crate::domain::AppError;

/// Load `stockroom.toml` from `root` (defaults when absent) and apply `STOCKROOM_STORE`.
pub fn load_config(root: &Path) -> Result<StockroomConfig, AppError> {
    load_config_with(root, std::env::var(STORE_PATH_ENV).ok())
}

/// Same as [`load_config`], with the environment override passed in.
pub fn load_config_with(
    root: &Path,
    store_override: Option<String>,
) -> Result<StockroomConfig, AppError> {
    let config_path = paths::config(root);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        config::parse_config_content(&content).map_err(|err| {
            AppError::config_error(format!("Invalid {}: {}", config_path.display(), err))
        })?
    } else {
        StockroomConfig::default()
    };

    Ok(config.with_store_override(store_override))
}

/// Absolute location of the inventory file for `config`.
pub fn store_path(root: &Path, config: &StockroomConfig) -> PathBuf {
    paths::store(root, &config.store.path)
}
