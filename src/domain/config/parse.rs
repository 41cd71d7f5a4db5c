//! Pure parse for `stockroom.toml`.

use crate::domain::AppError;

use super::StockroomConfig;

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<StockroomConfig, AppError> {
    let config: StockroomConfig = toml::from_str(content)?;
    if config.store.path.as_os_str().is_empty() {
        return Err(AppError::config_error("store.path must not be empty"));
    }
    Ok(config)
}
