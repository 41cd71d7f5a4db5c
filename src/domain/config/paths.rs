use std::path::{Path, PathBuf};

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "stockroom.toml";

/// `<root>/stockroom.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve the store path against `root` unless it is already absolute.
pub fn store(root: &Path, configured: &Path) -> PathBuf {
    if configured.is_absolute() { configured.to_path_buf() } else { root.join(configured) }
}
