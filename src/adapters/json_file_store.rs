use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Component};
use crate::ports::ComponentStore;

/// Inventory stored as a pretty-printed JSON array of `{ "name", "stock" }` records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the backing file, keeping the failure cause.
    pub fn try_load(&self) -> Result<Vec<Component>, AppError> {
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|err| {
            AppError::StoreRead(format!("{}: {}", self.path.display(), err))
        })
    }
}

impl ComponentStore for JsonFileStore {
    fn load(&self) -> Vec<Component> {
        match self.try_load() {
            Ok(components) => components,
            Err(AppError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no inventory file yet");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "treating unreadable inventory as empty"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, components: &[Component]) -> Result<(), AppError> {
        let data = serde_json::to_string_pretty(components)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, data)?;
        tracing::debug!(path = %self.path.display(), count = components.len(), "inventory saved");
        Ok(())
    }
}
