use std::io;

use thiserror::Error;

/// Library-wide error type for stockroom operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Inventory could not be serialized for saving.
    #[error("Failed to serialize inventory: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error in the configuration file.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Operator prompt could not be shown or answered.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Quantity token is not a positive whole number.
    #[error("Invalid quantity '{0}'. Please provide a valid number.")]
    InvalidQuantity(String),

    /// Operation keyword is neither `add` nor `remove`.
    #[error("Invalid operation '{0}'. Please provide \"add\" or \"remove\".")]
    InvalidOperation(String),

    /// Command line does not have the expected token layout.
    #[error("Invalid command. {0}")]
    InvalidCommandShape(String),

    /// Removal targeted a component that is not stored.
    #[error("{0} is not in stock.")]
    UnknownComponent(String),

    /// Removal asked for more than is on hand.
    #[error("{name} has {available} left. Cannot remove {requested}")]
    InsufficientStock { name: String, available: u64, requested: u64 },

    /// Stored inventory exists but cannot be read or decoded.
    #[error("Failed to read inventory: {0}")]
    StoreRead(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_shape<S: Into<String>>(message: S) -> Self {
        AppError::InvalidCommandShape(message.into())
    }

    /// Whether the error was caused by what the operator typed rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidQuantity(_)
                | AppError::InvalidOperation(_)
                | AppError::InvalidCommandShape(_)
                | AppError::UnknownComponent(_)
                | AppError::InsufficientStock { .. }
        )
    }
}
