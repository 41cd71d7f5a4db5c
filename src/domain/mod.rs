pub mod command;
pub mod component;
pub mod config;
pub mod error;
pub mod matcher;
pub mod operation;

pub use command::{Command, ParseFailure};
pub use component::{Component, normalize_name};
pub use config::StockroomConfig;
pub use error::AppError;
pub use operation::{StockOperation, parse_quantity};
