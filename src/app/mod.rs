pub mod commands;
pub mod config;
mod context;
pub mod logging;
pub mod render;
pub mod session;

pub use context::AppContext;
