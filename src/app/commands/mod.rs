pub mod change;
pub mod find;
pub mod mutate;
pub mod prune;
pub mod resolve;
pub mod stock;

pub use change::StockChange;
pub use find::FindOutcome;
pub use prune::PruneOutcome;
pub use resolve::Resolution;
pub use stock::StockReport;
