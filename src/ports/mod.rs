mod component_store;
mod console;
mod operator;

pub use component_store::ComponentStore;
pub use console::Console;
pub use operator::Operator;
