pub mod json_file_store;
pub mod terminal_console;
pub mod terminal_operator;

pub use json_file_store::JsonFileStore;
pub use terminal_console::TerminalConsole;
pub use terminal_operator::TerminalOperator;
