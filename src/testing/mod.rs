mod memory_store;
mod recording_console;
mod scripted_operator;

pub use memory_store::MemoryStore;
pub use recording_console::RecordingConsole;
pub use scripted_operator::{Answer, ScriptedOperator};
