use crate::domain::AppError;
use crate::ports::Console;

/// Console that records output for assertions.
#[derive(Default)]
pub struct RecordingConsole {
    pub lines: Vec<String>,
    pub clears: usize,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AppError> {
        self.clears += 1;
        self.lines.clear();
        Ok(())
    }
}
