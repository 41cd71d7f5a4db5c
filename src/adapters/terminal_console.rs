use console::Term;

use crate::domain::AppError;
use crate::ports::Console;

/// Console output on the process's stdout.
pub struct TerminalConsole {
    term: Term,
}

impl TerminalConsole {
    pub fn stdout() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), AppError> {
        if self.term.is_term() {
            self.term.clear_screen()?;
        }
        Ok(())
    }
}
