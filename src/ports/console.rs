use crate::domain::AppError;

/// Port for console output.
pub trait Console {
    /// Print one line of text.
    fn write_line(&mut self, line: &str) -> Result<(), AppError>;

    /// Clear the visible screen.
    fn clear(&mut self) -> Result<(), AppError>;
}
