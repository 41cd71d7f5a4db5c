use crate::domain::AppError;

/// Port for reading answers from the operator.
pub trait Operator {
    /// Read the next command line. Returns `None` once input is exhausted.
    fn read_command(&mut self, prompt: &str) -> Result<Option<String>, AppError>;

    /// Ask a yes/no question. Returns `false` when the operator declines or cancels.
    fn confirm(&mut self, prompt: &str) -> Result<bool, AppError>;

    /// Offer a single-choice list. Returns the chosen index, or `None` when cancelled.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>, AppError>;
}
