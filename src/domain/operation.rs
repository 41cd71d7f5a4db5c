use std::fmt;

use super::AppError;

/// Direction of a stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockOperation {
    Add,
    Remove,
}

impl StockOperation {
    /// Command keyword for this operation.
    pub fn keyword(&self) -> &'static str {
        match self {
            StockOperation::Add => "add",
            StockOperation::Remove => "remove",
        }
    }

    /// Past-tense verb used in confirmations.
    pub fn past_tense(&self) -> &'static str {
        match self {
            StockOperation::Add => "added",
            StockOperation::Remove => "removed",
        }
    }

    /// Parse an operation from its command keyword.
    pub fn from_keyword(keyword: &str) -> Result<StockOperation, AppError> {
        match keyword {
            "add" => Ok(StockOperation::Add),
            "remove" => Ok(StockOperation::Remove),
            other => Err(AppError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for StockOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Parse a quantity token as a strictly positive whole number.
pub fn parse_quantity(token: &str) -> Result<u64, AppError> {
    match token.parse::<u64>() {
        Ok(0) | Err(_) => Err(AppError::InvalidQuantity(token.to_string())),
        Ok(value) => Ok(value),
    }
}
