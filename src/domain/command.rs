//! Tokenizer and typed representation of one line of operator input.

use super::component::normalize_name;
use super::operation::{StockOperation, parse_quantity};
use super::AppError;

const FIND_USAGE: &str = "Please provide an item name to search.";
const CHANGE_USAGE: &str = "Please provide an operation, quantity, and name.";

/// Why a line could not be turned into a runnable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    Quantity(String),
    Operation(String),
    Shape(&'static str),
}

impl From<ParseFailure> for AppError {
    fn from(failure: ParseFailure) -> Self {
        match failure {
            ParseFailure::Quantity(token) => AppError::InvalidQuantity(token),
            ParseFailure::Operation(token) => AppError::InvalidOperation(token),
            ParseFailure::Shape(usage) => AppError::invalid_shape(usage),
        }
    }
}

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Increase (or create) stock for a name.
    Add { quantity: u64, name: String },
    /// Decrease stock for a name.
    Remove { quantity: u64, name: String },
    /// Search by words; every word must appear in the name.
    Find { words: Vec<String> },
    Stock,
    Format,
    Clear,
    Help,
    Exit,
    Invalid(ParseFailure),
}

impl Command {
    /// Parse one input line.
    ///
    /// Tokens are split on whitespace. Keywords are matched case-sensitively; `stock`,
    /// `format`, `clear`, `help` and `exit` ignore any trailing tokens. Anything else must
    /// have the shape `<operation> <quantity> <name...>`, which is checked for token count,
    /// then quantity, then operation.
    pub fn parse(line: &str) -> Command {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            ["exit", ..] => Command::Exit,
            ["help", ..] => Command::Help,
            ["stock", ..] => Command::Stock,
            ["clear", ..] => Command::Clear,
            ["format", ..] => Command::Format,
            ["find"] => Command::Invalid(ParseFailure::Shape(FIND_USAGE)),
            ["find", words @ ..] => {
                Command::Find { words: words.iter().map(|word| word.to_uppercase()).collect() }
            }
            [operation, quantity, name @ ..] if !name.is_empty() => {
                parse_stock_change(operation, quantity, name)
            }
            _ => Command::Invalid(ParseFailure::Shape(CHANGE_USAGE)),
        }
    }

    /// The stock change carried by `Add`/`Remove`, if any.
    pub fn stock_change(&self) -> Option<(StockOperation, u64, &str)> {
        match self {
            Command::Add { quantity, name } => Some((StockOperation::Add, *quantity, name)),
            Command::Remove { quantity, name } => Some((StockOperation::Remove, *quantity, name)),
            _ => None,
        }
    }
}

fn parse_stock_change(operation: &str, quantity: &str, name: &[&str]) -> Command {
    let quantity = match parse_quantity(quantity) {
        Ok(value) => value,
        Err(_) => return Command::Invalid(ParseFailure::Quantity(quantity.to_string())),
    };
    let operation = match StockOperation::from_keyword(operation) {
        Ok(op) => op,
        Err(_) => return Command::Invalid(ParseFailure::Operation(operation.to_string())),
    };
    let name = normalize_name(&name.join(" "));

    match operation {
        StockOperation::Add => Command::Add { quantity, name },
        StockOperation::Remove => Command::Remove { quantity, name },
    }
}
