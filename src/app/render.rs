//! Console text for command outcomes.

use crate::domain::Component;

use super::commands::{FindOutcome, PruneOutcome, StockChange, StockReport};

pub const BANNER: &str =
    "Welcome to the component stock management system! type 'help' to view commands";
pub const PROMPT: &str = "→ Enter command (or type \"exit\" to quit):";

const SEPARATOR: &str = "---------------";

const HELP: [&str; 8] = [
    "add <quantity> <name>    - Add components to stock",
    "remove <quantity> <name> - Remove components from stock",
    "find <name>              - Find an item",
    "stock                    - Display all stock",
    "format                   - Deletes all components with 0 stock",
    "help                     - Display this help information",
    "clear                    - Clears the terminal display",
    "exit                     - Exit the program",
];

pub fn banner() -> Vec<String> {
    vec![BANNER.to_string(), String::new()]
}

pub fn help() -> Vec<String> {
    let mut lines = vec![String::new(), "Available commands:".to_string()];
    lines.extend(HELP.iter().map(|line| line.to_string()));
    lines.push(String::new());
    lines
}

fn item_line(component: &Component) -> String {
    format!("Item: {} - Qty: {}", component.name, component.stock)
}

fn listing(items: &[Component], footer: &str) -> Vec<String> {
    let mut lines = vec![String::new(), SEPARATOR.to_string(), String::new()];
    lines.extend(items.iter().map(item_line));
    lines.push(String::new());
    lines.push(format!("{footer}: {}", items.len()));
    lines.push(String::new());
    lines
}

pub fn stock_report(report: &StockReport) -> Vec<String> {
    if report.items.is_empty() {
        return vec![
            String::new(),
            SEPARATOR.to_string(),
            String::new(),
            "There are no items in stock".to_string(),
            "Results: 0".to_string(),
            String::new(),
        ];
    }
    listing(&report.items, "Results")
}

pub fn find_outcome(outcome: &FindOutcome) -> Vec<String> {
    match outcome {
        FindOutcome::EmptyStore => {
            vec![String::new(), "There are no items in stock".to_string(), String::new()]
        }
        FindOutcome::Matches(items) => listing(items, "Results"),
    }
}

pub fn prune_outcome(outcome: &PruneOutcome) -> Vec<String> {
    match outcome {
        PruneOutcome::EmptyStore => {
            vec![String::new(), "There are no items to format".to_string(), String::new()]
        }
        PruneOutcome::NothingDeleted => vec![
            String::new(),
            SEPARATOR.to_string(),
            String::new(),
            "No items were deleted".to_string(),
            String::new(),
        ],
        PruneOutcome::Deleted(items) => listing(items, "Deleted"),
    }
}

pub fn stock_change(change: &StockChange) -> Vec<String> {
    let line = match change {
        StockChange::Adjusted { name, operation, quantity, stock } => format!(
            "Component {name} stock {} by {quantity} (now {stock})",
            operation.past_tense()
        ),
        StockChange::Created { name, quantity } => {
            format!("Component {name} added to stock with {quantity}")
        }
        StockChange::Cancelled => "No changes made".to_string(),
    };
    vec![line]
}
