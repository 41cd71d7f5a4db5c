use crate::domain::{AppError, StockOperation, matcher, normalize_name};
use crate::ports::{ComponentStore, Operator};

use super::mutate;
use super::resolve::{self, Resolution};

/// Result of an `add`/`remove` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockChange {
    /// An existing component's stock moved by `quantity`, ending at `stock`.
    Adjusted { name: String, operation: StockOperation, quantity: u64, stock: u64 },
    /// A new component was created with `quantity` on hand.
    Created { name: String, quantity: u64 },
    /// The operator backed out during disambiguation.
    Cancelled,
}

impl StockChange {
    pub fn name(&self) -> Option<&str> {
        match self {
            StockChange::Adjusted { name, .. } | StockChange::Created { name, .. } => Some(name),
            StockChange::Cancelled => None,
        }
    }
}

/// Execute an `add`/`remove` command.
///
/// An exact name match is changed directly; otherwise the name is resolved against similar
/// stored names first.
pub fn execute<S, O>(
    store: &S,
    operator: &mut O,
    operation: StockOperation,
    quantity: u64,
    name: &str,
) -> Result<StockChange, AppError>
where
    S: ComponentStore,
    O: Operator,
{
    let name = normalize_name(name);
    let components = store.load();
    if matcher::find_exact(&components, &name).is_some() {
        return mutate::apply_to(store, components, &name, operation, quantity);
    }

    match resolve::resolve(&components, operator, &name, operation)? {
        Resolution::Existing(target) | Resolution::New(target) => {
            mutate::apply_to(store, components, &target, operation, quantity)
        }
        Resolution::Declined => Ok(StockChange::Cancelled),
    }
}
