//! Applies a validated stock delta to one component.

use crate::domain::{AppError, Component, StockOperation, matcher, normalize_name};
use crate::ports::ComponentStore;

use super::change::StockChange;

/// Apply `operation` with `quantity` to the component named `name` and persist the result.
///
/// `quantity` is expected to be positive already; only sufficiency is checked for removal.
/// Nothing is saved when the change is rejected.
pub fn apply<S: ComponentStore>(
    store: &S,
    name: &str,
    operation: StockOperation,
    quantity: u64,
) -> Result<StockChange, AppError> {
    apply_to(store, store.load(), name, operation, quantity)
}

/// Same as [`apply`], working on a snapshot the caller already loaded from `store`.
///
/// The changed record is rewritten under its normalized name.
pub fn apply_to<S: ComponentStore>(
    store: &S,
    mut components: Vec<Component>,
    name: &str,
    operation: StockOperation,
    quantity: u64,
) -> Result<StockChange, AppError> {
    let name = normalize_name(name);
    let index = matcher::find_exact(&components, &name);

    let change = match (operation, index) {
        (StockOperation::Add, Some(i)) => {
            let component = &mut components[i];
            component.stock = component.stock.checked_add(quantity).ok_or_else(|| {
                AppError::InvalidQuantity(format!("{quantity} (stock of {name} would overflow)"))
            })?;
            component.name.clone_from(&name);
            StockChange::Adjusted { name, operation, quantity, stock: component.stock }
        }
        (StockOperation::Add, None) => {
            components.push(Component { name: name.clone(), stock: quantity });
            StockChange::Created { name, quantity }
        }
        (StockOperation::Remove, None) => return Err(AppError::UnknownComponent(name)),
        (StockOperation::Remove, Some(i)) => {
            let component = &mut components[i];
            if component.stock < quantity {
                return Err(AppError::InsufficientStock {
                    name,
                    available: component.stock,
                    requested: quantity,
                });
            }
            component.stock -= quantity;
            component.name.clone_from(&name);
            StockChange::Adjusted { name, operation, quantity, stock: component.stock }
        }
    };

    store.save(&components)?;
    tracing::info!(
        component = %change.name().unwrap_or_default(),
        %operation,
        quantity,
        "stock updated"
    );
    Ok(change)
}
