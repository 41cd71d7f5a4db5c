//! Turns a name with no exact match into a single target, asking the operator when needed.
//!
//! The candidate set is every stored name containing the typed name:
//! - none: `add` creates the typed name, `remove` fails with `UnknownComponent`;
//! - one: the operator confirms "did you mean X?";
//! - several: the operator picks one, and `add` also offers to create the typed name.

use crate::domain::{AppError, Component, StockOperation, matcher, normalize_name};
use crate::ports::Operator;

/// Outcome of resolving a typed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Apply the change to this stored component.
    Existing(String),
    /// Create a new component with the typed name.
    New(String),
    /// The operator declined or cancelled; nothing changes.
    Declined,
}

/// Label of the synthetic choice that creates the typed name as a new item.
pub fn add_as_new_label(name: &str) -> String {
    format!("Add \"{name}\" as new item")
}

/// Resolve `name`, which is assumed to have no exact match in `components`.
pub fn resolve<O: Operator>(
    components: &[Component],
    operator: &mut O,
    name: &str,
    operation: StockOperation,
) -> Result<Resolution, AppError> {
    let name = normalize_name(name);
    let candidates: Vec<String> =
        matcher::find_similar(components, &name).into_iter().map(|c| c.name.clone()).collect();

    tracing::debug!(query = %name, candidates = candidates.len(), "resolving component name");

    match candidates.as_slice() {
        [] => match operation {
            StockOperation::Add => Ok(Resolution::New(name)),
            StockOperation::Remove => Err(AppError::UnknownComponent(name)),
        },
        [only] => {
            if operator.confirm(&format!("Did you mean {only}?"))? {
                Ok(Resolution::Existing(only.clone()))
            } else {
                Ok(Resolution::Declined)
            }
        }
        _ => {
            let offers_new = operation == StockOperation::Add;
            let mut items = Vec::with_capacity(candidates.len() + 1);
            if offers_new {
                items.push(add_as_new_label(&name));
            }
            items.extend(candidates.iter().cloned());

            let prompt = format!("Several items match {name}. Which one did you mean?");
            let Some(choice) = operator.select(&prompt, &items)? else {
                return Ok(Resolution::Declined);
            };

            if offers_new && choice == 0 {
                return Ok(Resolution::New(name));
            }
            let index = if offers_new { choice - 1 } else { choice };
            Ok(candidates.get(index).cloned().map_or(Resolution::Declined, Resolution::Existing))
        }
    }
}
