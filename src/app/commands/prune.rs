use crate::domain::{AppError, Component};
use crate::ports::ComponentStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// Nothing is stored at all.
    EmptyStore,
    /// No component was at zero stock; the store was not rewritten.
    NothingDeleted,
    /// These zero-stock components were removed.
    Deleted(Vec<Component>),
}

/// Remove every component with zero stock, keeping the rest in order.
pub fn execute<S: ComponentStore>(store: &S) -> Result<PruneOutcome, AppError> {
    let components = store.load();
    if components.is_empty() {
        return Ok(PruneOutcome::EmptyStore);
    }

    let (deleted, kept): (Vec<Component>, Vec<Component>) =
        components.into_iter().partition(Component::is_depleted);
    if deleted.is_empty() {
        return Ok(PruneOutcome::NothingDeleted);
    }

    store.save(&kept)?;
    tracing::info!(deleted = deleted.len(), remaining = kept.len(), "pruned empty components");
    Ok(PruneOutcome::Deleted(deleted))
}
