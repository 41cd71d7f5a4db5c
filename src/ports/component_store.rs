use crate::domain::{AppError, Component};

/// Port for the persisted component list.
///
/// The whole list is read and rewritten on every operation. There is no locking: two
/// processes saving the same store race and the last save wins.
pub trait ComponentStore {
    /// Latest snapshot of the inventory, in insertion order.
    ///
    /// A missing, unreadable or malformed store yields an empty list rather than an error.
    fn load(&self) -> Vec<Component>;

    /// Replace the persisted inventory with `components`.
    fn save(&self, components: &[Component]) -> Result<(), AppError>;
}
