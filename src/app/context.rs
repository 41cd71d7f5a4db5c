use crate::ports::{ComponentStore, Console, Operator};

/// Application context holding the ports a session runs against.
pub struct AppContext<S: ComponentStore, O: Operator, C: Console> {
    pub(crate) store: S,
    pub(crate) operator: O,
    pub(crate) console: C,
}

impl<S: ComponentStore, O: Operator, C: Console> AppContext<S, O, C> {
    /// Create a new application context.
    pub fn new(store: S, operator: O, console: C) -> Self {
        Self { store, operator, console }
    }

    /// Get a reference to the component store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the console.
    pub fn console(&self) -> &C {
        &self.console
    }
}
