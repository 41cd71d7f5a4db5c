use crate::domain::Component;
use crate::ports::ComponentStore;

/// Every stored component, in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockReport {
    pub items: Vec<Component>,
}

pub fn execute<S: ComponentStore>(store: &S) -> StockReport {
    StockReport { items: store.load() }
}
