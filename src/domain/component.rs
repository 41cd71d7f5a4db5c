use serde::{Deserialize, Serialize};

/// Normalize a component name for storage and lookup.
///
/// Names are trimmed, inner whitespace runs collapse to a single space, and letters are
/// uppercased.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase()
}

/// A named inventory line item with its quantity on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub stock: u64,
}

impl Component {
    /// Create a component, normalizing the name.
    pub fn new(name: &str, stock: u64) -> Self {
        Self { name: normalize_name(name), stock }
    }

    /// Whether the component has nothing left on hand.
    pub fn is_depleted(&self) -> bool {
        self.stock == 0
    }
}
