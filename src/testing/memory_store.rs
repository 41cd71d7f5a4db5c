use std::cell::RefCell;

use crate::domain::{AppError, Component};
use crate::ports::ComponentStore;

/// In-memory inventory for testing.
#[derive(Default)]
pub struct MemoryStore {
    components: RefCell<Vec<Component>>,
    saves: RefCell<usize>,
    loads: RefCell<usize>,
    should_fail: RefCell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(components: Vec<Component>) -> Self {
        Self { components: RefCell::new(components), ..Self::default() }
    }

    pub fn snapshot(&self) -> Vec<Component> {
        self.components.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    pub fn load_count(&self) -> usize {
        *self.loads.borrow()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn stock_of(&self, name: &str) -> Option<u64> {
        self.components.borrow().iter().find(|c| c.name == name).map(|c| c.stock)
    }
}

impl ComponentStore for MemoryStore {
    fn load(&self) -> Vec<Component> {
        *self.loads.borrow_mut() += 1;
        self.snapshot()
    }

    fn save(&self, components: &[Component]) -> Result<(), AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::Io(std::io::Error::other("Mock store error")));
        }
        *self.components.borrow_mut() = components.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
