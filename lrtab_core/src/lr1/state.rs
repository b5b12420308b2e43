use crate::{Item, ItemSet};

/// A state of the LR(1) automaton
///
/// States are identified by their kernel together with their closed item set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub id: usize,
    /// The seed item this state was generated from
    pub kernel: Item,
    pub items: ItemSet,
}

impl State {
    /// Whether `kernel` and `items` describe this state
    pub fn is_same(&self, kernel: &Item, items: &ItemSet) -> bool {
        self.kernel == *kernel && self.items == *items
    }
}
