//! Per-side pool of unused items.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Item;

/// Items a side has not used yet.
///
/// Pools are tiny, so they live inline. Indices are positions in the
/// current listing and shift down when an earlier item is taken.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPool {
    items: SmallVec<[Item; 4]>,
}

impl ItemPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the item at `index` without removing it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate over remaining items in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Remove and return the item at `index`.
    ///
    /// Returns `None` if the index is out of range.
    pub fn take(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Add an item to the end of the pool.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }
}

impl FromIterator<Item> for ItemPool {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemPool {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
