//! Single-use roll modifiers.
//!
//! An `Item` carries a name, a description and an `ItemEffect` that
//! transforms a raw die value into the value used for comparison.
//! Each side holds its own `ItemPool`; taking an item out of the pool
//! is what makes it single-use.

mod item;
mod pool;

pub use item::{standard_items, Item, ItemEffect};
pub use pool::ItemPool;
