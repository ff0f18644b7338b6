//! Item storage abstractions.

pub mod item_store;
pub mod seed;

pub use item_store::{InMemoryItemStore, ItemStore};
