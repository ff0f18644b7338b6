//! Infrastructure layer: item storage.

pub mod read_model;

pub use read_model::{InMemoryItemStore, ItemStore};
