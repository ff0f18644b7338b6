//! `toolshop-core` — item catalog domain building blocks.
//!
//! This crate contains **pure domain** types (no storage, no HTTP).

pub mod age;
pub mod error;
pub mod id;
pub mod item;

pub use age::{FIXED_AGE, age, age_from_birthdate, parse_birthdate};
pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use item::Item;
