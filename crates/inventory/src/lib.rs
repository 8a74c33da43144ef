//! Inventory domain module.
//!
//! This crate contains the shelf-life rules for stocked items, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod inventory;
pub mod item;

pub use category::{AGED_BRIE, BACKSTAGE_PASSES, CONJURED, Category, SULFURAS};
pub use inventory::{Inventory, update_quality};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY};
