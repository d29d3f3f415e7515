//! Inventory aging engine.
//!
//! Every item category ages by its own rule once per simulated day. This crate
//! contains those rules, the name-based dispatch that picks a category, and the
//! inventory that ticks a whole shelf. Pure in-memory logic (no IO, no storage).

pub mod factory;
pub mod inventory;
pub mod item;
pub mod kind;
pub mod record;

pub use factory::ItemFactory;
pub use inventory::Inventory;
pub use item::Item;
pub use kind::ItemKind;
pub use record::ItemRecord;

pub use gildedrose_core::{Quality, SellIn};
