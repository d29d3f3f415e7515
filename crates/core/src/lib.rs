//! `gildedrose-core` — value objects shared by the aging engine.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod quality;
pub mod sell_in;

pub use error::{DomainError, DomainResult};
pub use quality::Quality;
pub use sell_in::SellIn;
