//! Game system rules for TTRPG-specific mechanics.
//!
//! The traits in `traits.rs` define the seam between the character sheet
//! and the mathematical rules of a particular game system; `dnd5e.rs`
//! implements them for D&D 5th Edition, the system Lorebound ships with.

mod dnd5e;
mod traits;

pub use dnd5e::Dnd5eSystem;
pub use traits::{CalculationEngine, GameSystem};
