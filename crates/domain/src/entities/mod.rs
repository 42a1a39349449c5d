//! Entities - objects with identity and a lifecycle

mod character_sheet;

pub use character_sheet::CharacterSheet;
