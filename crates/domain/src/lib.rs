//! Lorebound domain layer.
//!
//! Pure types and rules for the character sheet editor: ability scores,
//! the D&D 5e skill catalog, and the reconciliation engine that keeps
//! derived skill modifiers consistent with ability/level edits while
//! preserving values the player typed in by hand.
//!
//! This crate owns no I/O, no clock, and no reactivity. Callers (the UI
//! layer and the character-record API adapter) pass state in and persist
//! what comes back.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod ids;
pub mod value_objects;

pub use entities::CharacterSheet;
pub use error::DomainError;
pub use game_systems::{CalculationEngine, Dnd5eSystem, GameSystem};
pub use ids::CharacterId;
pub use value_objects::{
    format_modifier, parse_modifier_input, Ability, AbilityScores, ManualOverrides, SkillName,
    SkillSheet, SkillState,
};
