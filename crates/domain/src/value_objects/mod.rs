//! Value objects - Immutable objects defined by their attributes

mod ability;
mod skill;
mod skill_sheet;

pub use ability::{Ability, AbilityScores};
pub use skill::SkillName;
pub use skill_sheet::{
    format_modifier, parse_modifier_input, ManualOverrides, SkillSheet, SkillState,
};
