//! Game system traits for TTRPG-specific calculations.
//!
//! These traits define the interface for system-specific formulas,
//! allowing different game systems to implement their own rules while
//! sharing a common API.

/// Core trait all game systems must implement.
pub trait GameSystem: Send + Sync {
    /// Unique identifier for this game system (e.g., "dnd5e").
    fn system_id(&self) -> &str;

    /// Human-readable display name (e.g., "D&D 5th Edition").
    fn display_name(&self) -> &str;

    /// Get the calculation engine for this system.
    fn calculation_engine(&self) -> &dyn CalculationEngine;
}

/// Calculation rules that vary per game system.
///
/// Every operation is total: scores and levels outside the playable
/// range still produce a number. Partial input is the normal state of a
/// sheet mid-edit, and the editor must never crash on it.
pub trait CalculationEngine: Send + Sync {
    /// Calculate ability modifier from score.
    ///
    /// For D&D-like systems: floor((score - 10) / 2)
    fn ability_modifier(&self, score: i32) -> i32;

    /// Calculate proficiency bonus from character level.
    ///
    /// For D&D 5e: floor((level - 1) / 4) + 2. Level is signed so that
    /// non-positive input stays representable; the formula degrades
    /// gracefully rather than panicking.
    fn proficiency_bonus(&self, level: i32) -> i32;

    /// Calculate a skill check modifier from the governing ability score.
    fn skill_modifier(&self, score: i32, proficient: bool, level: i32) -> i32 {
        let modifier = self.ability_modifier(score);
        if proficient {
            modifier + self.proficiency_bonus(level)
        } else {
            modifier
        }
    }
}
