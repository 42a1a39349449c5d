//! D&D 5th Edition game system implementation.

use super::traits::{CalculationEngine, GameSystem};

/// D&D 5th Edition game system.
#[derive(Debug, Clone, Copy)]
pub struct Dnd5eSystem;

impl Default for Dnd5eSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Dnd5eSystem {
    /// Create a new D&D 5e system instance.
    pub fn new() -> Self {
        Self
    }
}

impl GameSystem for Dnd5eSystem {
    fn system_id(&self) -> &str {
        "dnd5e"
    }

    fn display_name(&self) -> &str {
        "D&D 5th Edition"
    }

    fn calculation_engine(&self) -> &dyn CalculationEngine {
        self
    }
}

impl CalculationEngine for Dnd5eSystem {
    fn ability_modifier(&self, score: i32) -> i32 {
        // D&D rounds down; Rust's / truncates toward zero, so use
        // euclidean division for proper floor behavior below 10
        (score - 10).div_euclid(2)
    }

    fn proficiency_bonus(&self, level: i32) -> i32 {
        (level - 1).div_euclid(4) + 2
    }
}
