//! Ability value objects - the six D&D 5e ability scores.
//!
//! Provides type safety for ability references instead of using magic
//! strings like "STR", "DEX".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The six character abilities that govern skills and checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ability {
    /// Strength - physical power
    Str,
    /// Dexterity - agility and reflexes
    Dex,
    /// Constitution - endurance and health
    Con,
    /// Intelligence - reasoning and memory
    Int,
    /// Wisdom - perception and insight
    Wis,
    /// Charisma - force of personality
    Cha,
}

impl Ability {
    /// Returns the short uppercase string representation (e.g., "STR", "DEX").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Dex => "DEX",
            Self::Con => "CON",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength", "Dexterity").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Str => "Strength",
            Self::Dex => "Dexterity",
            Self::Con => "Constitution",
            Self::Int => "Intelligence",
            Self::Wis => "Wisdom",
            Self::Cha => "Charisma",
        }
    }

    /// Returns all six abilities in standard sheet order.
    pub fn all() -> [Ability; 6] {
        [
            Self::Str,
            Self::Dex,
            Self::Con,
            Self::Int,
            Self::Wis,
            Self::Cha,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Str),
            "DEX" | "DEXTERITY" => Ok(Self::Dex),
            "CON" | "CONSTITUTION" => Ok(Self::Con),
            "INT" | "INTELLIGENCE" => Ok(Self::Int),
            "WIS" | "WISDOM" => Ok(Self::Wis),
            "CHA" | "CHARISMA" => Ok(Self::Cha),
            _ => Err(DomainError::parse(format!("Unknown ability: {s}"))),
        }
    }
}

/// A character's six ability scores.
///
/// The sheet editor works with whatever the player has typed so far, so
/// every field defaults to 0 when absent from stored data. Range checks
/// ([1, 30]) are offered via [`AbilityScores::validate`] for the editing
/// surface to enforce; derivations never reject a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityScores {
    pub strength: i32,
    pub dexterity: i32,
    pub constitution: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, ability: Ability, value: i32) -> Self {
        self.set_score(ability, value);
        self
    }

    /// Get the score for an ability.
    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Str => self.strength,
            Ability::Dex => self.dexterity,
            Ability::Con => self.constitution,
            Ability::Int => self.intelligence,
            Ability::Wis => self.wisdom,
            Ability::Cha => self.charisma,
        }
    }

    /// Set the score for an ability.
    pub fn set_score(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Str => self.strength = value,
            Ability::Dex => self.dexterity = value,
            Ability::Con => self.constitution = value,
            Ability::Int => self.intelligence = value,
            Ability::Wis => self.wisdom = value,
            Ability::Cha => self.charisma = value,
        }
    }

    /// Check every score against the playable [1, 30] range.
    ///
    /// The editing surface calls this before submitting a sheet; the
    /// derivation engine does not.
    pub fn validate(&self) -> Result<(), DomainError> {
        for ability in Ability::all() {
            let score = self.score(ability);
            if !(1..=30).contains(&score) {
                return Err(DomainError::validation(format!(
                    "{} must be between 1 and 30, got {score}",
                    ability.display_name()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ability_as_str_and_display() {
        assert_eq!(Ability::Str.as_str(), "STR");
        assert_eq!(Ability::Cha.as_str(), "CHA");
        assert_eq!(format!("{}", Ability::Dex), "DEX");
        assert_eq!(Ability::Wis.display_name(), "Wisdom");
    }

    #[test]
    fn ability_from_str_accepts_short_and_long_forms() {
        assert_eq!(Ability::from_str("STR"), Ok(Ability::Str));
        assert_eq!(Ability::from_str("str"), Ok(Ability::Str));
        assert_eq!(Ability::from_str("Dexterity"), Ok(Ability::Dex));
        assert!(Ability::from_str("LUCK").is_err());
    }

    #[test]
    fn ability_serde_roundtrip() {
        let json = serde_json::to_string(&Ability::Int).expect("serialize");
        assert_eq!(json, "\"INT\"");
        let parsed: Ability = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, Ability::Int);
    }

    #[test]
    fn scores_get_and_set_by_ability() {
        let mut scores = AbilityScores::new().with_score(Ability::Dex, 14);
        assert_eq!(scores.score(Ability::Dex), 14);
        assert_eq!(scores.score(Ability::Str), 0);

        scores.set_score(Ability::Str, 16);
        assert_eq!(scores.strength, 16);
    }

    #[test]
    fn scores_missing_fields_deserialize_to_zero() {
        let scores: AbilityScores =
            serde_json::from_str(r#"{"dexterity":14,"wisdom":12}"#).expect("deserialize");
        assert_eq!(scores.dexterity, 14);
        assert_eq!(scores.wisdom, 12);
        assert_eq!(scores.strength, 0);
        assert_eq!(scores.charisma, 0);
    }

    #[test]
    fn scores_serde_uses_camel_case_names() {
        let scores = AbilityScores::new().with_score(Ability::Con, 13);
        let json = serde_json::to_string(&scores).expect("serialize");
        assert!(json.contains("\"constitution\":13"));
    }

    #[test]
    fn validate_accepts_playable_range() {
        let mut scores = AbilityScores::new();
        for ability in Ability::all() {
            scores.set_score(ability, 10);
        }
        assert!(scores.validate().is_ok());

        scores.set_score(Ability::Str, 30);
        scores.set_score(Ability::Cha, 1);
        assert!(scores.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        let mut scores = AbilityScores::new();
        for ability in Ability::all() {
            scores.set_score(ability, 10);
        }
        scores.set_score(Ability::Wis, 31);
        let err = scores.validate().expect_err("31 is out of range");
        assert!(err.to_string().contains("Wisdom"));

        // Default (all zero) fails too - zero is below the playable floor
        assert!(AbilityScores::new().validate().is_err());
    }
}
