//! CharacterSheet entity - the editable character record.
//!
//! Owns the ability scores, level, and skill sheet, and re-runs the
//! reconciliation engine whenever an upstream field changes. Mutators
//! report whether anything actually changed so the caller can skip
//! redundant persistence and UI notification; `updated_at` moves only on
//! real changes. The clock is injected (`now` parameter), never read
//! here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::game_systems::Dnd5eSystem;
use crate::ids::CharacterId;
use crate::value_objects::{Ability, AbilityScores, SkillName, SkillSheet, SkillState};

/// A player character's sheet as edited in the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    pub id: CharacterId,
    pub name: String,
    pub abilities: AbilityScores,
    pub level: i32,
    pub skills: SkillSheet,
    pub updated_at: DateTime<Utc>,
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let abilities = AbilityScores::new();
        let level = 1;
        let skills = SkillSheet::new().reconciled(&Dnd5eSystem, &abilities, level);
        Self {
            id: CharacterId::new(),
            name: name.into(),
            abilities,
            level,
            skills,
            updated_at: now,
        }
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self.skills = self
            .skills
            .reconciled(&Dnd5eSystem, &self.abilities, self.level);
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self.skills = self
            .skills
            .reconciled(&Dnd5eSystem, &self.abilities, self.level);
        self
    }

    /// Look up a single skill's state.
    pub fn skill(&self, skill: SkillName) -> Option<&SkillState> {
        self.skills.skill(skill)
    }

    /// Rename the character.
    pub fn rename(
        &mut self,
        name: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        self.name = name;
        self.updated_at = now;
        Ok(())
    }

    /// Set one ability score and recompute derived skill modifiers.
    ///
    /// Returns false (and touches nothing) when the score is unchanged.
    pub fn set_ability(&mut self, ability: Ability, score: i32, now: DateTime<Utc>) -> bool {
        if self.abilities.score(ability) == score {
            return false;
        }
        self.abilities.set_score(ability, score);
        self.reconcile(now);
        true
    }

    /// Set the character level and recompute derived skill modifiers.
    pub fn set_level(&mut self, level: i32, now: DateTime<Utc>) -> bool {
        if self.level == level {
            return false;
        }
        self.level = level;
        self.reconcile(now);
        true
    }

    /// Apply a direct edit of a skill's modifier field.
    pub fn edit_skill_modifier(
        &mut self,
        skill: SkillName,
        raw: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let next = self.skills.with_manual_edit(skill, raw);
        self.commit_skills(next, now)
    }

    /// Toggle a skill's proficiency checkbox.
    pub fn toggle_proficiency(&mut self, skill: SkillName, now: DateTime<Utc>) -> bool {
        let next = self.skills.with_proficiency_toggled(
            &Dnd5eSystem,
            skill,
            &self.abilities,
            self.level,
        );
        self.commit_skills(next, now)
    }

    fn reconcile(&mut self, now: DateTime<Utc>) {
        let next = self
            .skills
            .reconciled(&Dnd5eSystem, &self.abilities, self.level);
        if next != self.skills {
            self.skills = next;
        }
        self.updated_at = now;
    }

    fn commit_skills(&mut self, next: SkillSheet, now: DateTime<Utc>) -> bool {
        if next == self.skills {
            return false;
        }
        self.skills = next;
        self.updated_at = now;
        true
    }
}
