//! SkillSheet, SkillState, and ManualOverrides - derived skill tracking.
//!
//! A skill's displayed modifier is normally derived (governing ability
//! modifier, plus proficiency bonus when proficient), but the player can
//! type a value directly into the sheet. Such manual overrides must
//! survive recomputation triggered by ability or level edits; only
//! toggling that skill's proficiency discards the override and returns
//! the skill to derived tracking.
//!
//! All operations here are pure: they take the current sheet and return
//! a new one. The caller owns persistence and change notification.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::game_systems::CalculationEngine;
use crate::value_objects::{AbilityScores, SkillName};

/// Per-skill state as displayed and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillState {
    pub skill: SkillName,
    /// The displayed modifier. Derived unless the skill is overridden.
    pub modifier: i32,
    pub proficient: bool,
}

/// The set of skills whose modifier was last set by direct player edit.
///
/// Skills in this set keep their typed value through recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManualOverrides {
    skills: HashSet<SkillName>,
}

impl ManualOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, skill: SkillName) -> bool {
        self.skills.contains(&skill)
    }

    pub fn insert(&mut self, skill: SkillName) -> bool {
        self.skills.insert(skill)
    }

    pub fn remove(&mut self, skill: SkillName) -> bool {
        self.skills.remove(&skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// A character's full skill list plus its override bookkeeping.
///
/// This is an immutable value object. Operations consume `&self` and
/// return a reconciled copy; calling [`SkillSheet::reconciled`] twice
/// with the same inputs yields an identical sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSheet {
    skills: Vec<SkillState>,
    #[serde(default)]
    overrides: ManualOverrides,
}

impl SkillSheet {
    /// An empty sheet. Entries appear on first reconcile or first edit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct from storage (character-record hydration).
    pub fn from_parts(skills: Vec<SkillState>, overrides: ManualOverrides) -> Self {
        Self { skills, overrides }
    }

    /// All entries currently on the sheet.
    pub fn skills(&self) -> &[SkillState] {
        &self.skills
    }

    /// The override set (immutable view).
    pub fn overrides(&self) -> &ManualOverrides {
        &self.overrides
    }

    /// Look up a single skill's state.
    pub fn skill(&self, skill: SkillName) -> Option<&SkillState> {
        self.skills.iter().find(|s| s.skill == skill)
    }

    /// Whether a skill's modifier was last set by direct player edit.
    pub fn is_overridden(&self, skill: SkillName) -> bool {
        self.overrides.contains(skill)
    }

    /// Recompute every derived modifier against the current abilities
    /// and level.
    ///
    /// Runs over the full 18-skill catalog in sheet order:
    /// - overridden entries are carried unchanged;
    /// - everything else (including skills missing from the sheet, which
    ///   appear with `proficient = false`) gets a freshly derived
    ///   modifier.
    pub fn reconciled(
        &self,
        system: &dyn CalculationEngine,
        abilities: &AbilityScores,
        level: i32,
    ) -> Self {
        let skills = SkillName::all()
            .into_iter()
            .map(|name| {
                let existing = self.skill(name);
                match existing {
                    Some(state) if self.overrides.contains(name) => state.clone(),
                    _ => {
                        let proficient = existing.map(|s| s.proficient).unwrap_or(false);
                        SkillState {
                            skill: name,
                            modifier: system.skill_modifier(
                                abilities.score(name.ability()),
                                proficient,
                                level,
                            ),
                            proficient,
                        }
                    }
                }
            })
            .collect();
        Self {
            skills,
            overrides: self.overrides.clone(),
        }
    }

    /// Apply a direct player edit of a skill's modifier.
    ///
    /// `raw` is free-form input from the sheet field; it parses like the
    /// displayed form ("+3", "-1", "7") and anything unparsable becomes
    /// 0. The skill is marked overridden and keeps this value through
    /// later reconciles. Proficiency is untouched.
    pub fn with_manual_edit(&self, skill: SkillName, raw: &str) -> Self {
        let mut next = self.clone();
        let modifier = parse_modifier_input(raw);
        match next.skills.iter_mut().find(|s| s.skill == skill) {
            Some(state) => state.modifier = modifier,
            None => next.skills.push(SkillState {
                skill,
                modifier,
                proficient: false,
            }),
        }
        next.overrides.insert(skill);
        next
    }

    /// Flip a skill's proficiency and rederive its modifier.
    ///
    /// Toggling always wins over a manual override: the skill leaves the
    /// override set and returns to derived tracking.
    pub fn with_proficiency_toggled(
        &self,
        system: &dyn CalculationEngine,
        skill: SkillName,
        abilities: &AbilityScores,
        level: i32,
    ) -> Self {
        let mut next = self.clone();
        let was_proficient = next
            .skill(skill)
            .map(|s| s.proficient)
            .unwrap_or(false);
        let proficient = !was_proficient;
        let modifier = system.skill_modifier(abilities.score(skill.ability()), proficient, level);
        match next.skills.iter_mut().find(|s| s.skill == skill) {
            Some(state) => {
                state.proficient = proficient;
                state.modifier = modifier;
            }
            None => next.skills.push(SkillState {
                skill,
                modifier,
                proficient,
            }),
        }
        next.overrides.remove(skill);
        next
    }
}

/// Parse free-form modifier input from the sheet.
///
/// Strips any "+" characters, trims whitespace, and parses as an
/// integer; anything else (empty field, stray text) becomes 0. Never
/// fails - the sheet is routinely half-typed.
pub fn parse_modifier_input(raw: &str) -> i32 {
    raw.replace('+', "").trim().parse().unwrap_or(0)
}

/// Format a modifier for display: "+" prefix for non-negative values.
pub fn format_modifier(value: i32) -> String {
    if value >= 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_systems::Dnd5eSystem;
    use crate::value_objects::Ability;

    fn test_abilities() -> AbilityScores {
        AbilityScores::new()
            .with_score(Ability::Str, 16)
            .with_score(Ability::Dex, 14)
            .with_score(Ability::Con, 13)
            .with_score(Ability::Int, 12)
            .with_score(Ability::Wis, 10)
            .with_score(Ability::Cha, 8)
    }

    #[test]
    fn reconcile_covers_the_full_catalog_from_empty() {
        let sheet = SkillSheet::new().reconciled(&Dnd5eSystem, &test_abilities(), 1);
        assert_eq!(sheet.skills().len(), 18);
        // Catalog order, nothing proficient, nothing overridden
        assert_eq!(sheet.skills()[0].skill, SkillName::Acrobatics);
        assert!(sheet.skills().iter().all(|s| !s.proficient));
        assert!(sheet.overrides().is_empty());
    }

    #[test]
    fn reconcile_derives_from_governing_ability() {
        let sheet = SkillSheet::new().reconciled(&Dnd5eSystem, &test_abilities(), 1);
        // STR 16 -> +3, DEX 14 -> +2, CHA 8 -> -1
        assert_eq!(sheet.skill(SkillName::Athletics).map(|s| s.modifier), Some(3));
        assert_eq!(sheet.skill(SkillName::Stealth).map(|s| s.modifier), Some(2));
        assert_eq!(sheet.skill(SkillName::Deception).map(|s| s.modifier), Some(-1));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let abilities = test_abilities();
        let once = SkillSheet::new()
            .with_manual_edit(SkillName::Stealth, "+9")
            .with_proficiency_toggled(&Dnd5eSystem, SkillName::Athletics, &abilities, 5)
            .reconciled(&Dnd5eSystem, &abilities, 5);
        let twice = once.reconciled(&Dnd5eSystem, &abilities, 5);
        assert_eq!(once, twice);
    }

    #[test]
    fn manual_override_survives_ability_change() {
        let mut abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 1)
            .with_manual_edit(SkillName::Stealth, "+9");
        assert!(sheet.is_overridden(SkillName::Stealth));

        // DEX jumps; every derived DEX skill moves, Stealth keeps 9
        abilities.set_score(Ability::Dex, 20);
        let sheet = sheet.reconciled(&Dnd5eSystem, &abilities, 1);
        assert_eq!(sheet.skill(SkillName::Stealth).map(|s| s.modifier), Some(9));
        assert_eq!(sheet.skill(SkillName::Acrobatics).map(|s| s.modifier), Some(5));
    }

    #[test]
    fn proficiency_toggle_clears_override_and_rederives() {
        let abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 5)
            .with_manual_edit(SkillName::Stealth, "+9")
            .with_proficiency_toggled(&Dnd5eSystem, SkillName::Stealth, &abilities, 5);

        // DEX 14 (+2) with proficiency (+3 at level 5), not the typed 9
        let stealth = sheet.skill(SkillName::Stealth).expect("stealth present");
        assert!(stealth.proficient);
        assert_eq!(stealth.modifier, 5);
        assert!(!sheet.is_overridden(SkillName::Stealth));
    }

    #[test]
    fn proficiency_toggle_off_drops_the_bonus() {
        // DEX 14 at level 5, Acrobatics proficient: +2 + 3 = 5
        let abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 5)
            .with_proficiency_toggled(&Dnd5eSystem, SkillName::Acrobatics, &abilities, 5);
        assert_eq!(sheet.skill(SkillName::Acrobatics).map(|s| s.modifier), Some(5));

        let sheet = sheet.with_proficiency_toggled(&Dnd5eSystem, SkillName::Acrobatics, &abilities, 5);
        let acrobatics = sheet.skill(SkillName::Acrobatics).expect("present");
        assert!(!acrobatics.proficient);
        assert_eq!(acrobatics.modifier, 2);
    }

    #[test]
    fn manual_edit_parses_free_form_input() {
        let sheet = SkillSheet::new();
        let cases = [("+3", 3), ("-1", -1), ("7", 7), ("", 0), ("abc", 0), (" +12 ", 12)];
        for (raw, expected) in cases {
            let edited = sheet.with_manual_edit(SkillName::Insight, raw);
            assert_eq!(
                edited.skill(SkillName::Insight).map(|s| s.modifier),
                Some(expected),
                "input {raw:?}"
            );
            assert!(edited.is_overridden(SkillName::Insight));
        }
    }

    #[test]
    fn manual_edit_creates_missing_entry_lazily() {
        let sheet = SkillSheet::new().with_manual_edit(SkillName::Arcana, "+4");
        let arcana = sheet.skill(SkillName::Arcana).expect("created on edit");
        assert_eq!(arcana.modifier, 4);
        assert!(!arcana.proficient);
    }

    #[test]
    fn manual_edit_leaves_proficiency_untouched() {
        let abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 1)
            .with_proficiency_toggled(&Dnd5eSystem, SkillName::Survival, &abilities, 1)
            .with_manual_edit(SkillName::Survival, "+8");
        let survival = sheet.skill(SkillName::Survival).expect("present");
        assert!(survival.proficient);
        assert_eq!(survival.modifier, 8);
    }

    #[test]
    fn toggle_on_a_missing_skill_creates_it_proficient() {
        let abilities = test_abilities();
        let sheet = SkillSheet::new().with_proficiency_toggled(
            &Dnd5eSystem,
            SkillName::Perception,
            &abilities,
            1,
        );
        let perception = sheet.skill(SkillName::Perception).expect("created on toggle");
        assert!(perception.proficient);
        // WIS 10 (+0) + proficiency (+2)
        assert_eq!(perception.modifier, 2);
    }

    #[test]
    fn level_change_moves_proficient_skills_only() {
        let abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 4)
            .with_proficiency_toggled(&Dnd5eSystem, SkillName::Athletics, &abilities, 4);
        // Level 4 -> 5 crosses a proficiency step
        let sheet = sheet.reconciled(&Dnd5eSystem, &abilities, 5);
        assert_eq!(sheet.skill(SkillName::Athletics).map(|s| s.modifier), Some(6));
        assert_eq!(sheet.skill(SkillName::Stealth).map(|s| s.modifier), Some(2));
    }

    #[test]
    fn parse_modifier_input_is_total() {
        assert_eq!(parse_modifier_input("+3"), 3);
        assert_eq!(parse_modifier_input("-1"), -1);
        assert_eq!(parse_modifier_input("7"), 7);
        assert_eq!(parse_modifier_input(""), 0);
        assert_eq!(parse_modifier_input("abc"), 0);
        assert_eq!(parse_modifier_input("  +9"), 9);
    }

    #[test]
    fn format_modifier_sign_convention() {
        assert_eq!(format_modifier(3), "+3");
        assert_eq!(format_modifier(0), "+0");
        assert_eq!(format_modifier(-1), "-1");
    }

    #[test]
    fn sheet_serde_roundtrip_keeps_overrides() {
        let abilities = test_abilities();
        let sheet = SkillSheet::new()
            .reconciled(&Dnd5eSystem, &abilities, 3)
            .with_manual_edit(SkillName::History, "+6");
        let json = serde_json::to_string(&sheet).expect("serialize");
        assert!(json.contains("\"History\""));
        let parsed: SkillSheet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, sheet);
        assert!(parsed.is_overridden(SkillName::History));
    }

    #[test]
    fn sheet_deserializes_without_overrides_field() {
        // Older stored records predate override tracking
        let json = r#"{"skills":[{"skill":"Stealth","modifier":2,"proficient":false}]}"#;
        let parsed: SkillSheet = serde_json::from_str(json).expect("deserialize");
        assert!(parsed.overrides().is_empty());
        assert_eq!(parsed.skill(SkillName::Stealth).map(|s| s.modifier), Some(2));
    }
}
