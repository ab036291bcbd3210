//! Experience, levels, and skill-point spending.
//!
//! Level thresholds are linear on purpose: the next level always costs
//! `level * 100` total experience. Each level grants exactly one skill
//! point, and spending a point can never push a skill's base past its
//! governing attribute's current value.

use serde::{Deserialize, Serialize};

use iv_core::{CoreError, SkillRegistry};

use crate::error::{MechError, MechResult};

/// Experience required, as a cumulative total, to reach `level + 1`.
pub const XP_PER_LEVEL: u32 = 100;

/// A level-up event, emitted once per level gained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    /// The level that was reached.
    pub level: u32,
}

/// Character advancement state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    experience: u32,
    level: u32,
    skill_points: u32,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
            skill_points: 0,
        }
    }
}

impl Progression {
    /// Start at level 1 with no experience or points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total experience earned.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Current level. Always the largest level whose cumulative threshold
    /// the experience total has met.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Unspent skill points.
    pub fn skill_points(&self) -> u32 {
        self.skill_points
    }

    /// Add experience and apply any level-ups it pays for.
    ///
    /// Returns one [`LevelUp`] per level gained, in order, for UI layers
    /// to announce. The final level depends only on the experience total,
    /// not on how the amounts were chunked.
    pub fn add_experience(&mut self, amount: u32) -> Vec<LevelUp> {
        self.experience += amount;
        let mut gained = Vec::new();
        while self.experience >= self.level * XP_PER_LEVEL {
            self.level += 1;
            self.skill_points += 1;
            gained.push(LevelUp { level: self.level });
        }
        gained
    }

    /// Spend one skill point to raise a skill's base level by one.
    ///
    /// Returns the new base level. Fails when no points are unspent, when
    /// the base already equals the governing attribute's value, or when
    /// the skill is not in the catalog.
    pub fn spend_point(&mut self, registry: &mut SkillRegistry, skill: &str) -> MechResult<u32> {
        if self.skill_points == 0 {
            return Err(MechError::NoPointsAvailable);
        }
        let (base, attribute) = {
            let skill = registry
                .get_skill(skill)
                .ok_or_else(|| CoreError::UnknownSkill(skill.to_string()))?;
            (skill.base(), skill.attribute().to_string())
        };
        let cap = registry
            .get_attribute(&attribute)
            .ok_or(CoreError::UnknownAttribute(attribute))?
            .value();
        if base >= cap {
            return Err(MechError::SkillCapped {
                skill: skill.to_string(),
                cap,
            });
        }

        let new_base = registry.set_skill_base(skill, base + 1)?;
        self.skill_points -= 1;
        Ok(new_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iv_core::config::preset;

    fn test_registry() -> SkillRegistry {
        SkillRegistry::from_config(&preset::detective()).unwrap()
    }

    #[test]
    fn starts_at_level_one() {
        let p = Progression::new();
        assert_eq!(p.level(), 1);
        assert_eq!(p.experience(), 0);
        assert_eq!(p.skill_points(), 0);
    }

    #[test]
    fn add_250_reaches_level_3_with_2_points() {
        // Thresholds 100 and 200 are crossed; 300 is not.
        let mut p = Progression::new();
        let gained = p.add_experience(250);
        assert_eq!(p.level(), 3);
        assert_eq!(p.skill_points(), 2);
        assert_eq!(gained, vec![LevelUp { level: 2 }, LevelUp { level: 3 }]);
    }

    #[test]
    fn chunking_does_not_change_outcome() {
        let mut once = Progression::new();
        once.add_experience(250);

        let mut chunked = Progression::new();
        chunked.add_experience(100);
        chunked.add_experience(100);
        chunked.add_experience(50);

        assert_eq!(once, chunked);
    }

    #[test]
    fn zero_experience_grants_nothing() {
        let mut p = Progression::new();
        assert!(p.add_experience(0).is_empty());
        assert_eq!(p.level(), 1);
    }

    #[test]
    fn level_never_decreases() {
        let mut p = Progression::new();
        let mut last = p.level();
        for amount in [30, 0, 170, 5, 500] {
            p.add_experience(amount);
            assert!(p.level() >= last);
            last = p.level();
        }
    }

    #[test]
    fn spend_point_raises_base() {
        let mut registry = test_registry();
        let mut p = Progression::new();
        p.add_experience(100);
        assert_eq!(p.skill_points(), 1);

        // Lore starts at base 1; Reason is 3.
        let new_base = p.spend_point(&mut registry, "Lore").unwrap();
        assert_eq!(new_base, 2);
        assert_eq!(registry.get_skill("Lore").unwrap().base(), 2);
        assert_eq!(p.skill_points(), 0);
    }

    #[test]
    fn spend_point_without_points() {
        let mut registry = test_registry();
        let mut p = Progression::new();
        assert!(matches!(
            p.spend_point(&mut registry, "Lore"),
            Err(MechError::NoPointsAvailable)
        ));
    }

    #[test]
    fn spend_point_blocked_at_attribute_value() {
        let mut registry = test_registry();
        let mut p = Progression::new();
        p.add_experience(300); // 3 points

        // Body is 2; Grit starts at base 1.
        p.spend_point(&mut registry, "Grit").unwrap();
        let result = p.spend_point(&mut registry, "Grit");
        assert!(matches!(
            result,
            Err(MechError::SkillCapped { cap: 2, .. })
        ));
        assert_eq!(p.skill_points(), 2);

        // Raising the attribute unlocks further spending.
        registry.set_attribute_value("Body", 3).unwrap();
        assert_eq!(p.spend_point(&mut registry, "Grit").unwrap(), 3);
    }

    #[test]
    fn spend_point_unknown_skill() {
        let mut registry = test_registry();
        let mut p = Progression::new();
        p.add_experience(100);
        assert!(matches!(
            p.spend_point(&mut registry, "Gambling"),
            Err(MechError::Core(CoreError::UnknownSkill(_)))
        ));
        assert_eq!(p.skill_points(), 1);
    }

    #[test]
    fn round_trip_serde() {
        let mut p = Progression::new();
        p.add_experience(250);
        let json = serde_json::to_string(&p).unwrap();
        let back: Progression = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
