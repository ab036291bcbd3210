//! The registry owning attributes and skills.
//!
//! One registry per session. It is the sole mutation surface for attribute
//! values and skill state, and the only place an effective level is ever
//! computed, always from current state, never cached.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;
use crate::config::RegistryConfig;
use crate::effect::NarrativeEffect;
use crate::error::{CoreError, CoreResult};
use crate::skill::Skill;

/// Owns the fixed catalog of attributes and skills for one session.
///
/// Attributes and skills keep their catalog order; the voice engine relies
/// on that for a deterministic evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRegistry {
    attributes: Vec<Attribute>,
    skills: Vec<Skill>,
    flavor: HashMap<String, Vec<String>>,
}

impl SkillRegistry {
    /// Build a registry from an explicit catalog configuration.
    ///
    /// Fails if two attributes or two skills share a name.
    pub fn from_config(config: &RegistryConfig) -> CoreResult<Self> {
        let mut attributes: Vec<Attribute> = Vec::new();
        let mut skills: Vec<Skill> = Vec::new();
        let mut flavor = HashMap::new();

        for attr_config in &config.attributes {
            if attributes.iter().any(|a| a.name() == attr_config.name) {
                return Err(CoreError::DuplicateCatalogName(attr_config.name.clone()));
            }
            attributes.push(Attribute::new(
                &attr_config.name,
                &attr_config.color,
                attr_config.value,
                attr_config.cap,
            ));

            for skill_config in &attr_config.skills {
                if skills.iter().any(|s| s.name() == skill_config.name) {
                    return Err(CoreError::DuplicateCatalogName(skill_config.name.clone()));
                }
                skills.push(Skill::new(
                    &skill_config.name,
                    &attr_config.name,
                    skill_config.base,
                ));
                if !skill_config.flavor.is_empty() {
                    flavor.insert(skill_config.name.clone(), skill_config.flavor.clone());
                }
            }
        }

        Ok(Self {
            attributes,
            skills,
            flavor,
        })
    }

    /// All attributes in catalog order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// All skills in catalog order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Look up an attribute by name.
    pub fn get_attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name() == name)
    }

    /// Look up a skill by name.
    pub fn get_skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name() == name)
    }

    /// Set an attribute's value, clamped into `[1, cap]`.
    ///
    /// Returns the stored value. Every governed skill sees its effective
    /// ceiling change on next read; nothing is propagated because effective
    /// levels are always recomputed.
    pub fn set_attribute_value(&mut self, name: &str, value: u32) -> CoreResult<u32> {
        let attribute = self
            .attributes
            .iter_mut()
            .find(|a| a.name() == name)
            .ok_or_else(|| CoreError::UnknownAttribute(name.to_string()))?;
        Ok(attribute.set_value(value))
    }

    /// Set a skill's base level. Returns the new base.
    pub fn set_skill_base(&mut self, name: &str, base: u32) -> CoreResult<u32> {
        self.skill_mut(name)?.set_base(base);
        Ok(base)
    }

    /// Set a named modifier on a skill. A delta of 0 removes the source.
    pub fn set_modifier(&mut self, skill: &str, source: &str, delta: i32) -> CoreResult<()> {
        self.skill_mut(skill)?.set_modifier(source, delta);
        Ok(())
    }

    /// Set a skill's confidence, clamped into `[-2, 2]`. Returns the stored value.
    pub fn set_confidence(&mut self, skill: &str, value: i32) -> CoreResult<i32> {
        Ok(self.skill_mut(skill)?.set_confidence(value))
    }

    /// Silence a skill's voice until the given time.
    pub fn suppress_skill(&mut self, skill: &str, until: DateTime<Utc>) -> CoreResult<()> {
        self.skill_mut(skill)?.suppress_until(until);
        Ok(())
    }

    /// Record the outcome of a prediction a skill made.
    pub fn record_prediction(&mut self, skill: &str, correct: bool) -> CoreResult<()> {
        self.skill_mut(skill)?.record_prediction(correct);
        Ok(())
    }

    /// Compute a skill's effective level right now.
    ///
    /// `clamp(base + modifiers + confidence, 0, attribute value)`, derived
    /// entirely from current state on every call. Returns `None` if the
    /// skill does not exist.
    pub fn effective_level(&self, name: &str) -> Option<u32> {
        let skill = self.get_skill(name)?;
        let ceiling = self
            .get_attribute(skill.attribute())
            .map_or(0, Attribute::value);
        let raw = skill.base() as i32 + skill.modifier_sum() + skill.confidence();
        Some(raw.clamp(0, ceiling as i32) as u32)
    }

    /// Flavor lines configured for a skill, if any.
    pub fn flavor_lines(&self, skill: &str) -> &[String] {
        self.flavor.get(skill).map_or(&[], Vec::as_slice)
    }

    /// Apply a content-defined narrative effect.
    pub fn apply_effect(&mut self, effect: &NarrativeEffect) -> CoreResult<()> {
        match effect {
            NarrativeEffect::ItemBonus { item, skill, delta } => {
                self.set_modifier(skill, &format!("item:{item}"), *delta)
            }
            NarrativeEffect::Theory {
                theory,
                skill,
                delta,
            } => self.set_modifier(skill, &format!("theory:{theory}"), *delta),
            NarrativeEffect::Condition {
                condition,
                skill,
                delta,
            } => self.set_modifier(skill, &format!("condition:{condition}"), *delta),
            NarrativeEffect::Confidence { skill, delta } => {
                let current = self
                    .get_skill(skill)
                    .map(Skill::confidence)
                    .ok_or_else(|| CoreError::UnknownSkill(skill.clone()))?;
                self.set_confidence(skill, current + delta)?;
                Ok(())
            }
            NarrativeEffect::Suppression { skill, until } => self.suppress_skill(skill, *until),
        }
    }

    fn skill_mut(&mut self, name: &str) -> CoreResult<&mut Skill> {
        self.skills
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| CoreError::UnknownSkill(name.to_string()))
    }
}
