//! Catalog configuration for building a skill registry.
//!
//! The registry is constructed from an explicit [`RegistryConfig`]: an
//! ordered list of attributes, each carrying an ordered list of the skills
//! it governs. Order matters: the passive voice pass evaluates skills in
//! catalog order, so the same config always produces the same pass.
//! Balancing numbers and flavor text are content, not engine logic; they
//! live here and nowhere else.

pub mod preset;

use serde::{Deserialize, Serialize};

/// Configuration for one skill in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Skill name, unique across the whole catalog.
    pub name: String,
    /// Starting base level.
    pub base: u32,
    /// Flavor lines the voice engine draws interjections from.
    /// May be empty; the engine synthesizes a fallback line.
    pub flavor: Vec<String>,
}

/// Configuration for one attribute and the skills it governs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeConfig {
    /// Attribute name, unique across the catalog.
    pub name: String,
    /// Voice color for interjections from governed skills.
    pub color: String,
    /// Starting value, clamped into `[1, cap]` at construction.
    pub value: u32,
    /// Inclusive upper bound for the attribute value.
    pub cap: u32,
    /// Skills governed by this attribute, in catalog order.
    pub skills: Vec<SkillConfig>,
}

/// The complete catalog a registry is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Attributes in catalog order.
    pub attributes: Vec<AttributeConfig>,
}

impl RegistryConfig {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the catalog.
    pub fn with_attribute(mut self, attribute: AttributeConfig) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Total number of skills across all attributes.
    pub fn skill_count(&self) -> usize {
        self.attributes.iter().map(|a| a.skills.len()).sum()
    }
}
