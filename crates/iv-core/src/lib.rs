//! Core data model for Innervoice: attributes, skills, and the skill registry.
//!
//! This crate defines the character model that the check resolver and the
//! passive voice engine operate on. A [`SkillRegistry`] owns a fixed catalog
//! of capped [`Attribute`]s and the [`Skill`]s they govern, and is the sole
//! mutation surface for both. It is built from an explicit [`RegistryConfig`]
//! with no hidden file probing or fallback catalog.

/// Capped attribute stats.
pub mod attribute;
/// Catalog configuration and the shipped preset.
pub mod config;
/// Narrative effects applied at the content boundary.
pub mod effect;
/// Error types used throughout the crate.
pub mod error;
/// The registry owning attributes and skills.
pub mod registry;
/// Skills with base levels, modifiers, and transient state.
pub mod skill;

/// Re-export the attribute type.
pub use attribute::Attribute;
/// Re-export configuration types.
pub use config::{AttributeConfig, RegistryConfig, SkillConfig};
/// Re-export the narrative effect enum.
pub use effect::NarrativeEffect;
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the registry.
pub use registry::SkillRegistry;
/// Re-export the skill type.
pub use skill::Skill;
