//! Narrative effects applied at the content boundary.
//!
//! Items, board theories, conditions, and injuries all want to buff or
//! debuff skills. Instead of free-form effect dictionaries inspected at
//! use time, content is loaded into this closed enum and applied through
//! [`crate::SkillRegistry::apply_effect`], the one place narrative state
//! enters the model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A content-defined change to a skill's state.
///
/// Bonus variants write into the skill's modifier map under a kind-prefixed
/// source key, so an item and a theory with the same name never collide.
/// A delta of 0 removes the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NarrativeEffect {
    /// A carried or equipped item adjusting a skill.
    ItemBonus {
        /// Item name, used as the modifier source.
        item: String,
        /// The affected skill.
        skill: String,
        /// Signed adjustment; 0 removes the modifier.
        delta: i32,
    },
    /// A board theory the character currently entertains.
    Theory {
        /// Theory title, used as the modifier source.
        theory: String,
        /// The affected skill.
        skill: String,
        /// Signed adjustment; 0 removes the modifier.
        delta: i32,
    },
    /// A condition or injury afflicting the character.
    Condition {
        /// Condition name, used as the modifier source.
        condition: String,
        /// The affected skill.
        skill: String,
        /// Signed adjustment; 0 removes the modifier.
        delta: i32,
    },
    /// An adjustment to a skill's confidence, clamped into `[-2, 2]`.
    Confidence {
        /// The affected skill.
        skill: String,
        /// Signed adjustment to the current confidence.
        delta: i32,
    },
    /// Silences a skill's voice until the given time.
    Suppression {
        /// The affected skill.
        skill: String,
        /// When the skill may speak again.
        until: DateTime<Utc>,
    },
}

impl NarrativeEffect {
    /// The skill this effect targets.
    pub fn skill(&self) -> &str {
        match self {
            Self::ItemBonus { skill, .. }
            | Self::Theory { skill, .. }
            | Self::Condition { skill, .. }
            | Self::Confidence { skill, .. }
            | Self::Suppression { skill, .. } => skill,
        }
    }
}

impl std::fmt::Display for NarrativeEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemBonus { item, skill, delta } => {
                write!(f, "{item}: {skill} {delta:+}")
            }
            Self::Theory { theory, skill, delta } => {
                write!(f, "theory \"{theory}\": {skill} {delta:+}")
            }
            Self::Condition {
                condition,
                skill,
                delta,
            } => write!(f, "{condition}: {skill} {delta:+}"),
            Self::Confidence { skill, delta } => {
                write!(f, "{skill} confidence {delta:+}")
            }
            Self::Suppression { skill, until } => {
                write!(f, "{skill} silenced until {until}")
            }
        }
    }
}
