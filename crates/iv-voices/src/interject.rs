//! The passive interjection pass.
//!
//! A two-phase reduce: every skill gets an independent trial against a
//! fixed threshold, then the collected results are scanned for opposed
//! pairs. The per-skill trials run in catalog order, so a given registry,
//! seed, and pressure always produce the same outcome. Conflict detection
//! looks at results, not trials: which skills triggered, never the order
//! they rolled in, decides whether an argument happens.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use iv_core::SkillRegistry;
use iv_mechanics::DiceRoll;

use crate::opposed::are_opposed;

/// Trigger threshold for a voice trial: roll + effective level + pressure
/// bonus must meet this.
pub const VOICE_THRESHOLD: i32 = 14;

/// Pressure at or above this value grants no bonus. Lower pressure means a
/// more agitated psyche and louder voices.
pub const PRESSURE_BASELINE: u32 = 10;

/// One bonus step per this many points of pressure below the baseline.
pub const PRESSURE_STEP: u32 = 2;

/// A spontaneous remark from a skill's voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interjection {
    /// The skill that spoke.
    pub skill: String,
    /// Voice color of the governing attribute.
    pub color: String,
    /// What the voice says.
    pub line: String,
}

/// Two opposed voices triggered together and argue instead of speaking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// The first voice of the pair, in catalog order.
    pub first: String,
    /// The second voice of the pair.
    pub second: String,
}

/// The outcome of one interjection pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassiveOutcome {
    /// The voices that spoke up, possibly none.
    Voices(Vec<Interjection>),
    /// An opposed pair triggered; all individual interjections are
    /// discarded and only the argument is reported.
    Argument(Argument),
}

impl PassiveOutcome {
    /// Whether nothing spoke up at all.
    pub fn is_quiet(&self) -> bool {
        matches!(self, Self::Voices(voices) if voices.is_empty())
    }
}

/// The bonus granted by psychological pressure.
///
/// Coarse banding: one fixed step for every [`PRESSURE_STEP`] full points
/// below [`PRESSURE_BASELINE`]. At or above the baseline the bonus is 0.
pub fn pressure_bonus(pressure: u32) -> i32 {
    let below = PRESSURE_BASELINE.saturating_sub(pressure);
    (below / PRESSURE_STEP) as i32
}

/// Run one passive interjection pass over every skill in the registry.
///
/// Suppressed skills are skipped. Each remaining skill rolls 2d6 and
/// triggers when `roll + effective level + pressure bonus` meets
/// [`VOICE_THRESHOLD`]. If any two triggered skills form an opposed pair,
/// the whole list collapses into a single [`Argument`]; only one voice
/// conflict is ever reported per pass.
pub fn passive_pass(
    registry: &SkillRegistry,
    context: &str,
    pressure: u32,
    now: DateTime<Utc>,
    rng: &mut StdRng,
) -> PassiveOutcome {
    let bonus = pressure_bonus(pressure);
    let mut triggered = Vec::new();

    for skill in registry.skills() {
        if skill.is_suppressed(now) {
            continue;
        }
        let roll = DiceRoll::roll(rng);
        let effective = registry.effective_level(skill.name()).unwrap_or(0);
        if roll.total() as i32 + effective as i32 + bonus >= VOICE_THRESHOLD {
            let color = registry
                .get_attribute(skill.attribute())
                .map_or_else(String::new, |a| a.color().to_string());
            triggered.push(Interjection {
                skill: skill.name().to_string(),
                color,
                line: voice_line(registry, skill.name(), context, roll),
            });
        }
    }

    for (i, a) in triggered.iter().enumerate() {
        for b in &triggered[i + 1..] {
            if are_opposed(&a.skill, &b.skill) {
                return PassiveOutcome::Argument(Argument {
                    first: a.skill.clone(),
                    second: b.skill.clone(),
                });
            }
        }
    }

    PassiveOutcome::Voices(triggered)
}

/// Pick a flavor line for a triggered voice, or synthesize one that
/// references the narrative context.
fn voice_line(registry: &SkillRegistry, skill: &str, context: &str, roll: DiceRoll) -> String {
    let pool = registry.flavor_lines(skill);
    if pool.is_empty() {
        format!("{skill} has something to say about {context}.")
    } else {
        pool[roll.total() as usize % pool.len()].clone()
    }
}
