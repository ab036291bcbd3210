//! Skills with base levels, modifiers, and transient state.
//!
//! A skill's effective level is never stored here: it is derived from the
//! base level, the modifier map, and confidence, then clamped by the
//! governing attribute. That computation lives on the registry, which owns
//! both sides of the skill/attribute relationship.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive bounds for the confidence adjustment.
pub const CONFIDENCE_RANGE: (i32, i32) = (-2, 2);

/// A named capability governed by exactly one attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    name: String,
    attribute: String,
    base: u32,
    modifiers: BTreeMap<String, i32>,
    confidence: i32,
    correct_predictions: u32,
    incorrect_predictions: u32,
    suppressed_until: Option<DateTime<Utc>>,
}

impl Skill {
    /// Create a new skill governed by the named attribute.
    pub fn new(name: impl Into<String>, attribute: impl Into<String>, base: u32) -> Self {
        Self {
            name: name.into(),
            attribute: attribute.into(),
            base,
            modifiers: BTreeMap::new(),
            confidence: 0,
            correct_predictions: 0,
            incorrect_predictions: 0,
            suppressed_until: None,
        }
    }

    /// The skill's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the governing attribute.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// The base level, before modifiers and confidence.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Set the base level.
    pub fn set_base(&mut self, base: u32) {
        self.base = base;
    }

    /// The modifier map, keyed by source name.
    pub fn modifiers(&self) -> &BTreeMap<String, i32> {
        &self.modifiers
    }

    /// Set a named modifier. A delta of 0 removes the source entirely.
    pub fn set_modifier(&mut self, source: impl Into<String>, delta: i32) {
        let source = source.into();
        if delta == 0 {
            self.modifiers.remove(&source);
        } else {
            self.modifiers.insert(source, delta);
        }
    }

    /// Sum of all modifier deltas.
    pub fn modifier_sum(&self) -> i32 {
        self.modifiers.values().sum()
    }

    /// The confidence adjustment, always in `[-2, 2]`.
    pub fn confidence(&self) -> i32 {
        self.confidence
    }

    /// Set the confidence adjustment, clamped into `[-2, 2]`.
    /// Returns the stored value.
    pub fn set_confidence(&mut self, value: i32) -> i32 {
        self.confidence = value.clamp(CONFIDENCE_RANGE.0, CONFIDENCE_RANGE.1);
        self.confidence
    }

    /// Counters of correct and incorrect predictions, in that order.
    pub fn predictions(&self) -> (u32, u32) {
        (self.correct_predictions, self.incorrect_predictions)
    }

    /// Record the outcome of a prediction this skill made.
    pub fn record_prediction(&mut self, correct: bool) {
        if correct {
            self.correct_predictions += 1;
        } else {
            self.incorrect_predictions += 1;
        }
    }

    /// When suppression ends, if the skill is currently suppressed.
    pub fn suppressed_until(&self) -> Option<DateTime<Utc>> {
        self.suppressed_until
    }

    /// Silence this skill's voice until the given time.
    pub fn suppress_until(&mut self, until: DateTime<Utc>) {
        self.suppressed_until = Some(until);
    }

    /// Whether the skill's voice is suppressed at `now`.
    pub fn is_suppressed(&self, now: DateTime<Utc>) -> bool {
        self.suppressed_until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn set_modifier_and_sum() {
        let mut s = Skill::new("Deduction", "Reason", 3);
        s.set_modifier("item:magnifier", 2);
        s.set_modifier("condition:tired", -1);
        assert_eq!(s.modifier_sum(), 1);
        assert_eq!(s.modifiers().len(), 2);
    }

    #[test]
    fn zero_delta_removes_source() {
        let mut s = Skill::new("Deduction", "Reason", 3);
        s.set_modifier("item:magnifier", 2);
        s.set_modifier("item:magnifier", 0);
        assert!(s.modifiers().is_empty());
        assert_eq!(s.modifier_sum(), 0);
    }

    #[test]
    fn same_source_overwrites() {
        let mut s = Skill::new("Deduction", "Reason", 3);
        s.set_modifier("item:magnifier", 2);
        s.set_modifier("item:magnifier", 3);
        assert_eq!(s.modifier_sum(), 3);
        assert_eq!(s.modifiers().len(), 1);
    }

    #[test]
    fn confidence_clamped() {
        let mut s = Skill::new("Empathy", "Spirit", 2);
        assert_eq!(s.set_confidence(5), 2);
        assert_eq!(s.set_confidence(-7), -2);
        assert_eq!(s.set_confidence(1), 1);
    }

    #[test]
    fn prediction_counters() {
        let mut s = Skill::new("Intuition", "Spirit", 2);
        s.record_prediction(true);
        s.record_prediction(true);
        s.record_prediction(false);
        assert_eq!(s.predictions(), (2, 1));
    }

    #[test]
    fn suppression_window() {
        let mut s = Skill::new("Menace", "Body", 2);
        let now = Utc::now();
        assert!(!s.is_suppressed(now));

        s.suppress_until(now + TimeDelta::minutes(5));
        assert!(s.is_suppressed(now));
        assert!(!s.is_suppressed(now + TimeDelta::minutes(6)));
    }

    #[test]
    fn round_trip_serde() {
        let mut s = Skill::new("Lore", "Reason", 2);
        s.set_modifier("theory:old-maps", 1);
        s.set_confidence(-1);
        s.record_prediction(false);
        s.suppress_until(Utc::now());

        let json = serde_json::to_string(&s).unwrap();
        let t: Skill = serde_json::from_str(&json).unwrap();
        assert_eq!(t.name(), "Lore");
        assert_eq!(t.attribute(), "Reason");
        assert_eq!(t.modifier_sum(), 1);
        assert_eq!(t.confidence(), -1);
        assert_eq!(t.predictions(), (0, 1));
        assert!(t.suppressed_until().is_some());
    }
}
