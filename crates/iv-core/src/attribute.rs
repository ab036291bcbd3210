//! Capped attribute stats.
//!
//! An attribute is a clamped integer stat that gates a group of skills:
//! no skill's effective level can exceed its governing attribute's current
//! value, so raising the attribute is the only way to raise that ceiling.

use serde::{Deserialize, Serialize};

/// A capped character stat that gates a group of skills.
///
/// The value is clamped into `[1, cap]` on construction and on every write.
/// Mutation only happens through [`Attribute::set_value`]; the fields are
/// private so nothing can bypass the clamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    color: String,
    value: u32,
    cap: u32,
}

impl Attribute {
    /// Default upper bound for attribute values.
    pub const DEFAULT_CAP: u32 = 6;

    /// Create a new attribute, clamping the value into `[1, cap]`.
    ///
    /// A cap of 0 is treated as 1 so the valid range is never empty.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        value: u32,
        cap: u32,
    ) -> Self {
        let cap = cap.max(1);
        Self {
            name: name.into(),
            color: color.into(),
            value: value.clamp(1, cap),
            cap,
        }
    }

    /// The attribute's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The voice color used when a governed skill interjects.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The current value, always in `[1, cap]`.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The inclusive upper bound for this attribute.
    pub fn cap(&self) -> u32 {
        self.cap
    }

    /// Set the value, clamping into `[1, cap]`. Returns the stored value.
    pub fn set_value(&mut self, value: u32) -> u32 {
        self.value = value.clamp(1, self.cap);
        self.value
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.name, self.value, self.cap)
    }
}
