//! Error types for mechanics operations.

use thiserror::Error;

/// Alias for `Result<T, MechError>`.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur during mechanics operations.
///
/// Policy-blocked checks are not errors; they come back as ordinary
/// [`crate::CheckRecord`]s with a block reason, because a narrative game
/// must always be able to continue after any check.
#[derive(Debug, Error)]
pub enum MechError {
    /// No unspent skill points remain.
    #[error("no skill points available")]
    NoPointsAvailable,

    /// The skill's base level already equals its attribute's value.
    #[error("skill \"{skill}\" is capped at {cap} by its attribute")]
    SkillCapped {
        /// The skill that cannot be raised.
        skill: String,
        /// The governing attribute's current value.
        cap: u32,
    },

    /// A catalog lookup failed.
    #[error(transparent)]
    Core(#[from] iv_core::CoreError),
}
