//! Passive voice interjections and the session facade for Innervoice.
//!
//! Skills are voices: given a narrative context and the character's
//! psychological pressure, each one gets a chance-based trial to speak up,
//! and thematically opposed voices that trigger together escalate into a
//! single argument. [`Session`] ties the registry, check ledger, and
//! progression into the one shared handle every consumer goes through,
//! with a JSON snapshot for save/load.

/// Session configuration.
pub mod config;
/// Error types for session operations.
pub mod error;
/// The passive interjection pass.
pub mod interject;
/// The static opposed-skill table.
pub mod opposed;
/// Whole-session snapshots.
pub mod save;
/// The session facade.
pub mod session;

/// Re-export configuration.
pub use config::SessionConfig;
/// Re-export error types.
pub use error::{SessionError, SessionResult};
/// Re-export interjection types.
pub use interject::{Argument, Interjection, PassiveOutcome, passive_pass};
/// Re-export the snapshot type.
pub use save::Snapshot;
/// Re-export the session facade.
pub use session::Session;
