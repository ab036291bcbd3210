//! Check resolution, retry ledger, and progression for Innervoice.
//!
//! The algorithmic heart of the engine: two-die checks against a
//! difficulty, a ledger enforcing red/white retry policy per narrative
//! moment, and linear experience progression feeding skill points back
//! into the data model.

/// Check kinds, requests, records, and the resolver.
pub mod check;
/// Two-die rolls and their metadata.
pub mod dice;
/// Error types for mechanics operations.
pub mod error;
/// The check history ledger and failure log.
pub mod ledger;
/// Experience, levels, and skill-point spending.
pub mod progression;

/// Re-export check types and the resolver.
pub use check::{BlockReason, CheckKind, CheckRecord, CheckRequest, resolve_check};
/// Re-export dice types.
pub use dice::{Critical, DiceRoll};
/// Re-export error types.
pub use error::{MechError, MechResult};
/// Re-export the ledger.
pub use ledger::{CheckLedger, FailureEntry};
/// Re-export progression types.
pub use progression::{LevelUp, Progression};
