//! Whole-session snapshots.
//!
//! The snapshot is the engine's only persistence surface: every attribute,
//! every skill with its full modifier map and counters, the complete check
//! ledger with its frozen per-attempt skill levels, the failure log, and
//! progression. Round-tripping a snapshot reproduces identical future retry
//! behavior; nothing in the ledger is recomputed on load.

use serde::{Deserialize, Serialize};

use iv_core::SkillRegistry;
use iv_mechanics::{CheckLedger, Progression};

use crate::error::SessionResult;

/// Serialized state of one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The registry with all attribute and skill state.
    pub registry: SkillRegistry,
    /// The check history ledger and failure log.
    pub ledger: CheckLedger,
    /// Advancement state.
    pub progression: Progression,
    /// Current psychological pressure.
    pub pressure: u32,
}

impl Snapshot {
    /// Encode the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a snapshot from JSON.
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
