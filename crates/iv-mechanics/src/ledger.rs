//! The check history ledger and failure log.
//!
//! The ledger maps a check identifier (one specific narrative moment)
//! to the most recent record for that moment. The resolver reads it to
//! enforce retry policy and writes each resolved roll as a whole record.
//! It grows for the life of a session and is persisted verbatim; the
//! `skill_level` frozen inside each record is what makes white-check retry
//! gating survive a save/load round trip.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::check::{CheckKind, CheckRecord};

/// One entry in the failure log, kept for analytics and QA tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEntry {
    /// The skill that was checked.
    pub skill: String,
    /// The kind of check that failed.
    pub kind: CheckKind,
    /// The identifier the failure was recorded under.
    pub id: String,
}

/// Persistent history of resolved checks, keyed by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckLedger {
    records: HashMap<String, CheckRecord>,
    failures: Vec<FailureEntry>,
}

impl CheckLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last record stored under an identifier, if any.
    pub fn get(&self, id: &str) -> Option<&CheckRecord> {
        self.records.get(id)
    }

    /// Store a record under an identifier, overwriting any prior record.
    pub fn record(&mut self, id: impl Into<String>, record: CheckRecord) {
        self.records.insert(id.into(), record);
    }

    /// Append an entry to the failure log.
    pub fn log_failure(&mut self, entry: FailureEntry) {
        self.failures.push(entry);
    }

    /// The failure log, in the order failures happened.
    pub fn failures(&self) -> &[FailureEntry] {
        &self.failures
    }

    /// Number of tracked identifiers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no checks have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
