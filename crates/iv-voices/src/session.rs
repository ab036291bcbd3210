//! The session facade.
//!
//! One [`Session`] per playthrough. Every consumer (combat, dialogue,
//! conditions, progression UI) goes through this handle instead of
//! constructing its own registry or ledger, so there is exactly one copy
//! of the character's state and one RNG stream. Nothing here is safe to
//! share across sessions; parallel playthroughs each own a `Session`.

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use iv_core::{NarrativeEffect, SkillRegistry};
use iv_mechanics::{
    CheckLedger, CheckRecord, CheckRequest, LevelUp, Progression, resolve_check,
};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::interject::{PRESSURE_BASELINE, PassiveOutcome, passive_pass};
use crate::save::Snapshot;

/// A single playthrough's engine state.
pub struct Session {
    registry: SkillRegistry,
    ledger: CheckLedger,
    progression: Progression,
    pressure: u32,
    rng: StdRng,
}

impl Session {
    /// Create a session from a configuration.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let registry = SkillRegistry::from_config(&config.catalog)?;
        Ok(Self {
            registry,
            ledger: CheckLedger::new(),
            progression: Progression::new(),
            pressure: config.pressure.min(PRESSURE_BASELINE),
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// The skill registry.
    pub fn registry(&self) -> &SkillRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for narrative layers that adjust
    /// attributes or skills directly.
    pub fn registry_mut(&mut self) -> &mut SkillRegistry {
        &mut self.registry
    }

    /// The check history ledger.
    pub fn ledger(&self) -> &CheckLedger {
        &self.ledger
    }

    /// Advancement state.
    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Current psychological pressure.
    pub fn pressure(&self) -> u32 {
        self.pressure
    }

    /// Set the pressure, clamped to `[0, PRESSURE_BASELINE]`.
    pub fn set_pressure(&mut self, pressure: u32) {
        self.pressure = pressure.min(PRESSURE_BASELINE);
    }

    /// Resolve a check through the ledger's retry policy.
    pub fn check(&mut self, request: &CheckRequest) -> CheckRecord {
        resolve_check(&self.registry, &mut self.ledger, request, &mut self.rng)
    }

    /// Run a passive interjection pass for a narrative context, stamped
    /// with the current wall-clock time.
    pub fn interject(&mut self, context: &str) -> PassiveOutcome {
        self.interject_at(context, Utc::now())
    }

    /// Run a passive interjection pass with an explicit time, for replay
    /// and testing.
    pub fn interject_at(&mut self, context: &str, now: DateTime<Utc>) -> PassiveOutcome {
        passive_pass(&self.registry, context, self.pressure, now, &mut self.rng)
    }

    /// Add experience, returning any level-ups gained.
    pub fn add_experience(&mut self, amount: u32) -> Vec<LevelUp> {
        self.progression.add_experience(amount)
    }

    /// Spend one skill point on the named skill. Returns the new base.
    pub fn spend_point(&mut self, skill: &str) -> SessionResult<u32> {
        Ok(self.progression.spend_point(&mut self.registry, skill)?)
    }

    /// Apply a content-defined narrative effect.
    pub fn apply_effect(&mut self, effect: &NarrativeEffect) -> SessionResult<()> {
        Ok(self.registry.apply_effect(effect)?)
    }

    /// Capture the session's full persistent state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registry: self.registry.clone(),
            ledger: self.ledger.clone(),
            progression: self.progression.clone(),
            pressure: self.pressure,
        }
    }

    /// Rebuild a session from a snapshot and a fresh RNG seed.
    pub fn restore(snapshot: Snapshot, seed: u64) -> Self {
        Self {
            registry: snapshot.registry,
            ledger: snapshot.ledger,
            progression: snapshot.progression,
            pressure: snapshot.pressure.min(PRESSURE_BASELINE),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
