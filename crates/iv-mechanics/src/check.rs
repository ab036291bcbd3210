//! Check kinds, requests, records, and the resolver.
//!
//! A check is one resolution attempt of a skill against a difficulty:
//! 2d6 plus the skill's effective level (plus any situational bonus),
//! succeeding when the total meets the difficulty. The identifier on a
//! request scopes retry policy to one narrative moment; the same skill
//! can be checked under any number of identifiers without interference.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use iv_core::SkillRegistry;

use crate::dice::{Critical, DiceRoll};
use crate::ledger::{CheckLedger, FailureEntry};

/// The retry class of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// A single permanent attempt. Failure can never be retried under the
    /// same identifier.
    Red,
    /// May be retried, but only after the skill's effective level has
    /// strictly increased since the last attempt.
    White,
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::White => write!(f, "white"),
        }
    }
}

/// Why a resolution came back blocked instead of rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    /// A red check already failed under this identifier; it is final.
    RedFailure,
    /// A white check failed and the skill has not improved past the level
    /// recorded at that attempt.
    NoImprovement,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedFailure => write!(f, "irreversible failure"),
            Self::NoImprovement => write!(f, "insufficient improvement"),
        }
    }
}

/// A request to resolve a check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRequest {
    /// The skill to check. An unknown name degrades to effective level 0.
    pub skill: String,
    /// The difficulty the total must meet or exceed.
    pub difficulty: i32,
    /// Retry class.
    pub kind: CheckKind,
    /// Identifier scoping retry policy to one narrative moment. When
    /// absent the engine synthesizes one, making the check untracked.
    pub id: Option<String>,
    /// Situational modifier supplied by the caller.
    pub bonus: i32,
    /// Injected roll for scripted outcomes and deterministic tests.
    pub roll: Option<DiceRoll>,
}

impl CheckRequest {
    /// Create a request with no identifier, bonus, or injected roll.
    pub fn new(skill: impl Into<String>, difficulty: i32, kind: CheckKind) -> Self {
        Self {
            skill: skill.into(),
            difficulty,
            kind,
            id: None,
            bonus: 0,
            roll: None,
        }
    }

    /// Track this check under an identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a situational modifier.
    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    /// Inject a roll instead of consulting the RNG.
    pub fn with_roll(mut self, roll: DiceRoll) -> Self {
        self.roll = Some(roll);
        self
    }
}

/// The result of one check resolution.
///
/// `skill_level` is the effective level at the moment of the attempt and
/// is never recomputed afterwards; it is what white-check retry gating
/// compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// The skill that was checked.
    pub skill: String,
    /// The raw two-die roll.
    pub roll: DiceRoll,
    /// The modifier added to the roll (effective level plus bonus).
    pub modifier: i32,
    /// Roll plus modifier.
    pub total: i32,
    /// The difficulty the total was compared against.
    pub difficulty: i32,
    /// Whether the total met the difficulty.
    pub success: bool,
    /// Retry class of the attempt.
    pub kind: CheckKind,
    /// Present when the resolution was blocked by retry policy rather
    /// than rolled.
    pub blocked: Option<BlockReason>,
    /// Effective skill level at the moment of the attempt, frozen.
    pub skill_level: u32,
    /// Whether both dice showed the same value.
    pub doubles: bool,
    /// Critical roll flag, if the roll was one.
    pub critical: Option<Critical>,
}

impl CheckRecord {
    /// Whether this resolution was blocked without rolling.
    pub fn is_blocked(&self) -> bool {
        self.blocked.is_some()
    }
}

impl std::fmt::Display for CheckRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(reason) = self.blocked {
            return write!(f, "{} ({}) blocked: {reason}", self.skill, self.kind);
        }
        write!(
            f,
            "{} ({}) {} {:+} = {} vs {}: {}",
            self.skill,
            self.kind,
            self.roll,
            self.modifier,
            self.total,
            self.difficulty,
            if self.success { "success" } else { "failure" }
        )
    }
}

/// Resolve a check against the registry and ledger.
///
/// Consults the ledger for retry legality first: a recorded success
/// short-circuits to that same record, a recorded red failure is final,
/// and a recorded white failure only rolls again once the skill's
/// effective level has strictly improved. Only genuine rolls mutate the
/// ledger; blocked resolutions return synthetic records.
///
/// An unknown skill is treated as effective level 0 rather than an error,
/// so a content typo degrades to "no bonus" instead of halting the story.
pub fn resolve_check(
    registry: &SkillRegistry,
    ledger: &mut CheckLedger,
    request: &CheckRequest,
    rng: &mut StdRng,
) -> CheckRecord {
    let effective = registry.effective_level(&request.skill).unwrap_or(0);
    let id = request
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    if let Some(prior) = ledger.get(&id) {
        if prior.success {
            return prior.clone();
        }
        match prior.kind {
            CheckKind::Red => {
                return blocked(prior, request.difficulty, BlockReason::RedFailure);
            }
            CheckKind::White if effective <= prior.skill_level => {
                return blocked(prior, request.difficulty, BlockReason::NoImprovement);
            }
            CheckKind::White => {}
        }
    }

    let roll = request.roll.unwrap_or_else(|| DiceRoll::roll(rng));
    let modifier = effective as i32 + request.bonus;
    let total = roll.total() as i32 + modifier;
    let success = total >= request.difficulty;

    let record = CheckRecord {
        skill: request.skill.clone(),
        roll,
        modifier,
        total,
        difficulty: request.difficulty,
        success,
        kind: request.kind,
        blocked: None,
        skill_level: effective,
        doubles: roll.is_doubles(),
        critical: roll.critical(),
    };

    ledger.record(id.clone(), record.clone());
    if !success {
        ledger.log_failure(FailureEntry {
            skill: record.skill.clone(),
            kind: record.kind,
            id,
        });
    }
    record
}

/// A synthetic record for a policy-blocked resolution. Carries the prior
/// attempt's roll and frozen skill level; never stored in the ledger.
fn blocked(prior: &CheckRecord, difficulty: i32, reason: BlockReason) -> CheckRecord {
    CheckRecord {
        skill: prior.skill.clone(),
        roll: prior.roll,
        modifier: prior.modifier,
        total: prior.total,
        difficulty,
        success: false,
        kind: prior.kind,
        blocked: Some(reason),
        skill_level: prior.skill_level,
        doubles: prior.doubles,
        critical: prior.critical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iv_core::config::preset;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn setup() -> (SkillRegistry, CheckLedger, StdRng) {
        (
            SkillRegistry::from_config(&preset::detective()).unwrap(),
            CheckLedger::new(),
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn injected_roll_is_deterministic() {
        let (registry, mut ledger, mut rng) = setup();
        // Deduction: base 2, Reason 3 => effective 2.
        let request = CheckRequest::new("Deduction", 8, CheckKind::White)
            .with_id("shelf-1")
            .with_roll(DiceRoll::new(3, 4));
        let record = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(record.total, 9);
        assert!(record.success);
        assert_eq!(record.skill_level, 2);
        assert_eq!(record.modifier, 2);
        assert!(!record.is_blocked());
    }

    #[test]
    fn bonus_counts_toward_total() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Deduction", 10, CheckKind::White)
            .with_bonus(3)
            .with_roll(DiceRoll::new(3, 2));
        let record = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(record.modifier, 5);
        assert_eq!(record.total, 10);
        assert!(record.success);
    }

    #[test]
    fn unknown_skill_degrades_to_level_zero() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Gambling", 5, CheckKind::White)
            .with_id("table-1")
            .with_roll(DiceRoll::new(2, 3));
        let record = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(record.skill_level, 0);
        assert_eq!(record.total, 5);
        assert!(record.success);
    }

    #[test]
    fn success_short_circuits_without_rerolling() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Deduction", 4, CheckKind::White)
            .with_id("shelf-1")
            .with_roll(DiceRoll::new(2, 2));
        let first = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert!(first.success);

        // Re-resolve without an injected roll: the stored record comes
        // back verbatim and the ledger is untouched.
        let replay = CheckRequest::new("Deduction", 4, CheckKind::White).with_id("shelf-1");
        let second = resolve_check(&registry, &mut ledger, &replay, &mut rng);
        assert_eq!(second, first);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn red_failure_is_permanent() {
        let (mut registry, mut ledger, mut rng) = setup();
        registry.set_skill_base("Menace", 2).unwrap();
        // Skill 2 vs difficulty 10 with a roll of 3: total 5, fail.
        let request = CheckRequest::new("Menace", 10, CheckKind::Red)
            .with_id("guard-1")
            .with_roll(DiceRoll::new(1, 2));
        let first = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert!(!first.success);
        assert_eq!(first.total, 5);

        // Even after massively raising the skill, the identifier stays blocked.
        registry.set_attribute_value("Body", 6).unwrap();
        registry.set_skill_base("Menace", 6).unwrap();
        let retry = CheckRequest::new("Menace", 10, CheckKind::Red).with_id("guard-1");
        let second = resolve_check(&registry, &mut ledger, &retry, &mut rng);
        assert_eq!(second.blocked, Some(BlockReason::RedFailure));
        assert!(!second.success);
        assert_eq!(second.skill_level, 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn white_retry_gated_on_strict_improvement() {
        let (mut registry, mut ledger, mut rng) = setup();
        registry.set_skill_base("Grit", 2).unwrap();
        let request = CheckRequest::new("Grit", 10, CheckKind::White)
            .with_id("door-1")
            .with_roll(DiceRoll::new(1, 2));
        let first = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert!(!first.success);
        assert_eq!(first.skill_level, 2);

        // Same level: blocked, no roll.
        let retry = CheckRequest::new("Grit", 10, CheckKind::White).with_id("door-1");
        let blocked = resolve_check(&registry, &mut ledger, &retry, &mut rng);
        assert_eq!(blocked.blocked, Some(BlockReason::NoImprovement));

        // Base raised but ceiling unchanged (Body is 2): still blocked.
        registry.set_skill_base("Grit", 4).unwrap();
        let blocked = resolve_check(&registry, &mut ledger, &retry, &mut rng);
        assert_eq!(blocked.blocked, Some(BlockReason::NoImprovement));

        // Raise the attribute so effective level becomes 3 > 2: fresh roll.
        registry.set_attribute_value("Body", 3).unwrap();
        let fresh = resolve_check(
            &registry,
            &mut ledger,
            &retry.clone().with_roll(DiceRoll::new(4, 4)),
            &mut rng,
        );
        assert!(fresh.blocked.is_none());
        assert_eq!(fresh.skill_level, 3);
        assert_eq!(fresh.total, 11);
        assert!(fresh.success);
    }

    #[test]
    fn untracked_checks_are_always_fresh() {
        let (registry, mut ledger, mut rng) = setup();
        let request =
            CheckRequest::new("Deduction", 12, CheckKind::White).with_roll(DiceRoll::new(1, 2));
        let first = resolve_check(&registry, &mut ledger, &request, &mut rng);
        let second = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert!(!first.success);
        assert!(!second.success);
        // Each resolution got its own synthesized identifier.
        assert_eq!(ledger.len(), 2);
        assert!(!first.is_blocked() && !second.is_blocked());
    }

    #[test]
    fn failures_are_logged() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Deduction", 12, CheckKind::Red)
            .with_id("chase-1")
            .with_roll(DiceRoll::new(1, 2));
        resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(ledger.failures().len(), 1);
        assert_eq!(ledger.failures()[0].skill, "Deduction");
        assert_eq!(ledger.failures()[0].kind, CheckKind::Red);
        assert_eq!(ledger.failures()[0].id, "chase-1");

        // Blocked replays are not new failures.
        resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(ledger.failures().len(), 1);
    }

    #[test]
    fn doubles_and_critical_metadata() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Deduction", 20, CheckKind::White)
            .with_id("vault-1")
            .with_roll(DiceRoll::new(1, 1));
        let record = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert!(record.doubles);
        assert_eq!(record.critical, Some(Critical::Failure));
    }

    #[test]
    fn record_display() {
        let (registry, mut ledger, mut rng) = setup();
        let request = CheckRequest::new("Deduction", 8, CheckKind::White)
            .with_id("shelf-1")
            .with_roll(DiceRoll::new(3, 4));
        let record = resolve_check(&registry, &mut ledger, &request, &mut rng);
        assert_eq!(
            record.to_string(),
            "Deduction (white) [3, 4] = 7 +2 = 9 vs 8: success"
        );
    }

    proptest! {
        #[test]
        fn total_is_pure_function_of_inputs(
            first in 1u32..=6,
            second in 1u32..=6,
            difficulty in -5i32..25,
        ) {
            let (registry, mut ledger_a, mut rng) = setup();
            let mut ledger_b = CheckLedger::new();
            let request = CheckRequest::new("Deduction", difficulty, CheckKind::White)
                .with_roll(DiceRoll::new(first, second));
            let a = resolve_check(&registry, &mut ledger_a, &request, &mut rng);
            let b = resolve_check(&registry, &mut ledger_b, &request, &mut rng);
            prop_assert_eq!(a.total, b.total);
            prop_assert_eq!(a.success, b.success);
            prop_assert_eq!(a.total, (first + second) as i32 + 2);
            prop_assert_eq!(a.success, a.total >= difficulty);
        }
    }
}
