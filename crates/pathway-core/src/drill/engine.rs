//! Drill state machine.
//!
//! The guided flow is an explicit state machine operating on commands - no
//! rendering framework involved. The caller issues selection and navigation
//! commands and reflects snapshots; the engine owns the transient attempt.
//!
//! ## State Transitions
//!
//! ```text
//! Situation -> Cause -> Culprit -> Fix -> Evaluated
//! ```
//!
//! Forward moves are guarded: each question step requires its selection
//! before `next` does anything. The final forward move evaluates the rubric
//! and persists the day's drill record plus one forest tree, exactly once,
//! before the result is handed back. `Evaluated` locks all selections until
//! a new attempt resets the engine.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::progress::{self, record_drill_completion};
use crate::storage::ProgressStore;

use super::content::GrowthStage;
use super::rubric::{self, CauseChoice, CulpritChoice, EvaluationResult, FixChoice};
use super::simulator::{simulate, RunOutcome, Variant, DEMO_N};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillState {
    Situation,
    Cause,
    Culprit,
    Fix,
    Evaluated,
}

impl DrillState {
    /// 0-based step index the presentation shows. `Evaluated` stays on the
    /// final step with the result panel open.
    pub fn step_index(&self) -> u8 {
        match self {
            DrillState::Situation => 0,
            DrillState::Cause => 1,
            DrillState::Culprit => 2,
            DrillState::Fix | DrillState::Evaluated => 3,
        }
    }
}

/// Emitted by engine commands that change state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrillEvent {
    Advanced { to: DrillState },
    SteppedBack { to: DrillState },
    Evaluated { result: EvaluationResult },
}

/// Full state snapshot for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillSnapshot {
    pub state: DrillState,
    pub step_index: u8,
    pub locked: bool,
    pub can_advance: bool,
    pub cause: Option<CauseChoice>,
    pub culprit: Option<CulpritChoice>,
    pub fix: Option<FixChoice>,
    pub run_variant: Variant,
    pub run_outcome: Option<RunOutcome>,
    pub result: Option<EvaluationResult>,
    pub stage: Option<GrowthStage>,
}

/// Core drill engine.
///
/// Holds one transient attempt. The attempt itself is never written to the
/// durable record keys; only the derived result lands in the drill history
/// when the final step completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillEngine {
    state: DrillState,
    cause: Option<CauseChoice>,
    culprit: Option<CulpritChoice>,
    fix: Option<FixChoice>,
    #[serde(default)]
    run_variant: Variant,
    #[serde(default)]
    run_outcome: Option<RunOutcome>,
    result: Option<EvaluationResult>,
}

impl DrillEngine {
    /// Create a fresh attempt at the situation step.
    pub fn new() -> Self {
        Self {
            state: DrillState::Situation,
            cause: None,
            culprit: None,
            fix: None,
            run_variant: Variant::Original,
            run_outcome: None,
            result: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> DrillState {
        self.state
    }

    pub fn cause(&self) -> Option<CauseChoice> {
        self.cause
    }

    pub fn culprit(&self) -> Option<CulpritChoice> {
        self.culprit
    }

    pub fn fix(&self) -> Option<FixChoice> {
        self.fix
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    pub fn run_variant(&self) -> Variant {
        self.run_variant
    }

    pub fn run_outcome(&self) -> Option<RunOutcome> {
        self.run_outcome
    }

    /// Selections are frozen once the attempt has been evaluated.
    pub fn is_locked(&self) -> bool {
        self.state == DrillState::Evaluated
    }

    /// Whether `next` would currently do anything.
    pub fn can_advance(&self) -> bool {
        match self.state {
            DrillState::Situation => true,
            DrillState::Cause => self.cause.is_some(),
            DrillState::Culprit => self.culprit.is_some(),
            DrillState::Fix => self.fix.is_some(),
            DrillState::Evaluated => false,
        }
    }

    /// Build a full state snapshot.
    pub fn snapshot(&self) -> DrillSnapshot {
        DrillSnapshot {
            state: self.state,
            step_index: self.state.step_index(),
            locked: self.is_locked(),
            can_advance: self.can_advance(),
            cause: self.cause,
            culprit: self.culprit,
            fix: self.fix,
            run_variant: self.run_variant,
            run_outcome: self.run_outcome,
            result: self.result.clone(),
            stage: self.result.as_ref().map(|r| GrowthStage::from_score(r.score)),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Record the cause selection. Ignored while locked.
    pub fn select_cause(&mut self, choice: CauseChoice) -> bool {
        if self.is_locked() {
            return false;
        }
        self.cause = Some(choice);
        true
    }

    /// Record the culprit selection. Ignored while locked.
    pub fn select_culprit(&mut self, choice: CulpritChoice) -> bool {
        if self.is_locked() {
            return false;
        }
        self.culprit = Some(choice);
        true
    }

    /// Record the fix selection. Ignored while locked.
    pub fn select_fix(&mut self, choice: FixChoice) -> bool {
        if self.is_locked() {
            return false;
        }
        self.fix = Some(choice);
        true
    }

    /// Route an option index to whichever question the current step asks.
    ///
    /// Ignored at the situation step, while locked, and for out-of-range
    /// indexes.
    pub fn select_option(&mut self, index: usize) -> bool {
        match self.state {
            DrillState::Cause => CauseChoice::all()
                .get(index)
                .copied()
                .is_some_and(|c| self.select_cause(c)),
            DrillState::Culprit => CulpritChoice::all()
                .get(index)
                .copied()
                .is_some_and(|c| self.select_culprit(c)),
            DrillState::Fix => FixChoice::all()
                .get(index)
                .copied()
                .is_some_and(|c| self.select_fix(c)),
            _ => false,
        }
    }

    /// Advance one step.
    ///
    /// Returns `Ok(None)` when the guard blocks the move (missing selection
    /// or already evaluated). The final advance evaluates the rubric, writes
    /// today's drill history record, grows the forest by one tree, and only
    /// then reports the result.
    pub fn next<S: ProgressStore>(
        &mut self,
        store: &S,
    ) -> Result<Option<DrillEvent>, StoreError> {
        if !self.can_advance() {
            return Ok(None);
        }

        let to = match self.state {
            DrillState::Situation => DrillState::Cause,
            DrillState::Cause => DrillState::Culprit,
            DrillState::Culprit => DrillState::Fix,
            DrillState::Fix => {
                let (Some(cause), Some(culprit), Some(fix)) =
                    (self.cause, self.culprit, self.fix)
                else {
                    return Ok(None);
                };
                return self.evaluate(store, cause, culprit, fix).map(Some);
            }
            DrillState::Evaluated => return Ok(None),
        };
        self.state = to;
        Ok(Some(DrillEvent::Advanced { to }))
    }

    /// Step back one screen.
    ///
    /// Returns `None` at the situation step (leaving the drill is the
    /// caller's navigation, not a machine transition) and once evaluated.
    pub fn back(&mut self) -> Option<DrillEvent> {
        let to = match self.state {
            DrillState::Cause => DrillState::Situation,
            DrillState::Culprit => DrillState::Cause,
            DrillState::Fix => DrillState::Culprit,
            DrillState::Situation | DrillState::Evaluated => return None,
        };
        self.state = to;
        Some(DrillEvent::SteppedBack { to })
    }

    /// Switch which code variant the what-if panel would run.
    pub fn set_run_variant(&mut self, variant: Variant) {
        self.run_variant = variant;
    }

    /// Run the current variant against the demo input.
    ///
    /// Independent of scoring: the outcome lives only in the attempt and
    /// touches no persisted state.
    pub fn run(&mut self) -> RunOutcome {
        let outcome = simulate(DEMO_N, self.run_variant);
        self.run_outcome = Some(outcome);
        outcome
    }

    /// Discard the attempt and start over at the situation step.
    ///
    /// Persisted records are untouched; only transient state resets.
    pub fn new_attempt(&mut self) {
        *self = Self::new();
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn evaluate<S: ProgressStore>(
        &mut self,
        store: &S,
        cause: CauseChoice,
        culprit: CulpritChoice,
        fix: FixChoice,
    ) -> Result<DrillEvent, StoreError> {
        let result = rubric::evaluate(cause, culprit, fix);

        // Both writes land before the result is observable.
        record_drill_completion(store, &progress::today_key(), result.score)?;

        self.state = DrillState::Evaluated;
        self.run_variant = Variant::Original;
        self.run_outcome = None;
        self.result = Some(result.clone());

        Ok(DrillEvent::Evaluated { result })
    }
}

impl Default for DrillEngine {
    fn default() -> Self {
        Self::new()
    }
}
