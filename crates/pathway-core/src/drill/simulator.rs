//! Bounded emulation of the sample buggy loop.
//!
//! This is not an interpreter. It emulates exactly four variants of the one
//! `sum_to_n` function the drill is built around, under a fixed step budget.
//! The budget is the only thing standing between an always-true condition
//! and an unbounded loop, so it must hold for every input.

use serde::{Deserialize, Serialize};

/// Hard ceiling on emulated loop iterations.
pub const STEP_LIMIT: u32 = 50_000;

/// The `n` the drill runs the function with.
pub const DEMO_N: i64 = 5;

/// The four code variants the learner can try.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// The buggy code as written: i never changes.
    #[default]
    Original,
    /// `i += 1` added inside the loop (the fix).
    Increment,
    /// `return total` moved inside the loop.
    ReturnInLoop,
    /// While condition flipped to `i >= n`.
    WhileGe,
}

impl Variant {
    pub fn all() -> [Variant; 4] {
        [
            Variant::Original,
            Variant::Increment,
            Variant::ReturnInLoop,
            Variant::WhileGe,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Original => "Original code",
            Variant::Increment => "Add i += 1 (recommended)",
            Variant::ReturnInLoop => "Move return inside loop",
            Variant::WhileGe => "Change while to i >= n",
        }
    }

    /// Which snippet a preview should show for this variant.
    pub fn shows_corrected_code(&self) -> bool {
        matches!(self, Variant::Increment)
    }
}

/// Outcome of one emulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The run finished and printed the expected sum.
    Ok { output: i64, steps: u32 },
    /// The run finished but printed something other than the expected sum.
    Wrong { output: i64, steps: u32 },
    /// The run hit the step budget before the condition went false.
    Stuck { steps: u32 },
}

impl RunOutcome {
    pub fn steps(&self) -> u32 {
        match self {
            RunOutcome::Ok { steps, .. }
            | RunOutcome::Wrong { steps, .. }
            | RunOutcome::Stuck { steps } => *steps,
        }
    }

    pub fn is_stuck(&self) -> bool {
        matches!(self, RunOutcome::Stuck { .. })
    }
}

/// Expected sum for the demo input (0+1+...+5).
const EXPECTED_TOTAL: i64 = 15;

/// Emulate `sum_to_n(n)` under the given variant.
///
/// Pure and deterministic: the same `(n, variant)` always yields the same
/// outcome, and the loop can never run past [`STEP_LIMIT`] iterations.
pub fn simulate(n: i64, variant: Variant) -> RunOutcome {
    let mut total: i64 = 0;
    let mut i: i64 = 0;
    let mut steps: u32 = 0;

    let condition = |i: i64| match variant {
        Variant::WhileGe => i >= n,
        _ => i <= n,
    };

    while condition(i) {
        steps += 1;
        if steps > STEP_LIMIT {
            return RunOutcome::Stuck { steps };
        }

        total += i;

        match variant {
            Variant::ReturnInLoop => {
                return finish(total, steps);
            }
            Variant::Increment => {
                i += 1;
            }
            // original bug: i never changes
            _ => {}
        }
    }

    finish(total, steps)
}

fn finish(total: i64, steps: u32) -> RunOutcome {
    if total == EXPECTED_TOTAL {
        RunOutcome::Ok {
            output: total,
            steps,
        }
    } else {
        RunOutcome::Wrong {
            output: total,
            steps,
        }
    }
}
