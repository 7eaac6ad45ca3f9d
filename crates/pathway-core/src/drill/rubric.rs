//! Deterministic multiple-choice rubric.
//!
//! Three selections (cause, culprit, fix) map to a score and categorized
//! feedback. Each question has exactly one correct choice, fixed at compile
//! time; the scoring is a lookup, not an interpolation, so the same
//! selections always produce the same result.

use serde::{Deserialize, Serialize};

/// Why the program gets stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseChoice {
    /// "The loop adds 0+1+2+3+4+5 to total and then stops."
    AddsAndStops,
    /// "i starts at 0 and never changes, so the loop runs forever..."
    NeverChanges,
    /// "The loop never runs at all."
    NeverRuns,
}

impl CauseChoice {
    pub const CORRECT: CauseChoice = CauseChoice::NeverChanges;

    pub fn all() -> [CauseChoice; 3] {
        [
            CauseChoice::AddsAndStops,
            CauseChoice::NeverChanges,
            CauseChoice::NeverRuns,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CauseChoice::AddsAndStops => {
                "The loop adds 0+1+2+3+4+5 to total and then stops."
            }
            CauseChoice::NeverChanges => {
                "i starts at 0 and never changes, so the loop runs forever \
                 and the program never finishes."
            }
            CauseChoice::NeverRuns => "The loop never runs at all.",
        }
    }

    pub fn is_correct(&self) -> bool {
        *self == Self::CORRECT
    }
}

/// Which part of the code is to blame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CulpritChoice {
    /// The while condition combined with never changing i.
    WhileCondition,
    /// The line `total += i`.
    TotalLine,
    /// The return statement.
    ReturnStatement,
}

impl CulpritChoice {
    pub const CORRECT: CulpritChoice = CulpritChoice::WhileCondition;

    pub fn all() -> [CulpritChoice; 3] {
        [
            CulpritChoice::WhileCondition,
            CulpritChoice::TotalLine,
            CulpritChoice::ReturnStatement,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CulpritChoice::WhileCondition => {
                "The while condition 'while i <= n:' combined with never changing i."
            }
            CulpritChoice::TotalLine => "The line 'total += i'.",
            CulpritChoice::ReturnStatement => "The return statement 'return total'.",
        }
    }

    pub fn is_correct(&self) -> bool {
        *self == Self::CORRECT
    }
}

/// How to fix the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixChoice {
    /// Add `i += 1` inside the loop.
    IncrementInLoop,
    /// Move `return total` inside the loop.
    ReturnInLoop,
    /// Flip the while condition to `i >= n`.
    FlipCondition,
}

impl FixChoice {
    pub const CORRECT: FixChoice = FixChoice::IncrementInLoop;

    pub fn all() -> [FixChoice; 3] {
        [
            FixChoice::IncrementInLoop,
            FixChoice::ReturnInLoop,
            FixChoice::FlipCondition,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FixChoice::IncrementInLoop => {
                "Add 'i += 1' inside the loop so i increases each time."
            }
            FixChoice::ReturnInLoop => "Move 'return total' inside the loop.",
            FixChoice::FlipCondition => "Change the while condition to 'while i >= n:'.",
        }
    }

    pub fn is_correct(&self) -> bool {
        *self == Self::CORRECT
    }
}

/// Score plus categorized feedback for one completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: u32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub summary: String,
}

const SUMMARY: &str = "This score comes from how well you described the goal, \
followed the loop step by step, located the infinite loop bug, and chose a fix.";

/// Score the three selections.
///
/// Four independent checks each contribute exactly one line, to strengths
/// when satisfied and to improvements otherwise, in check order: structured
/// tracing (two or more correct), cause, culprit, fix.
pub fn evaluate(cause: CauseChoice, culprit: CulpritChoice, fix: FixChoice) -> EvaluationResult {
    let correct_count = [cause.is_correct(), culprit.is_correct(), fix.is_correct()]
        .iter()
        .filter(|&&c| c)
        .count();

    let score = match correct_count {
        3 => 95,
        2 => 75,
        1 => 55,
        _ => 35,
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if correct_count >= 2 {
        strengths.push("You traced the loop and its variables in a structured way.".to_string());
    } else {
        improvements.push(
            "Walk through each loop step explicitly to see how i and total change.".to_string(),
        );
    }

    if cause.is_correct() {
        strengths.push("You correctly identified that i never changes.".to_string());
    } else {
        improvements.push(
            "Focus on whether the loop variable ever changes so the loop can end.".to_string(),
        );
    }

    if culprit.is_correct() {
        strengths.push(
            "You pinpointed the combination of the while condition and the missing increment."
                .to_string(),
        );
    } else {
        improvements.push(
            "Connect the condition while i <= n with the fact that i is never incremented."
                .to_string(),
        );
    }

    if fix.is_correct() {
        strengths.push("You proposed the right minimal fix: add i += 1.".to_string());
    } else {
        improvements.push(
            "Try to propose the smallest change that makes the loop eventually stop.".to_string(),
        );
    }

    EvaluationResult {
        score,
        strengths,
        improvements,
        summary: SUMMARY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrong_cause() -> CauseChoice {
        CauseChoice::NeverRuns
    }
    fn wrong_culprit() -> CulpritChoice {
        CulpritChoice::TotalLine
    }
    fn wrong_fix() -> FixChoice {
        FixChoice::ReturnInLoop
    }

    #[test]
    fn score_ladder() {
        let all_right = evaluate(CauseChoice::CORRECT, CulpritChoice::CORRECT, FixChoice::CORRECT);
        assert_eq!(all_right.score, 95);

        let two_right = evaluate(CauseChoice::CORRECT, CulpritChoice::CORRECT, wrong_fix());
        assert_eq!(two_right.score, 75);

        let one_right = evaluate(CauseChoice::CORRECT, wrong_culprit(), wrong_fix());
        assert_eq!(one_right.score, 55);

        let none_right = evaluate(wrong_cause(), wrong_culprit(), wrong_fix());
        assert_eq!(none_right.score, 35);
    }

    #[test]
    fn every_check_lands_in_exactly_one_list() {
        for cause in CauseChoice::all() {
            for culprit in CulpritChoice::all() {
                for fix in FixChoice::all() {
                    let result = evaluate(cause, culprit, fix);
                    assert_eq!(
                        result.strengths.len() + result.improvements.len(),
                        4,
                        "one line per check for {cause:?}/{culprit:?}/{fix:?}"
                    );
                    for line in &result.strengths {
                        assert!(!result.improvements.contains(line));
                    }
                }
            }
        }
    }

    #[test]
    fn score_is_monotonic_in_correct_count() {
        let by_count = [
            evaluate(wrong_cause(), wrong_culprit(), wrong_fix()).score,
            evaluate(CauseChoice::CORRECT, wrong_culprit(), wrong_fix()).score,
            evaluate(CauseChoice::CORRECT, CulpritChoice::CORRECT, wrong_fix()).score,
            evaluate(CauseChoice::CORRECT, CulpritChoice::CORRECT, FixChoice::CORRECT).score,
        ];
        assert_eq!(by_count, [35, 55, 75, 95]);
        assert!(by_count.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn feedback_follows_check_order() {
        // Only the fix is right: tracing, cause, and culprit advice in order,
        // then the fix praise alone.
        let result = evaluate(wrong_cause(), wrong_culprit(), FixChoice::CORRECT);
        assert_eq!(result.score, 55);
        assert_eq!(result.improvements.len(), 3);
        assert!(result.improvements[0].starts_with("Walk through each loop step"));
        assert!(result.improvements[1].starts_with("Focus on whether the loop variable"));
        assert!(result.improvements[2].starts_with("Connect the condition"));
        assert_eq!(result.strengths.len(), 1);
        assert!(result.strengths[0].contains("minimal fix"));
    }

    #[test]
    fn summary_never_varies() {
        let a = evaluate(CauseChoice::CORRECT, CulpritChoice::CORRECT, FixChoice::CORRECT);
        let b = evaluate(wrong_cause(), wrong_culprit(), wrong_fix());
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn evaluate_is_deterministic() {
        let a = evaluate(CauseChoice::CORRECT, wrong_culprit(), FixChoice::CORRECT);
        let b = evaluate(CauseChoice::CORRECT, wrong_culprit(), FixChoice::CORRECT);
        assert_eq!(a, b);
    }

    #[test]
    fn exactly_one_correct_choice_per_question() {
        assert_eq!(
            CauseChoice::all().iter().filter(|c| c.is_correct()).count(),
            1
        );
        assert_eq!(
            CulpritChoice::all().iter().filter(|c| c.is_correct()).count(),
            1
        );
        assert_eq!(FixChoice::all().iter().filter(|c| c.is_correct()).count(), 1);
    }
}
