//! Heuristic free-text scorer.
//!
//! A keyword rubric over a learner's written reasoning. The drill flow does
//! not call this - its scoring is the multiple-choice rubric - but the
//! contract stands on its own behind the evaluate endpoint and works
//! without any API key or network dependency.

use crate::drill::EvaluationResult;

const SUMMARY: &str = "This score is based on a simple offline rubric that \
looks for goal understanding, decomposition of the loop, identification of \
the infinite loop bug, and a concrete fix.";

/// Score free-text reasoning.
///
/// `base_score`, when given, seeds the score (clamped to 0-100); otherwise
/// the text's word count does (two points per word, clamped to 30-100).
/// Keyword bonuses push the score up, capped at 100. Four keyword checks
/// fill strengths/improvements, one line each.
pub fn heuristic_evaluation(reasoning: &str, base_score: Option<i64>) -> EvaluationResult {
    let text = reasoning.to_lowercase();
    let tokens = reasoning.split_whitespace().count() as i64;

    let mut score = match base_score {
        Some(base) => base.clamp(0, 100),
        None => (tokens * 2).clamp(30, 100),
    };

    if text.contains("while") && text.contains("loop") {
        score += 5;
    }
    if text.contains("infinite") || text.contains("never stops") {
        score += 10;
    }
    if text.contains("i +=") || text.contains("increment") {
        score += 10;
    }
    score = score.min(100);

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if text.contains("goal") || text.contains("supposed to") {
        strengths.push("You tried to describe the goal of the function.".to_string());
    } else {
        improvements
            .push("Start by clearly stating what the code is supposed to do.".to_string());
    }

    if text.contains("loop") || text.contains("line") {
        strengths.push(
            "You referenced specific parts of the code (like the loop or lines).".to_string(),
        );
    } else {
        improvements.push(
            "Refer to specific lines or parts of the code to make your reasoning concrete."
                .to_string(),
        );
    }

    if text.contains("infinite") || text.contains("never") || text.contains("stuck") {
        strengths
            .push("You noticed that the loop can run forever, which is the key bug.".to_string());
    } else {
        improvements.push(
            "Explain what actually goes wrong when the code runs (e.g. it never finishes)."
                .to_string(),
        );
    }

    if text.contains("increment") || text.contains("i +=") || text.contains("i = i + 1") {
        strengths
            .push("You proposed a concrete fix (incrementing i inside the loop).".to_string());
    } else {
        improvements.push(
            "Propose a specific change to the code that would fix the problem.".to_string(),
        );
    }

    EvaluationResult {
        score: score.max(0) as u32,
        strengths,
        improvements,
        summary: SUMMARY.to_string(),
    }
}
