//! Fixed drill content.
//!
//! The drill walks one specific buggy function. The snippet, its corrected
//! form, and the framing prompt are compile-time constants; the option text
//! lives with the choice enums in the rubric module.

use serde::{Deserialize, Serialize};

/// The buggy snippet shown in the situation step.
pub const PYTHON_SNIPPET: &str = indoc::indoc! {"
    def sum_to_n(n):
        total = 0
        i = 0
        while i <= n:
            total += i
        return total

    print(sum_to_n(5))
"};

/// The snippet with the minimal fix applied.
pub const CORRECTED_SNIPPET: &str = indoc::indoc! {"
    def sum_to_n(n):
        total = 0
        i = 0
        while i <= n:
            total += i
            i += 1
        return total

    print(sum_to_n(5))
"};

pub const DRILL_PROMPT: &str = "This function is supposed to add all numbers \
from 0 up to n, but something is wrong and the program never finishes.";

/// Growth stage shown next to a reasoning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Seed,
    Sprout,
    Tree,
    FloweringTree,
}

impl GrowthStage {
    /// Stage for a 0-100 score.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=39 => GrowthStage::Seed,
            40..=69 => GrowthStage::Sprout,
            70..=89 => GrowthStage::Tree,
            _ => GrowthStage::FloweringTree,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "Seed – starting out",
            GrowthStage::Sprout => "Sprout – getting clearer",
            GrowthStage::Tree => "Tree – strong reasoning",
            GrowthStage::FloweringTree => "Flowering tree – excellent",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "\u{1F331}",
            GrowthStage::Sprout => "\u{1F33F}",
            GrowthStage::Tree => "\u{1F333}",
            GrowthStage::FloweringTree => "\u{1F338}",
        }
    }
}
