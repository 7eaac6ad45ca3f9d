//! Persisted progress model.
//!
//! Every durable record lives in the key-value store under a fixed string
//! identifier. The keys below are a cross-feature contract: the practice
//! flow, the drill flow, and the calendar/forest views all address the same
//! entries, and existing stored data must keep loading across releases.

pub mod calendar;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::storage::ProgressStore;

/// Scores-by-date mapping written by the practice flow.
pub const SCORES_KEY: &str = "pocket_pathway_scores";
/// One-time A/B method assignment scalar.
pub const METHOD_KEY: &str = "pocket_pathway_method";
/// Next-review date scalar, set only for method "B".
pub const NEXT_REVIEW_KEY: &str = "pocket_pathway_next_review";
/// Learner display name scalar.
pub const USER_NAME_KEY: &str = "pocket_pathway_user_name";
/// Drill-history-by-date mapping written on each completed drill.
pub const DRILL_HISTORY_KEY: &str = "ct_drill_history";
/// Forest tree counter, incremented once per completed drill.
pub const FOREST_TREES_KEY: &str = "ct_forest_trees";

/// How many trees the forest view draws at most.
pub const FOREST_DISPLAY_CAP: u64 = 12;

/// One practice-quiz result for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyScore {
    pub score: u32,
    pub total: u32,
}

/// One drill result for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillHistoryEntry {
    pub score: u32,
}

/// `YYYY-MM-DD` key for a calendar date.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's date key in local time.
pub fn today_key() -> String {
    date_key(Local::now().date_naive())
}

/// Record a completed drill attempt for `day`.
///
/// Overwrites any existing history entry for the same day and grows the
/// forest by one tree. Both writes happen before control returns to the
/// caller, so a shown result always has its records behind it.
pub fn record_drill_completion<S: ProgressStore>(
    store: &S,
    day: &str,
    score: u32,
) -> Result<(), StoreError> {
    store.set_record(DRILL_HISTORY_KEY, day, &DrillHistoryEntry { score })?;
    store.set_counter(FOREST_TREES_KEY, store.get_counter(FOREST_TREES_KEY) + 1)?;
    Ok(())
}

/// Commit a finished practice session for `day`.
///
/// A later save for the same day overwrites the earlier one; there is no
/// per-day attempt history at this level.
pub fn record_practice_score<S: ProgressStore>(
    store: &S,
    day: &str,
    score: u32,
    total: u32,
) -> Result<(), StoreError> {
    store.set_record(SCORES_KEY, day, &DailyScore { score, total })
}

/// Read model for the forest view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestStats {
    /// Total trees earned (floored at zero on corrupt data).
    pub trees: u64,
    /// How many trees the view should actually draw.
    pub displayed: u64,
}

impl ForestStats {
    /// Load forest stats from the store.
    pub fn load<S: ProgressStore>(store: &S) -> Self {
        let trees = store.get_counter(FOREST_TREES_KEY);
        Self {
            trees,
            displayed: trees.min(FOREST_DISPLAY_CAP),
        }
    }

    pub fn has_any(&self) -> bool {
        self.trees > 0
    }
}

/// Learner display name, if one has been set.
///
/// Whitespace-only names count as unset.
pub fn user_name<S: ProgressStore>(store: &S) -> Option<String> {
    let name = store.get_scalar(USER_NAME_KEY)?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
