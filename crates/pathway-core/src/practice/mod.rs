//! Practice-quiz session.
//!
//! A short multiple-choice quiz per topic. The session is transient; its
//! only durable product is the `{score, total}` outcome, which the results
//! flow commits into the scores-by-date mapping and which also triggers the
//! one-time method assignment.

pub mod questions;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::experiment::{assign_method, CoinFlip, MethodAssignment};
use crate::progress::{self, record_practice_score};
use crate::storage::ProgressStore;

pub use questions::{questions_for, Question, QuestionOption, Topic};

/// What `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AdvanceEvent {
    /// Nothing selected yet; the session did not move.
    NeedsSelection,
    /// The selection was checked and locked in.
    Checked { correct: bool },
    /// Moved on to the next question.
    NextQuestion { index: usize },
    /// The quiz is over.
    Finished(SessionOutcome),
}

/// Short-lived handoff from a finished quiz to the results flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub score: u32,
    pub total: u32,
}

impl SessionOutcome {
    /// Commit this outcome for today: write the daily score record and run
    /// the one-time method assignment, exactly as reaching the results view
    /// does.
    pub fn commit<S: ProgressStore, C: CoinFlip>(
        &self,
        store: &S,
        coin: &mut C,
    ) -> Result<CommitSummary, StoreError> {
        self.commit_for(store, coin, &progress::today_key())
    }

    /// [`Self::commit`] with an explicit date key for deterministic tests.
    pub fn commit_for<S: ProgressStore, C: CoinFlip>(
        &self,
        store: &S,
        coin: &mut C,
        day: &str,
    ) -> Result<CommitSummary, StoreError> {
        record_practice_score(store, day, self.score, self.total)?;
        let assignment = assign_method(store, coin)?;
        Ok(CommitSummary {
            day: day.to_string(),
            score: self.score,
            total: self.total,
            assignment,
        })
    }
}

/// Everything the results view needs after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    pub day: String,
    pub score: u32,
    pub total: u32,
    pub assignment: MethodAssignment,
}

/// One pass through a topic's questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    topic: Topic,
    step: usize,
    selected: Option<usize>,
    submitted: bool,
    score: u32,
    finished: bool,
}

impl PracticeSession {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            step: 0,
            selected: None,
            submitted: false,
            score: 0,
            finished: false,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn total(&self) -> u32 {
        questions_for(self.topic).len() as u32
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        questions_for(self.topic).get(self.step)
    }

    fn is_last(&self) -> bool {
        self.step + 1 >= questions_for(self.topic).len()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Pick an option for the current question.
    ///
    /// Ignored after the answer has been checked or the quiz has finished,
    /// and for out-of-range indexes.
    pub fn select(&mut self, index: usize) -> bool {
        if self.submitted || self.finished {
            return false;
        }
        let Some(question) = self.current_question() else {
            return false;
        };
        if index >= question.options.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Move the session forward.
    ///
    /// First press checks the selection, the next press advances to the
    /// following question (or finishes after the last one).
    pub fn advance(&mut self) -> AdvanceEvent {
        if self.finished {
            return AdvanceEvent::Finished(self.outcome());
        }

        if self.submitted {
            if self.is_last() {
                self.finished = true;
                return AdvanceEvent::Finished(self.outcome());
            }
            self.step += 1;
            self.selected = None;
            self.submitted = false;
            return AdvanceEvent::NextQuestion { index: self.step };
        }

        let Some(selected) = self.selected else {
            return AdvanceEvent::NeedsSelection;
        };
        let correct = self
            .current_question()
            .map(|q| q.correct_index() == selected)
            .unwrap_or(false);
        if correct {
            self.score += 1;
        }
        self.submitted = true;
        AdvanceEvent::Checked { correct }
    }

    /// The `{score, total}` handoff value.
    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            score: self.score,
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{DailyScore, METHOD_KEY, SCORES_KEY};
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    struct Always(bool);

    impl CoinFlip for Always {
        fn flip(&mut self) -> bool {
            self.0
        }
    }

    fn answer(session: &mut PracticeSession, index: usize) -> AdvanceEvent {
        assert!(session.select(index));
        session.advance()
    }

    #[test]
    fn perfect_run_scores_two_of_two() {
        let mut session = PracticeSession::new(Topic::Math);

        assert_eq!(answer(&mut session, 0), AdvanceEvent::Checked { correct: true });
        assert_eq!(session.advance(), AdvanceEvent::NextQuestion { index: 1 });
        assert_eq!(answer(&mut session, 0), AdvanceEvent::Checked { correct: true });

        let finished = session.advance();
        assert_eq!(
            finished,
            AdvanceEvent::Finished(SessionOutcome { score: 2, total: 2 })
        );
        assert!(session.is_finished());
    }

    #[test]
    fn wrong_answers_do_not_score() {
        let mut session = PracticeSession::new(Topic::History);

        // h1: correct option is index 1; pick 0.
        assert_eq!(answer(&mut session, 0), AdvanceEvent::Checked { correct: false });
        session.advance();
        // h2: correct option is index 2; pick 2.
        assert_eq!(answer(&mut session, 2), AdvanceEvent::Checked { correct: true });

        assert_eq!(
            session.advance(),
            AdvanceEvent::Finished(SessionOutcome { score: 1, total: 2 })
        );
    }

    #[test]
    fn advance_without_selection_goes_nowhere() {
        let mut session = PracticeSession::new(Topic::Math);
        assert_eq!(session.advance(), AdvanceEvent::NeedsSelection);
        assert_eq!(session.step(), 0);
    }

    #[test]
    fn selection_locks_after_check() {
        let mut session = PracticeSession::new(Topic::Math);
        session.select(1);
        session.advance();

        assert!(!session.select(0));
        assert_eq!(session.selected(), Some(1));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut session = PracticeSession::new(Topic::Math);
        assert!(!session.select(10));
        assert!(session.selected().is_none());
    }

    #[test]
    fn commit_writes_the_daily_score_and_assigns_once() {
        let store = MemoryStore::new();
        let outcome = SessionOutcome { score: 1, total: 2 };

        let summary = outcome
            .commit_for(&store, &mut Always(false), "2026-02-10")
            .unwrap();
        assert_eq!(summary.assignment.method, crate::experiment::Method::B);
        assert!(summary.assignment.newly_assigned);

        let scores: HashMap<String, DailyScore> = store.get_all(SCORES_KEY);
        assert_eq!(scores["2026-02-10"], DailyScore { score: 1, total: 2 });

        // A second session the same day overwrites the score but leaves the
        // assignment alone.
        let outcome = SessionOutcome { score: 2, total: 2 };
        let summary = outcome
            .commit_for(&store, &mut Always(true), "2026-02-10")
            .unwrap();
        assert!(!summary.assignment.newly_assigned);
        assert_eq!(summary.assignment.method, crate::experiment::Method::B);

        let scores: HashMap<String, DailyScore> = store.get_all(SCORES_KEY);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["2026-02-10"], DailyScore { score: 2, total: 2 });
        assert_eq!(store.get_scalar(METHOD_KEY).unwrap(), "B");
    }

    #[test]
    fn session_survives_a_serde_roundtrip() {
        let mut session = PracticeSession::new(Topic::History);
        session.select(1);
        session.advance();

        let json = serde_json::to_string(&session).unwrap();
        let restored: PracticeSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.topic(), Topic::History);
        assert_eq!(restored.score(), 1);
        assert!(restored.submitted());
    }
}
