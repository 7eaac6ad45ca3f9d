//! Integration tests for the drill flow against the on-disk store.
//!
//! These exercise the complete path a CLI session takes: park the engine in
//! the store between actions, complete an attempt, and verify what survives
//! a process restart.

use std::collections::HashMap;

use pathway_core::drill::{CauseChoice, CulpritChoice, DrillEngine, DrillState, FixChoice};
use pathway_core::progress::{
    DailyScore, DrillHistoryEntry, DRILL_HISTORY_KEY, FOREST_TREES_KEY, SCORES_KEY,
};
use pathway_core::storage::{Database, ProgressStore};

const ATTEMPT_KEY: &str = "drill_attempt";

fn park(store: &Database, engine: &DrillEngine) {
    let json = serde_json::to_string(engine).unwrap();
    store.set_scalar(ATTEMPT_KEY, &json).unwrap();
}

fn unpark(store: &Database) -> DrillEngine {
    store
        .get_scalar(ATTEMPT_KEY)
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

#[test]
fn full_attempt_with_parked_engine() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pathway.db");
    let store = Database::open_at(&path).unwrap();

    // Each action loads the parked attempt, acts, and parks it again, the
    // way separate CLI invocations do.
    let mut engine = unpark(&store);
    engine.next(&store).unwrap();
    park(&store, &engine);

    let mut engine = unpark(&store);
    assert_eq!(engine.state(), DrillState::Cause);
    engine.select_cause(CauseChoice::CORRECT);
    engine.next(&store).unwrap();
    park(&store, &engine);

    let mut engine = unpark(&store);
    engine.select_culprit(CulpritChoice::CORRECT);
    engine.next(&store).unwrap();
    park(&store, &engine);

    let mut engine = unpark(&store);
    engine.select_fix(FixChoice::ReturnInLoop);
    let event = engine.next(&store).unwrap();
    assert!(event.is_some());
    park(&store, &engine);

    // Two right out of three.
    let engine = unpark(&store);
    assert_eq!(engine.state(), DrillState::Evaluated);
    assert_eq!(engine.result().unwrap().score, 75);

    let history: HashMap<String, DrillHistoryEntry> = store.get_all(DRILL_HISTORY_KEY);
    assert_eq!(history.len(), 1);
    assert_eq!(history.values().next().unwrap().score, 75);
    assert_eq!(store.get_counter(FOREST_TREES_KEY), 1);
}

#[test]
fn records_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pathway.db");

    {
        let store = Database::open_at(&path).unwrap();
        let mut engine = DrillEngine::new();
        engine.next(&store).unwrap();
        engine.select_cause(CauseChoice::CORRECT);
        engine.next(&store).unwrap();
        engine.select_culprit(CulpritChoice::CORRECT);
        engine.next(&store).unwrap();
        engine.select_fix(FixChoice::CORRECT);
        engine.next(&store).unwrap();
    }

    let store = Database::open_at(&path).unwrap();
    let history: HashMap<String, DrillHistoryEntry> = store.get_all(DRILL_HISTORY_KEY);
    assert_eq!(history.values().next().unwrap().score, 95);
    assert_eq!(store.get_counter(FOREST_TREES_KEY), 1);
}

#[test]
fn new_attempt_leaves_durable_records_alone() {
    let dir = tempfile::tempdir().unwrap();
    let store = Database::open_at(&dir.path().join("pathway.db")).unwrap();

    let mut engine = DrillEngine::new();
    engine.next(&store).unwrap();
    engine.select_cause(CauseChoice::NeverRuns);
    engine.next(&store).unwrap();
    engine.select_culprit(CulpritChoice::TotalLine);
    engine.next(&store).unwrap();
    engine.select_fix(FixChoice::FlipCondition);
    engine.next(&store).unwrap();
    assert_eq!(engine.result().unwrap().score, 35);

    engine.new_attempt();
    assert_eq!(engine.state(), DrillState::Situation);
    assert!(engine.result().is_none());

    assert_eq!(store.get_counter(FOREST_TREES_KEY), 1);
    let history: HashMap<String, DrillHistoryEntry> = store.get_all(DRILL_HISTORY_KEY);
    assert_eq!(history.len(), 1);
}

#[test]
fn practice_and_drill_records_do_not_collide() {
    let dir = tempfile::tempdir().unwrap();
    let store = Database::open_at(&dir.path().join("pathway.db")).unwrap();

    pathway_core::progress::record_practice_score(&store, "2026-02-10", 2, 2).unwrap();
    pathway_core::progress::record_drill_completion(&store, "2026-02-10", 55).unwrap();

    let scores: HashMap<String, DailyScore> = store.get_all(SCORES_KEY);
    let history: HashMap<String, DrillHistoryEntry> = store.get_all(DRILL_HISTORY_KEY);
    assert_eq!(scores["2026-02-10"], DailyScore { score: 2, total: 2 });
    assert_eq!(history["2026-02-10"], DrillHistoryEntry { score: 55 });
}
