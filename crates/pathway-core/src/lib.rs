//! # Pathway Core Library
//!
//! This library provides the core logic for Pathway, a small guided-learning
//! app: a short topic quiz and a "debug this code" drill with locally
//! computed feedback. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any richer UI is a
//! thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Drill Engine**: An explicit state machine for the four-step guided
//!   flow (situation, cause, culprit, fix), evaluated by a deterministic
//!   multiple-choice rubric
//! - **Loop Simulator**: Bounded emulation of four variants of the drill's
//!   buggy loop under a fixed step budget
//! - **Progress Store**: A key-value store (SQLite-backed) holding daily
//!   scores, drill history, the forest counter, and the method assignment
//! - **Evaluate Endpoint**: A standalone HTTP contract around the heuristic
//!   free-text scorer (unused by the drill flow)
//!
//! ## Key Components
//!
//! - [`DrillEngine`]: Core drill state machine
//! - [`Database`]: Durable progress persistence
//! - [`Config`]: Application configuration management
//! - [`ProgressStore`]: Store abstraction injected into the engines

pub mod api;
pub mod drill;
pub mod error;
pub mod experiment;
pub mod lesson;
pub mod practice;
pub mod progress;
pub mod scorer;
pub mod storage;

pub use drill::{
    CauseChoice, CulpritChoice, DrillEngine, DrillEvent, DrillSnapshot, DrillState,
    EvaluationResult, FixChoice, GrowthStage, RunOutcome, Variant,
};
pub use error::{ConfigError, CoreError, Result, StoreError};
pub use experiment::{CoinFlip, Method, MethodAssignment, RngCoin};
pub use lesson::{lesson_for, LessonContent};
pub use practice::{PracticeSession, SessionOutcome, Topic};
pub use progress::{DailyScore, DrillHistoryEntry, ForestStats};
pub use storage::{Config, Database, MemoryStore, ProgressStore};
