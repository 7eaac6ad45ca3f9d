//! The guided debugging drill.
//!
//! Four pieces: fixed content, the multiple-choice rubric, the bounded loop
//! simulator, and the state machine tying them to the progress store.

pub mod content;
pub mod engine;
pub mod rubric;
pub mod simulator;

pub use content::{GrowthStage, CORRECTED_SNIPPET, DRILL_PROMPT, PYTHON_SNIPPET};
pub use engine::{DrillEngine, DrillEvent, DrillSnapshot, DrillState};
pub use rubric::{evaluate, CauseChoice, CulpritChoice, EvaluationResult, FixChoice};
pub use simulator::{simulate, RunOutcome, Variant, DEMO_N, STEP_LIMIT};
