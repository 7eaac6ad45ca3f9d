//! Property tests for the pure engines.
//!
//! The simulator and rubric promise bit-identical results for identical
//! inputs and bounded execution for every input; these properties hold over
//! the whole input domain, not just the demo values.

use proptest::prelude::*;

use pathway_core::drill::{
    evaluate, simulate, CauseChoice, CulpritChoice, FixChoice, Variant, STEP_LIMIT,
};

fn any_variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::all().to_vec())
}

fn any_cause() -> impl Strategy<Value = CauseChoice> {
    prop::sample::select(CauseChoice::all().to_vec())
}

fn any_culprit() -> impl Strategy<Value = CulpritChoice> {
    prop::sample::select(CulpritChoice::all().to_vec())
}

fn any_fix() -> impl Strategy<Value = FixChoice> {
    prop::sample::select(FixChoice::all().to_vec())
}

proptest! {
    #[test]
    fn simulate_is_deterministic(n in -100i64..=100, variant in any_variant()) {
        prop_assert_eq!(simulate(n, variant), simulate(n, variant));
    }

    #[test]
    fn simulate_never_outruns_the_budget(n in -100i64..=100, variant in any_variant()) {
        let outcome = simulate(n, variant);
        prop_assert!(outcome.steps() <= STEP_LIMIT + 1);
        if outcome.steps() > STEP_LIMIT {
            prop_assert!(outcome.is_stuck());
        }
    }

    #[test]
    fn evaluate_is_deterministic(
        cause in any_cause(),
        culprit in any_culprit(),
        fix in any_fix(),
    ) {
        prop_assert_eq!(
            evaluate(cause, culprit, fix),
            evaluate(cause, culprit, fix)
        );
    }

    #[test]
    fn evaluate_scores_stay_on_the_ladder(
        cause in any_cause(),
        culprit in any_culprit(),
        fix in any_fix(),
    ) {
        let result = evaluate(cause, culprit, fix);
        prop_assert!([35, 55, 75, 95].contains(&result.score));
        prop_assert_eq!(result.strengths.len() + result.improvements.len(), 4);
    }
}
