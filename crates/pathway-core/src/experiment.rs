//! Hidden A/B method assignment.
//!
//! On the first visit to the results flow each profile is bucketed into
//! method "A" or "B" by a fair coin flip and the value is persisted. The
//! assignment is inert bookkeeping - nothing branches on it - but it must
//! stay stable: once a value is stored it is never reassigned, and the
//! next-review date is written only alongside a fresh "B" assignment.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::progress::{date_key, METHOD_KEY, NEXT_REVIEW_KEY};
use crate::storage::ProgressStore;

/// Experiment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    A,
    B,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::A => "A",
            Method::B => "B",
        }
    }

    /// Parse a stored value; anything unrecognized reads as "A", matching
    /// the store's default-on-corrupt policy.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "B" => Method::B,
            _ => Method::A,
        }
    }
}

/// Source of the assignment coin flip.
///
/// The seam exists so tests can force either bucket; production code wraps
/// an [`Rng`] in [`RngCoin`] for a fair flip.
pub trait CoinFlip {
    fn flip(&mut self) -> bool;
}

/// Fair coin backed by any RNG (seeded or thread-local).
pub struct RngCoin<R: Rng>(pub R);

impl<R: Rng> CoinFlip for RngCoin<R> {
    fn flip(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// The stored assignment, with whether this call created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodAssignment {
    pub method: Method,
    pub next_review: Option<String>,
    pub newly_assigned: bool,
}

/// Assign a method if none is stored yet; otherwise report the existing one.
///
/// Idempotent: a present value is returned untouched, whatever it is, and
/// no keys are written.
pub fn assign_method<S: ProgressStore, C: CoinFlip>(
    store: &S,
    coin: &mut C,
) -> Result<MethodAssignment, StoreError> {
    assign_method_on(store, coin, Local::now().date_naive())
}

/// [`assign_method`] with an explicit "today" for deterministic tests.
pub fn assign_method_on<S: ProgressStore, C: CoinFlip>(
    store: &S,
    coin: &mut C,
    today: NaiveDate,
) -> Result<MethodAssignment, StoreError> {
    if let Some(existing) = store.get_scalar(METHOD_KEY) {
        return Ok(MethodAssignment {
            method: Method::parse(&existing),
            next_review: store.get_scalar(NEXT_REVIEW_KEY),
            newly_assigned: false,
        });
    }

    let method = if coin.flip() { Method::A } else { Method::B };
    store.set_scalar(METHOD_KEY, method.as_str())?;

    let mut next_review = None;
    if method == Method::B {
        let tomorrow = date_key(today + Duration::days(1));
        store.set_scalar(NEXT_REVIEW_KEY, &tomorrow)?;
        next_review = Some(tomorrow);
    }

    Ok(MethodAssignment {
        method,
        next_review,
        newly_assigned: true,
    })
}
