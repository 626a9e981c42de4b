//! Immutable classification results.

use std::fmt;

use bigdecimal::{BigDecimal, One};
use serde::{Deserialize, Serialize};

/// One scored outcome: a featureset, the category it was scored against,
/// and the posterior probability assigned by the engine.
///
/// A `Classification` is built exactly once per (featureset, category)
/// scoring and never updated in place; rescoring produces a new value.
/// The probability is conceptually in `[0, 1]` but is not clamped — the
/// engine neither renormalizes nor hides out-of-range values produced by
/// smoothing or long products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification<T, K> {
    featureset: Vec<T>,
    category: K,
    probability: BigDecimal,
}

impl<T, K> Classification<T, K> {
    /// Build a classification with the default probability of `1`.
    ///
    /// Used by callers that construct the record before scoring it.
    pub fn new(featureset: Vec<T>, category: K) -> Self {
        Self::with_probability(featureset, category, BigDecimal::one())
    }

    /// Build a classification with an explicit probability.
    pub fn with_probability(featureset: Vec<T>, category: K, probability: BigDecimal) -> Self {
        Self {
            featureset,
            category,
            probability,
        }
    }

    /// The featureset that was classified.
    pub fn featureset(&self) -> &[T] {
        &self.featureset
    }

    /// The category the featureset was scored against.
    pub fn category(&self) -> &K {
        &self.category
    }

    /// The posterior probability of the category given the featureset.
    pub fn probability(&self) -> &BigDecimal {
        &self.probability
    }
}

/// Renders as
/// `Classification [category=<category>, probability=<probability>, featureset=[f1, f2]]`.
///
/// Field order and labels are load-bearing for downstream log scrapers.
impl<T: fmt::Display, K: fmt::Display> fmt::Display for Classification<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Classification [category={}, probability={}, featureset=[",
            self.category, self.probability
        )?;
        for (i, feature) in self.featureset.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{feature}")?;
        }
        write!(f, "]]")
    }
}
