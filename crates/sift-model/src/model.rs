//! Count accumulation and smoothed likelihood estimation.

use std::collections::HashMap;
use std::hash::Hash;

use bigdecimal::{BigDecimal, Zero};
use sift_core::LikelihoodSource;

use crate::smoothing::Smoothing;

/// Learned occurrence counts over categories and features.
///
/// `train` records one labelled observation at a time; the engine reads
/// the resulting counts through [`LikelihoodSource`]. The model never
/// forgets and carries no persistence — it is the in-memory collaborator
/// the engine is composed against.
#[derive(Debug, Clone)]
pub struct FrequencyModel<T, K> {
    smoothing: Smoothing,
    category_counts: HashMap<K, u64>,
    feature_counts: HashMap<K, HashMap<T, u64>>,
    feature_totals: HashMap<T, u64>,
}

impl<T, K> FrequencyModel<T, K> {
    /// Empty model with default smoothing (weight `1`, assumed `0.5`).
    pub fn new() -> Self {
        Self::with_smoothing(Smoothing::default())
    }

    /// Empty model with explicit smoothing parameters.
    pub fn with_smoothing(smoothing: Smoothing) -> Self {
        Self {
            smoothing,
            category_counts: HashMap::new(),
            feature_counts: HashMap::new(),
            feature_totals: HashMap::new(),
        }
    }
}

impl<T, K> Default for FrequencyModel<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> FrequencyModel<T, K>
where
    T: Eq + Hash + Clone,
    K: Eq + Hash + Clone,
{
    /// Record one observation: a featureset labelled with `category`.
    ///
    /// Increments the category count by one and every feature's
    /// per-category and overall counts by its number of occurrences in
    /// `features` (duplicates count).
    pub fn train(&mut self, category: K, features: &[T]) {
        *self.category_counts.entry(category.clone()).or_insert(0) += 1;
        let per_category = self.feature_counts.entry(category).or_default();
        for feature in features {
            *per_category.entry(feature.clone()).or_insert(0) += 1;
            *self.feature_totals.entry(feature.clone()).or_insert(0) += 1;
        }
    }

    /// Occurrences of `feature` in observations labelled `category`.
    fn feature_count(&self, feature: &T, category: &K) -> u64 {
        self.feature_counts
            .get(category)
            .and_then(|counts| counts.get(feature))
            .copied()
            .unwrap_or(0)
    }

    /// Occurrences of `feature` across all categories.
    fn feature_total(&self, feature: &T) -> u64 {
        self.feature_totals.get(feature).copied().unwrap_or(0)
    }

    /// Raw P(feature | category) = count(feature, category) /
    /// category_count(category), and `0` for an unlearned category.
    ///
    /// Capped at `1`: a feature repeated within a single observation can
    /// push its count past the category count, and the likelihood handed
    /// to the engine must stay inside `[0, 1]`.
    fn base_probability(&self, feature: &T, category: &K) -> BigDecimal {
        let category_count = self.category_counts.get(category).copied().unwrap_or(0);
        if category_count == 0 {
            return BigDecimal::zero();
        }
        let count = self.feature_count(feature, category).min(category_count);
        BigDecimal::from(count) / BigDecimal::from(category_count)
    }
}

impl<T, K> LikelihoodSource for FrequencyModel<T, K>
where
    T: Eq + Hash + Clone,
    K: Eq + Hash + Clone,
{
    type Feature = T;
    type Category = K;

    fn category_count(&self, category: &K) -> u64 {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    fn categories_total(&self) -> u64 {
        self.category_counts.values().sum()
    }

    fn categories(&self) -> Vec<K> {
        self.category_counts.keys().cloned().collect()
    }

    /// Weighted average of the raw frequency estimate and the assumed
    /// probability: `(weight * assumed + n * p) / (weight + n)` where `n`
    /// is the feature's overall occurrence count. With `weight > 0` this
    /// is strictly positive even for pairs never observed together.
    fn feature_likelihood(&self, feature: &T, category: &K) -> BigDecimal {
        let n = BigDecimal::from(self.feature_total(feature));
        let numerator = self.smoothing.weight() * self.smoothing.assumed()
            + &n * self.base_probability(feature, category);
        numerator / (self.smoothing.weight() + &n)
    }
}
