//! Ranking of all known categories for a featureset.

use tracing::debug;

use crate::classification::Classification;
use crate::engine::BayesClassifier;
use crate::error::EngineError;
use crate::source::LikelihoodSource;

impl<S> BayesClassifier<S>
where
    S: LikelihoodSource,
    S::Feature: Clone,
    S::Category: Clone + Ord,
{
    /// Score every known category and return the classifications ordered
    /// ascending by probability.
    ///
    /// The result holds exactly one entry per category in
    /// [`LikelihoodSource::categories`], even when probabilities tie: the
    /// sort is a stable sort over an explicit list keyed on
    /// `(probability, category)`, so a probability tie between distinct
    /// categories can never collapse two entries into one. An empty
    /// category set yields an empty collection, not an error.
    pub fn classify_detailed(
        &self,
        features: &[S::Feature],
    ) -> Result<Vec<Classification<S::Feature, S::Category>>, EngineError> {
        let categories = self.source().categories();
        debug!(
            categories = categories.len(),
            features = features.len(),
            "ranking categories"
        );

        let mut ranked = Vec::with_capacity(categories.len());
        for category in categories {
            let probability = self.category_posterior(features, &category)?;
            ranked.push(Classification::with_probability(
                features.to_vec(),
                category,
                probability,
            ));
        }
        ranked.sort_by(|a, b| {
            a.probability()
                .cmp(b.probability())
                .then_with(|| a.category().cmp(b.category()))
        });
        Ok(ranked)
    }

    /// The single best classification: the maximum-probability entry of
    /// [`classify_detailed`](Self::classify_detailed).
    ///
    /// Returns `Ok(None)` when no categories are known — a defined
    /// empty-state outcome, distinct from any error and from a genuine
    /// zero-probability result. When several categories achieve the same
    /// maximum probability, the one whose category orders last under
    /// `Ord` is returned: a deterministic but essentially arbitrary pick
    /// among ties, not a meaningful preference.
    pub fn classify(
        &self,
        features: &[S::Feature],
    ) -> Result<Option<Classification<S::Feature, S::Category>>, EngineError> {
        Ok(self.classify_detailed(features)?.pop())
    }
}
