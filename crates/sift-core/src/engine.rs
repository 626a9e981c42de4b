//! Per-category probability computation.

use bigdecimal::{BigDecimal, One, RoundingMode, Zero};

use crate::error::EngineError;
use crate::source::LikelihoodSource;

/// Naive-Bayes probability engine over a [`LikelihoodSource`].
///
/// Wraps the source and computes priors, likelihood products, and
/// posteriors for single categories; the ranking methods in this crate
/// build on these to score every known category. All operations take
/// `&self` and are safe to call concurrently.
#[derive(Debug, Clone)]
pub struct BayesClassifier<S> {
    source: S,
}

impl<S> BayesClassifier<S> {
    /// Build an engine reading from `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying likelihood source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the engine, returning the source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: LikelihoodSource> BayesClassifier<S> {
    /// Product of `feature_likelihood(f, category)` over every feature,
    /// starting from the identity `1`.
    ///
    /// An empty featureset yields exactly `1`: no evidence, no adjustment
    /// to the prior. Repeated features repeat their contribution. A
    /// likelihood outside `[0, 1]` is a contract violation by the source
    /// and fails with [`EngineError::LikelihoodOutOfRange`] instead of
    /// being folded into the product.
    pub fn features_likelihood_product(
        &self,
        features: &[S::Feature],
        category: &S::Category,
    ) -> Result<BigDecimal, EngineError> {
        let zero = BigDecimal::zero();
        let one = BigDecimal::one();
        let mut product = BigDecimal::one();
        for feature in features {
            let likelihood = self.source.feature_likelihood(feature, category);
            if likelihood < zero || likelihood > one {
                return Err(EngineError::LikelihoodOutOfRange { value: likelihood });
            }
            product = product * likelihood;
        }
        Ok(product)
    }

    /// Relative training frequency of `category`:
    /// `category_count(category) / categories_total()`, rounded to two
    /// decimal places with round-half-up.
    ///
    /// The fixed 2-decimal rounding happens before the prior is combined
    /// with the likelihood product. It discards precision early, but it is
    /// an observable compatibility contract: downstream consumers depend
    /// on the exact resulting values, so it must not be "fixed".
    ///
    /// Fails with [`EngineError::UndefinedPrior`] when
    /// `categories_total()` is zero.
    pub fn category_prior(&self, category: &S::Category) -> Result<BigDecimal, EngineError> {
        let total = self.source.categories_total();
        if total == 0 {
            return Err(EngineError::UndefinedPrior);
        }
        let quotient = BigDecimal::from(self.source.category_count(category))
            / BigDecimal::from(total);
        Ok(quotient.with_scale_round(2, RoundingMode::HalfUp))
    }

    /// Unnormalized posterior score for `category` given `features`:
    /// rounded prior times unrounded likelihood product.
    pub fn category_posterior(
        &self,
        features: &[S::Feature],
        category: &S::Category,
    ) -> Result<BigDecimal, EngineError> {
        Ok(self.category_prior(category)? * self.features_likelihood_product(features, category)?)
    }
}
