//! Contract between the engine and the learned frequency model.

use bigdecimal::BigDecimal;

/// Read-only view of learned per-category and per-feature occurrence
/// counts.
///
/// The engine is composed against this trait and performs no mutation
/// through it. If an independent learning process mutates the underlying
/// counts concurrently, each engine call must still observe an internally
/// consistent snapshot; that synchronization discipline belongs to the
/// implementation, not to the engine.
pub trait LikelihoodSource {
    /// Feature token type. Opaque to the engine.
    type Feature;
    /// Category label type. Opaque to the engine.
    type Category;

    /// Number of training observations labelled with `category`;
    /// `0` if the category was never observed.
    fn category_count(&self, category: &Self::Category) -> u64;

    /// Sum of [`category_count`](Self::category_count) over all known
    /// categories.
    fn categories_total(&self) -> u64;

    /// Every category the model knows about. May be empty when nothing
    /// has been learned. No iteration order is promised; the ranker
    /// imposes its own total order on results.
    fn categories(&self) -> Vec<Self::Category>;

    /// Smoothed estimate of P(`feature` | `category`), in `[0, 1]`.
    ///
    /// Implementations must blend raw frequencies with a prior weight so
    /// an unseen (feature, category) pair never yields exactly `0`;
    /// otherwise one unseen feature would zero out the whole likelihood
    /// product for an otherwise best-matching category.
    fn feature_likelihood(
        &self,
        feature: &Self::Feature,
        category: &Self::Category,
    ) -> BigDecimal;
}
