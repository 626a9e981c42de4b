//! Property-based tests for frequency-model invariants.

use bigdecimal::{BigDecimal, One, Zero};
use proptest::prelude::*;
use sift_core::{BayesClassifier, LikelihoodSource};
use sift_model::FrequencyModel;

/// One training observation: a category id and a small featureset.
fn observations_strategy() -> impl Strategy<Value = Vec<(u8, Vec<u8>)>> {
    prop::collection::vec(
        (0u8..5, prop::collection::vec(0u8..20, 0..6)),
        1..40,
    )
}

fn trained_model(observations: &[(u8, Vec<u8>)]) -> FrequencyModel<u8, u8> {
    let mut model = FrequencyModel::new();
    for (category, features) in observations {
        model.train(*category, features);
    }
    model
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1_000))]

    #[test]
    fn likelihood_stays_in_the_unit_interval(observations in observations_strategy(), feature in 0u8..25, category in 0u8..6) {
        let model = trained_model(&observations);
        let likelihood = model.feature_likelihood(&feature, &category);

        // Strictly positive (zero-frequency problem) and never above 1.
        prop_assert!(likelihood > BigDecimal::zero());
        prop_assert!(likelihood <= BigDecimal::one());
    }

    #[test]
    fn totals_are_the_sum_of_category_counts(observations in observations_strategy()) {
        let model = trained_model(&observations);
        let sum: u64 = model
            .categories()
            .iter()
            .map(|c| model.category_count(c))
            .sum();
        prop_assert_eq!(model.categories_total(), sum);
        prop_assert_eq!(model.categories_total(), observations.len() as u64);
    }

    #[test]
    fn classification_covers_every_trained_category(observations in observations_strategy(), features in prop::collection::vec(0u8..25, 0..6)) {
        let model = trained_model(&observations);
        let known = model.categories().len();
        let engine = BayesClassifier::new(model);

        let ranked = engine.classify_detailed(&features).unwrap();
        prop_assert_eq!(ranked.len(), known);

        let best = engine.classify(&features).unwrap().expect("at least one observation trained");
        for entry in &ranked {
            prop_assert!(best.probability() >= entry.probability());
        }
    }
}
