//! Generic naive-Bayes classification engine.
//!
//! The engine ranks known categories for an input featureset by
//! `classify(f1..fn) = argmax(P(cat) * PROD(P(fi|cat)))`, reading learned
//! counts and smoothed per-feature likelihoods through the
//! [`LikelihoodSource`] trait. It holds no mutable state of its own: every
//! call is a pure function of the source's current counts.
//!
//! All probability arithmetic uses [`bigdecimal::BigDecimal`] so results
//! are reproducible bit-for-bit across platforms, including the fixed
//! 2-decimal half-up rounding of category priors.

pub mod classification;
pub mod engine;
pub mod error;
pub mod source;

mod rank;

pub use classification::Classification;
pub use engine::BayesClassifier;
pub use error::EngineError;
pub use source::LikelihoodSource;
