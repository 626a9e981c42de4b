//! In-memory frequency model for the naive-Bayes engine.
//!
//! [`FrequencyModel`] accumulates per-category and per-feature occurrence
//! counts from labelled featuresets and exposes them through
//! [`sift_core::LikelihoodSource`], smoothing per-feature likelihoods with
//! a weighted average so unseen (feature, category) pairs never score
//! exactly zero.

pub mod model;
pub mod smoothing;

pub use model::FrequencyModel;
pub use smoothing::Smoothing;
