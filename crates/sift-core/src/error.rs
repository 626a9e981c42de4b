//! Errors raised while scoring categories.

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Failure conditions surfaced by the probability engine.
///
/// These are local, recoverable conditions returned to the caller; the
/// engine never panics on likelihood-source output. Note that "no
/// categories known" is not an error — `classify` reports it as `Ok(None)`
/// and `classify_detailed` as an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `categories_total()` is zero, so the prior `count / total` is
    /// undefined for every category.
    #[error("category prior is undefined: likelihood source reports zero total observations")]
    UndefinedPrior,

    /// The likelihood source violated its contract by returning a
    /// per-feature likelihood outside `[0, 1]`.
    #[error("likelihood source returned {value}, outside the [0, 1] likelihood range")]
    LikelihoodOutOfRange {
        /// The offending value, as returned by the source.
        value: BigDecimal,
    },
}
