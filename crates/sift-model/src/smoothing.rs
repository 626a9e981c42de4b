//! Weighted-average smoothing parameters.

use bigdecimal::{BigDecimal, One, Zero};

/// Parameters of the weighted-average likelihood estimate
/// `(weight * assumed + n * p) / (weight + n)`.
///
/// `weight` is the strength of the assumed probability, expressed in
/// pseudo-observations; `assumed` is the likelihood attributed to a
/// feature nothing has been learned about. The defaults (`1` and `0.5`)
/// give every unseen feature a neutral, strictly positive estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothing {
    weight: BigDecimal,
    assumed: BigDecimal,
}

impl Smoothing {
    /// Create smoothing parameters with validation.
    ///
    /// Returns `None` unless `weight > 0` and `assumed` is in `[0, 1]`.
    /// A non-positive weight would reintroduce the zero-frequency problem
    /// the smoothing exists to avoid.
    pub fn new(weight: BigDecimal, assumed: BigDecimal) -> Option<Self> {
        if weight <= BigDecimal::zero() {
            return None;
        }
        if assumed < BigDecimal::zero() || assumed > BigDecimal::one() {
            return None;
        }
        Some(Self { weight, assumed })
    }

    /// Weight of the assumed probability, in pseudo-observations.
    pub fn weight(&self) -> &BigDecimal {
        &self.weight
    }

    /// Likelihood assumed for a feature with no observations.
    pub fn assumed(&self) -> &BigDecimal {
        &self.assumed
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            weight: BigDecimal::one(),
            assumed: BigDecimal::one() / BigDecimal::from(2u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_weight_one_assumed_half() {
        let smoothing = Smoothing::default();
        assert_eq!(smoothing.weight(), &BigDecimal::one());
        assert_eq!(
            smoothing.assumed(),
            &"0.5".parse::<BigDecimal>().unwrap()
        );
    }

    #[test]
    fn rejects_non_positive_weight() {
        assert!(Smoothing::new(BigDecimal::zero(), BigDecimal::one()).is_none());
        assert!(Smoothing::new("-1".parse().unwrap(), BigDecimal::zero()).is_none());
    }

    #[test]
    fn rejects_assumed_outside_unit_interval() {
        assert!(Smoothing::new(BigDecimal::one(), "-0.1".parse().unwrap()).is_none());
        assert!(Smoothing::new(BigDecimal::one(), "1.1".parse().unwrap()).is_none());
        assert!(Smoothing::new(BigDecimal::one(), BigDecimal::zero()).is_some());
        assert!(Smoothing::new(BigDecimal::one(), BigDecimal::one()).is_some());
    }
}
