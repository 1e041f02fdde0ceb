use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use float_cmp::{ApproxEq, F64Margin};

/// Absolute tolerance applied when comparing usage percentages.
/// Accumulated `100 / n` contributions rarely add up to exactly `100.0`.
pub const USAGE_EPSILON: f64 = 1e-6;

///Wrapper around [`float_cmp::ApproxEq`] for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within [`USAGE_EPSILON`] of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

const MARGIN: F64Margin = F64Margin {
    epsilon: USAGE_EPSILON,
    ulps: 4,
};

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        self.0.approx_eq(other.0, MARGIN)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulated_thirds_fill_exactly() {
        let third = 100.0 / 3.0;
        let usage = third + third + third;
        assert!(FPA(usage) <= FPA(100.0));
        assert_eq!(FPA(usage), FPA(100.0));
    }

    #[test]
    fn sevenths_do_not_overflow() {
        let seventh = 100.0 / 7.0;
        let usage = (0..7).fold(0.0, |acc, _| acc + seventh);
        assert!(FPA(usage) <= FPA(100.0));
        assert!(FPA(usage + seventh) > FPA(100.0));
    }

    #[test]
    fn clearly_different_values_are_ordered() {
        assert!(FPA(99.0) < FPA(100.0));
        assert!(FPA(100.01) > FPA(100.0));
        assert_ne!(FPA(50.0), FPA(50.001));
    }
}
