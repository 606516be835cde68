pub mod cost;
pub mod energy;
pub mod rate;

use std::ops::Mul;

use serde::{Deserialize, Serialize};

/// Value tagged with its energy and currency exponents, so that kWh, $/kWh and $ never mix.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Sum,
    derive_more::From,
)]
pub struct Quantity<T, const ENERGY: isize, const COST: isize>(pub T);

impl<const ENERGY: isize, const COST: isize> Quantity<f64, ENERGY, COST> {
    pub const ZERO: Self = Self(0.0);

    /// Smaller of the two, `self` on a tie.
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of the two, `self` on a tie.
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// Scaling by a plain factor keeps the dimension.
impl<T: Mul<Output = T>, const ENERGY: isize, const COST: isize> Mul<T>
    for Quantity<T, ENERGY, COST>
{
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        Self(self.0 * factor)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::quantity::energy::KilowattHours;

    #[test]
    fn test_min_max() {
        let (low, high) = (KilowattHours::from(1.5), KilowattHours::from(4.0));
        assert_eq!(low.min(high), low);
        assert_eq!(high.min(low), low);
        assert_eq!(low.max(high), high);
        assert_eq!(high.max(low), high);
    }

    #[test]
    fn test_clamp_to_zero() {
        let deficit = KilowattHours::from(2.0) - KilowattHours::from(5.0);
        assert_eq!(deficit.max(KilowattHours::ZERO), KilowattHours::ZERO);
    }

    #[test]
    fn test_scale() {
        assert_abs_diff_eq!((KilowattHours::from(316.4) * 0.3).0, 94.92, epsilon = 1e-9);
    }

    #[test]
    fn test_sum() {
        let total = [1.0, 2.5, 0.25].into_iter().map(KilowattHours::from).sum::<KilowattHours>();
        assert_abs_diff_eq!(total.0, 3.75);
    }
}
