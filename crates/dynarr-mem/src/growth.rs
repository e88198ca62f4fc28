use crate::{ArrayError, Result};

/// Multiplier applied to the capacity of a full array.
///
/// Always in `(1.0, 2.0]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct GrowthFactor(f64);

impl GrowthFactor {

    pub const MAX: f64 = 2.0;

    pub const DEFAULT: Self = Self(1.5);

    pub fn new(factor: f64) -> Result<Self> {
        // NaN fails both comparisons
        if factor > 1.0 && factor <= Self::MAX {
            Ok(Self(factor))
        } else {
            Err(ArrayError::InvalidGrowthFactor { factor, max: Self::MAX })
        }
    }

    #[inline(always)]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Capacity after one growth step: `floor(current * factor) + 1`.
    #[inline]
    pub fn next_capacity(self, current: usize) -> usize {
        ((current as f64 * self.0).floor() as usize).saturating_add(1)
    }

    /// Capacity able to hold `required` elements, or `None` if `current`
    /// already does. Snaps to `required` when one step is not enough.
    #[inline]
    pub fn grow(self, current: usize, required: usize) -> Option<usize> {
        if required <= current { None }
        else { Some(self.next_capacity(current).max(required)) }
    }
}

impl Default for GrowthFactor {

    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for GrowthFactor {

    type Error = ArrayError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn rejects_out_of_range_factors() {
        for factor in [1.0, 0.5, -3.0, 2.01, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GrowthFactor::new(factor),
                Err(ArrayError::InvalidGrowthFactor { max, .. }) if max == 2.0
            ));
        }
        assert_eq!(GrowthFactor::new(2.0).map(GrowthFactor::get), Ok(2.0));
        assert_eq!(GrowthFactor::new(1.0001).map(GrowthFactor::get), Ok(1.0001));
    }

    #[test]
    fn next_capacity_floors_then_adds_one() {
        let g = GrowthFactor::DEFAULT;
        assert_eq!(g.next_capacity(10), 16);
        assert_eq!(g.next_capacity(16), 25);
        assert_eq!(g.next_capacity(1), 2);
        assert_eq!(g.next_capacity(0), 1);
        assert_eq!(GrowthFactor::new(2.0).unwrap().next_capacity(7), 15);
    }

    #[test]
    fn grow_snaps_to_required() {
        let g = GrowthFactor::DEFAULT;
        assert_eq!(g.grow(10, 10), None);
        assert_eq!(g.grow(10, 3), None);
        assert_eq!(g.grow(10, 11), Some(16));
        assert_eq!(g.grow(10, 40), Some(40));
    }
}
