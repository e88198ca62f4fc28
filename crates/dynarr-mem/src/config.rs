use crate::{ArrayError, GrowthFactor, Result};

pub const DEFAULT_CAPACITY: usize = 10;

/// Settings a [`DynamicArray`](crate::DynamicArray) is created from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrayConfig {
    pub capacity: usize,
    pub growth_factor: f64,
}

impl ArrayConfig {

    pub fn new(capacity: usize, growth_factor: f64) -> Self {
        Self {
            capacity,
            growth_factor,
        }
    }

    #[inline(always)]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[inline(always)]
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Checks capacity first, then the growth factor.
    pub fn validate(&self) -> Result<GrowthFactor> {
        if self.capacity == 0 {
            return Err(ArrayError::InvalidCapacity { requested: 0, current: None })
        }
        GrowthFactor::new(self.growth_factor)
    }
}

impl Default for ArrayConfig {

    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            growth_factor: GrowthFactor::DEFAULT.get(),
        }
    }
}
