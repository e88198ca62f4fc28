#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArrayError {
    /// `current` is `None` when a container was being created.
    InvalidCapacity {
        requested: usize,
        current: Option<usize>,
    },
    InvalidGrowthFactor {
        factor: f64,
        max: f64,
    },
    /// Valid indices are `0..bound`.
    IndexOutOfRange {
        index: usize,
        bound: usize,
    },
    NullInput,
    NotComparable,
}

impl core::fmt::Display for ArrayError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCapacity { requested, current: None } => {
                write!(f, "capacity must be greater than zero, got {}", requested)
            },
            Self::InvalidCapacity { requested, current: Some(current) } => {
                write!(f, "requested capacity {} is not greater than current capacity {}", requested, current)
            },
            Self::InvalidGrowthFactor { factor, max } => {
                write!(f, "growth factor must be greater than 1.0 and not greater than {}, got {}", max, factor)
            },
            Self::IndexOutOfRange { index, bound: 0 } => {
                write!(f, "index {} out of range, array is empty", index)
            },
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {} out of range 0..={}", index, bound - 1)
            },
            Self::NullInput => {
                write!(f, "required input was absent")
            },
            Self::NotComparable => {
                write!(f, "element has no ordering")
            },
        }
    }
}

impl core::error::Error for ArrayError {}
