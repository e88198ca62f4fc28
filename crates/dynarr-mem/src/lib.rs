//! Growable indexed array with a configurable growth factor, strict input
//! validation and an in-place quicksort.
//!
//! ```rust
//! use dynarr_mem::DynamicArray;
//!
//! let mut array = DynamicArray::with_capacity(2).unwrap();
//! array.add(3);
//! array.add(1);
//! array.add(2);
//! assert_eq!(array.capacity(), 4);
//!
//! array.sort();
//! assert_eq!(array.to_array(), [1, 2, 3]);
//! ```

pub mod config;
pub mod growth;
pub mod source;

mod array;
mod error;

pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use growth::GrowthFactor;
pub use source::{Source, Sparse};

pub type Result<T> = core::result::Result<T, ArrayError>;
