pub mod assoc_array;
pub mod error;

pub use assoc_array::{AssociativeArray, DEFAULT_CAPACITY};
pub use error::{Error, Result};
