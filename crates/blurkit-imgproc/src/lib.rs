#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the imgproc module.
pub mod error;

/// image filtering module.
pub mod filter;

/// module containing parallelization utilities.
pub mod parallel;

pub use crate::error::BlurError;
