//! Filter operations
//!
//! This module provides the convolution blur operations.

/// Filter kernels
pub mod kernels;

/// Per-pixel convolution engine
mod convolution;
pub use convolution::*;

/// Filter operations
mod ops;
pub use ops::*;
