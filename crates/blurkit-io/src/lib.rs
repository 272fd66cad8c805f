#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the io module.
pub mod error;

/// Kernel description file reader.
pub mod kernel;

/// PPM (P6) image reader/writer.
pub mod ppm;

pub use crate::error::IoError;
pub use crate::kernel::read_kernel;
pub use crate::ppm::{read_image_ppm, write_image_ppm};
