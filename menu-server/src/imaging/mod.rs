//! Image transform
//!
//! Bounds an uploaded image and re-encodes it as JPEG before it reaches a
//! blob store. Decoding and encoding run on the blocking pool.

mod transform;

pub use transform::{TransformError, TransformOptions, TransformedImage, fit_within, transform, transform_blocking};
