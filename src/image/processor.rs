//! # Image Processing Abstractions
//!
//! Defines the backend interface that turns uploaded bytes into converted bytes.
//!
//! This module provides [`ImageProcessor`], a trait that lets the conversion
//! pipeline stay independent of the imaging library doing the pixel work.
//! The production backend is
//! [`ImageRsProcessor`](super::image_rs_processor::ImageRsProcessor).
//!
//! Implementations are synchronous and CPU-bound; the pipeline runs them on a
//! blocking worker thread.
//!
//! # Example
//! ```rust
//! use image_scaler::error::conversion::ConversionError;
//! use image_scaler::image::dimension::ResizeDirective;
//! use image_scaler::image::extension::Extension;
//! use image_scaler::image::processor::ImageProcessor;
//!
//! struct EchoProcessor;
//!
//! impl ImageProcessor for EchoProcessor {
//!     fn convert(
//!         &self,
//!         img_bytes: &[u8],
//!         _directive: ResizeDirective,
//!         _extension: Extension,
//!     ) -> Result<Vec<u8>, ConversionError> {
//!         Ok(img_bytes.to_vec())
//!     }
//! }
//!
//! let out = EchoProcessor
//!     .convert(b"abc", ResizeDirective::NoResize, Extension::Png)
//!     .unwrap();
//! assert_eq!(out, b"abc");
//! ```

use crate::error::conversion::ConversionError;

use super::dimension::ResizeDirective;
use super::extension::Extension;

/// Decodes, optionally resizes, and re-encodes one image.
pub trait ImageProcessor: Send + Sync {
    /// Converts `img_bytes` according to `directive`, encoding as `extension`.
    ///
    /// # Errors
    /// - [`ConversionError::Decode`] / [`ConversionError::LimitsExceeded`] when the
    ///   input cannot be read,
    /// - [`ConversionError::Resize`] when the resolved size is invalid,
    /// - [`ConversionError::Encode`] when writing the output fails.
    fn convert(
        &self,
        img_bytes: &[u8],
        directive: ResizeDirective,
        extension: Extension,
    ) -> Result<Vec<u8>, ConversionError>;
}
