//! # Image Processor Implementation (image-rs)
//!
//! Provides an [`ImageProcessor`] implementation using the [`image`] crate.
//!
//! The processor decodes any format the `image` crate can guess from the bytes,
//! resizes to exact dimensions with a Catmull-Rom (bicubic) filter, and encodes to
//! one of the supported [`Extension`]s.
//!
//! # Example
//! ```rust,no_run
//! use std::num::NonZeroU32;
//! use image_scaler::config::image::ImageConfig;
//! use image_scaler::image::dimension::ResizeDirective;
//! use image_scaler::image::extension::Extension;
//! use image_scaler::image::image_rs_processor::ImageRsProcessor;
//! use image_scaler::image::processor::ImageProcessor;
//!
//! let processor = ImageRsProcessor::new(ImageConfig::default());
//! let img_data = std::fs::read("input.png").unwrap();
//!
//! let half = ResizeDirective::Percentage(NonZeroU32::new(50).unwrap());
//! let out = processor.convert(&img_data, half, Extension::Jpg).expect("convert ok");
//! std::fs::write("half.jpg", out).unwrap();
//! ```
//!
//! # Errors
//! Returns a [`ConversionError`] if:
//! - the format cannot be guessed or the image cannot be decoded,
//! - the image is larger than the configured limits,
//! - the resolved resize target is invalid or exceeds the pixel budget,
//! - writing the encoded image fails.

use std::io::Cursor;

use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageReader, Limits};
use tracing::debug;

use super::dimension::{resolve, ResizeDirective, KEEP_AXIS};
use super::extension::Extension;
use super::processor::ImageProcessor;
use crate::config::image::ImageConfig;
use crate::error::conversion::ConversionError;

/// A concrete implementation of [`ImageProcessor`] using the `image` crate.
#[derive(Clone, Debug, Default)]
pub struct ImageRsProcessor {
    limits: ImageConfig,
}

impl ImageRsProcessor {
    pub fn new(limits: ImageConfig) -> Self {
        Self { limits }
    }

    fn decode(&self, img_bytes: &[u8]) -> Result<DynamicImage, ConversionError> {
        let mut reader = ImageReader::new(Cursor::new(img_bytes))
            .with_guessed_format()
            .map_err(|e| ConversionError::Decode(e.to_string()))?;

        let mut limits = Limits::default();
        limits.max_image_width = Some(self.limits.max_width);
        limits.max_image_height = Some(self.limits.max_height);
        reader.limits(limits);

        reader.decode().map_err(|e| match e {
            image::ImageError::Limits(l) => ConversionError::LimitsExceeded(l.to_string()),
            other => ConversionError::Decode(other.to_string()),
        })
    }

    fn resize(
        &self,
        img: DynamicImage,
        directive: ResizeDirective,
    ) -> Result<DynamicImage, ConversionError> {
        if directive == ResizeDirective::NoResize {
            return Ok(img);
        }

        let (src_w, src_h) = img.dimensions();
        let (w, h) = resolve(src_w, src_h, directive);
        let (tw, th) = self.target_size((src_w, src_h), (w, h))?;

        debug!(src_w, src_h, tw, th, "resizing image");
        if (tw, th) == (src_w, src_h) {
            return Ok(img);
        }
        Ok(img.resize_exact(tw, th, FilterType::CatmullRom))
    }

    /// Turns a resolved size into concrete pixel dimensions.
    fn target_size(
        &self,
        source: (u32, u32),
        resolved: (i64, i64),
    ) -> Result<(u32, u32), ConversionError> {
        let invalid = || ConversionError::Resize {
            width: resolved.0,
            height: resolved.1,
        };
        let w = axis(source.0, resolved.0).ok_or_else(invalid)?;
        let h = axis(source.1, resolved.1).ok_or_else(invalid)?;
        if !self.limits.allows(w, h) {
            return Err(invalid());
        }
        Ok((w, h))
    }
}

fn axis(source: u32, resolved: i64) -> Option<u32> {
    if resolved == KEEP_AXIS {
        return Some(source);
    }
    u32::try_from(resolved).ok().filter(|v| *v > 0)
}

/// Encodes with the codec bound to `extension`.
///
/// JPEG has no alpha channel, so it is written from RGB8; every other format
/// from RGBA8.
fn encode(img: &DynamicImage, extension: Extension) -> Result<Vec<u8>, ConversionError> {
    let mut cur = Cursor::new(Vec::new());
    let pixels = match extension {
        Extension::Jpg => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => DynamicImage::ImageRgba8(img.to_rgba8()),
    };
    pixels
        .write_to(&mut cur, extension.image_format())
        .map_err(|e| ConversionError::Encode(e.to_string()))?;
    Ok(cur.into_inner())
}

impl ImageProcessor for ImageRsProcessor {
    fn convert(
        &self,
        img_bytes: &[u8],
        directive: ResizeDirective,
        extension: Extension,
    ) -> Result<Vec<u8>, ConversionError> {
        let img = self.decode(img_bytes)?;
        let img = self.resize(img, directive)?;
        encode(&img, extension)
    }
}
