//! # Conversion Pipeline
//!
//! Validates an [`Upload`], picks the output [`Extension`], and runs the
//! [`ImageProcessor`] on a blocking worker thread.
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use image_scaler::image::conversion::ImageConversion;
//! use image_scaler::image::image_rs_processor::ImageRsProcessor;
//! use image_scaler::image::upload::Upload;
//!
//! # async fn run() -> Result<(), image_scaler::error::conversion::ConversionError> {
//! let conversion = ImageConversion::new(Arc::new(ImageRsProcessor::default()));
//! let upload = Upload::new("photo.png", "image/png", std::fs::read("photo.png").unwrap());
//!
//! let converted = conversion.change_type(&upload, ".gif").await?;
//! assert_eq!(converted.mime_type(), "image/gif");
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use super::dimension::ResizeDirective;
use super::extension::Extension;
use super::processor::ImageProcessor;
use super::upload::{validate, Upload};
use crate::error::conversion::ConversionError;

/// Encoded output of one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedImage {
    bytes: Vec<u8>,
    extension: Extension,
    mime_type: &'static str,
}

impl ConvertedImage {
    pub fn new(bytes: Vec<u8>, extension: Extension) -> Self {
        Self {
            bytes,
            extension,
            mime_type: extension.mime_type(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn extension(&self) -> Extension {
        self.extension
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Picks the output extension.
///
/// A non-empty, allow-listed `requested` value wins. Otherwise the extension of
/// `file_name` is used, which must be allow-listed as well.
pub fn output_extension(
    requested: Option<&str>,
    file_name: &str,
) -> Result<Extension, ConversionError> {
    if let Some(ext) = requested.and_then(Extension::parse) {
        return Ok(ext);
    }
    if let Some(req) = requested.filter(|r| !r.trim().is_empty()) {
        debug!(requested = req, file_name, "requested extension not supported, using source");
    }
    Extension::from_file_name(file_name)
        .ok_or_else(|| ConversionError::UnsupportedFormat(file_name.to_string()))
}

/// Image conversion service shared by all request handlers.
#[derive(Clone)]
pub struct ImageConversion {
    processor: Arc<dyn ImageProcessor>,
}

impl ImageConversion {
    pub fn new(processor: Arc<dyn ImageProcessor>) -> Self {
        Self { processor }
    }

    /// Converts `upload` following `directive`, encoding as `requested` when it is
    /// supported and as the source file's own type otherwise.
    pub async fn transform(
        &self,
        upload: &Upload,
        directive: ResizeDirective,
        requested: Option<&str>,
    ) -> Result<ConvertedImage, ConversionError> {
        validate(Some(upload))?;
        let extension = output_extension(requested, &upload.file_name)?;

        let processor = Arc::clone(&self.processor);
        let bytes = upload.bytes.clone();
        let encoded = tokio::task::spawn_blocking(move || {
            processor.convert(&bytes, directive, extension)
        })
        .await
        .map_err(|e| ConversionError::Worker(e.to_string()))??;

        info!(
            file_name = %upload.file_name,
            ?directive,
            %extension,
            in_bytes = upload.bytes.len(),
            out_bytes = encoded.len(),
            "image converted"
        );
        Ok(ConvertedImage::new(encoded, extension))
    }

    /// Re-encodes without touching the dimensions.
    pub async fn change_type(
        &self,
        upload: &Upload,
        new_extension: &str,
    ) -> Result<ConvertedImage, ConversionError> {
        self.transform(upload, ResizeDirective::NoResize, Some(new_extension))
            .await
    }

    /// Scales both axes by `percentage`; `percentage <= 0` keeps the source size.
    pub async fn scale_by_percentage(
        &self,
        upload: &Upload,
        percentage: i64,
        new_extension: Option<&str>,
    ) -> Result<ConvertedImage, ConversionError> {
        self.transform(
            upload,
            ResizeDirective::from_percentage(percentage),
            new_extension,
        )
        .await
    }

    /// Resizes to exactly `width`×`height`.
    pub async fn scale_to_size(
        &self,
        upload: &Upload,
        width: i64,
        height: i64,
        new_extension: Option<&str>,
    ) -> Result<ConvertedImage, ConversionError> {
        self.transform(
            upload,
            ResizeDirective::Explicit { width, height },
            new_extension,
        )
        .await
    }
}
