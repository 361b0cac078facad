use thiserror::Error;

/// Message returned when no file, or an empty one, was uploaded.
pub const EMPTY_FILE_MESSAGE: &str = "No image uploaded.";
/// Message returned when the upload does not declare an image content type.
pub const NOT_AN_IMAGE_MESSAGE: &str = "Invalid image file";

/// Failure of a single image conversion request.
///
/// Every variant is scoped to one request. None of them is worth retrying:
/// conversions are deterministic.
///
/// # Example
/// ```
/// use image_scaler::error::conversion::ConversionError;
///
/// assert_eq!(ConversionError::EmptyFile.to_string(), "No image uploaded.");
/// assert!(ConversionError::NotAnImage.is_client_error());
/// ```
#[derive(Debug, Error)]
pub enum ConversionError {
    /// No file, or a zero-length file, was supplied.
    #[error("No image uploaded.")]
    EmptyFile,

    /// The declared content type does not start with `image`.
    #[error("Invalid image file")]
    NotAnImage,

    /// The bytes could not be decoded as a raster image.
    #[error("could not decode image: {0}")]
    Decode(String),

    /// The image exceeds the configured decode limits.
    #[error("image exceeds size limits: {0}")]
    LimitsExceeded(String),

    /// Neither the requested nor the source extension is supported.
    #[error("unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    /// The resolved target size is not a valid image size.
    #[error("invalid target size {width}x{height}")]
    Resize { width: i64, height: i64 },

    /// The encoder failed to write the output.
    #[error("could not encode image: {0}")]
    Encode(String),

    /// The blocking worker running the conversion panicked or was cancelled.
    #[error("conversion worker failed: {0}")]
    Worker(String),
}

impl ConversionError {
    /// `true` when the request itself was at fault.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ConversionError::Encode(_) | ConversionError::Worker(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_match_wire_text() {
        assert_eq!(ConversionError::EmptyFile.to_string(), EMPTY_FILE_MESSAGE);
        assert_eq!(ConversionError::NotAnImage.to_string(), NOT_AN_IMAGE_MESSAGE);
    }

    #[test]
    fn display_includes_details() {
        let err = ConversionError::Resize {
            width: 0,
            height: -3,
        };
        assert_eq!(err.to_string(), "invalid target size 0x-3");

        let err = ConversionError::UnsupportedFormat(".webp".into());
        assert!(err.to_string().contains(".webp"));
    }

    #[test]
    fn server_side_failures_are_not_client_errors() {
        assert!(ConversionError::Decode("x".into()).is_client_error());
        assert!(ConversionError::LimitsExceeded("x".into()).is_client_error());
        assert!(!ConversionError::Encode("x".into()).is_client_error());
        assert!(!ConversionError::Worker("x".into()).is_client_error());
    }
}
