//! # Uploaded Files
//!
//! [`Upload`] is the transport-neutral view of one uploaded file, and
//! [`validate`] is the guard run on it before any decode work.
//!
//! # Example
//! ```rust
//! use image_scaler::image::upload::{validate, Upload};
//! use image_scaler::error::conversion::ConversionError;
//!
//! let upload = Upload::new("notes.txt", "text/plain", b"hello".to_vec());
//! assert!(matches!(validate(Some(&upload)), Err(ConversionError::NotAnImage)));
//! ```

use axum::body::Bytes;

use crate::error::conversion::ConversionError;

/// One uploaded file: its bytes plus the name and content type the client declared.
#[derive(Clone, Debug, PartialEq)]
pub struct Upload {
    /// Original filename, used for the fallback output extension.
    pub file_name: String,
    /// Declared content type, e.g. `image/png`.
    pub content_type: String,
    pub bytes: Bytes,
}

impl Upload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Checks that an upload is present, non-empty, and declared as an image.
///
/// Accepting an upload does not mean it decodes; that is only known once the
/// processor runs.
pub fn validate(upload: Option<&Upload>) -> Result<(), ConversionError> {
    let upload = match upload {
        Some(u) if !u.is_empty() => u,
        _ => return Err(ConversionError::EmptyFile),
    };
    if !upload.content_type.starts_with("image") {
        return Err(ConversionError::NotAnImage);
    }
    Ok(())
}
