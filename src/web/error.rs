//! # HTTP Error Responses
//!
//! Maps request failures to plain-text HTTP responses.
//!
//! | Error | Status |
//! |---|---|
//! | empty upload, non-image content type, unsupported format, invalid size | `400` |
//! | missing or malformed parameter | `400` |
//! | undecodable image | `422` |
//! | image or body over the configured limits | `413` |
//! | encoder or worker failure | `500` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::error::conversion::ConversionError;

/// A request parameter problem detected by the HTTP layer.
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{name} must be an integer, got {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    /// The multipart body could not be read.
    #[error("{message}")]
    Body { status: StatusCode, message: String },
}

/// Everything a conversion route can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Param(#[from] ParamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Conversion(e) => match e {
                ConversionError::EmptyFile
                | ConversionError::NotAnImage
                | ConversionError::UnsupportedFormat(_)
                | ConversionError::Resize { .. } => StatusCode::BAD_REQUEST,
                ConversionError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ConversionError::LimitsExceeded(_) => StatusCode::PAYLOAD_TOO_LARGE,
                ConversionError::Encode(_) | ConversionError::Worker(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Param(ParamError::Body { status, .. }) => *status,
            ApiError::Param(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "image request failed");
        } else {
            warn!(%status, error = %self, "image request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
