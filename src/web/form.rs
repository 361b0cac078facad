//! # Multipart Form Binding
//!
//! Reads a `multipart/form-data` body into an [`UploadForm`]: the `file` part as
//! an [`Upload`], every other part as a text field.
//!
//! Scalar parameters may arrive either as form fields or in the query string;
//! form fields win, and names match case-insensitively.
//!
//! A request that never gets as far as a `file` part (no multipart content type,
//! an empty or truncated body) is an empty upload. Only the body limit keeps its
//! own `413`.

use std::collections::HashMap;

use axum::http::StatusCode;
use axum_extra::extract::multipart::{MultipartError, MultipartRejection};
use axum_extra::extract::Multipart;
use tracing::debug;

use super::error::{ApiError, ParamError};
use crate::error::conversion::ConversionError;
use crate::image::upload::Upload;

/// Name of the multipart part carrying the image.
pub const FILE_FIELD: &str = "file";

/// Parsed body of a conversion request.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<Upload>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    /// Drains `multipart`. Only the first `file` part is kept.
    pub async fn read(
        multipart: Result<Multipart, MultipartRejection>,
    ) -> Result<Self, ApiError> {
        let mut multipart = multipart.map_err(|rejection| {
            debug!(%rejection, "request has no multipart body");
            ApiError::from(ConversionError::EmptyFile)
        })?;
        let mut form = UploadForm::default();

        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => return Err(form.body_error(e)),
            };
            let name = field.name().unwrap_or_default().to_string();

            if name.eq_ignore_ascii_case(FILE_FIELD) {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(e) => return Err(form.body_error(e)),
                };
                if form.file.is_none() {
                    form.file = Some(Upload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            } else {
                let value = match field.text().await {
                    Ok(value) => value,
                    Err(e) => return Err(form.body_error(e)),
                };
                form.fields.insert(name.to_ascii_lowercase(), value);
            }
        }

        Ok(form)
    }

    /// Classifies a failure while reading the body. Until a file has been read
    /// the request counts as an empty upload, unless the body limit was hit.
    fn body_error(&self, e: MultipartError) -> ApiError {
        let status = e.status();
        if self.file.is_none() && status != StatusCode::PAYLOAD_TOO_LARGE {
            debug!(error = %e, "multipart body ended before a file part");
            return ConversionError::EmptyFile.into();
        }
        ParamError::Body {
            status,
            message: e.body_text(),
        }
        .into()
    }

    #[cfg(test)]
    pub(crate) fn with_fields(fields: &[(&str, &str)]) -> Self {
        Self {
            file: None,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect(),
        }
    }

    /// Looks `name` up in the form fields, then in `query`.
    pub fn param<'a>(&'a self, query: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .or_else(|| {
                query
                    .iter()
                    .find(|(k, _)| k.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    /// A required integer parameter.
    pub fn int_param(
        &self,
        query: &HashMap<String, String>,
        name: &'static str,
    ) -> Result<i64, ParamError> {
        let raw = self.param(query, name).ok_or(ParamError::Missing(name))?;
        raw.trim()
            .parse::<i32>()
            .map(i64::from)
            .map_err(|_| ParamError::NotAnInteger {
                name,
                value: raw.to_string(),
            })
    }
}
