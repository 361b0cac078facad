//! # Conversion Route Handlers
//!
//! Axum handlers for the image routes. Each one reads the multipart body
//! (a missing or unreadable body is an empty upload), validates the upload
//! before looking at any other parameter, calls
//! [`ImageConversion`], and answers with the encoded file.
//!
//! ## Example request
//! ```text
//! POST /ScaleImagePercentage?percentageChange=25
//! Content-Type: multipart/form-data; boundary=----
//!
//! ----
//! Content-Disposition: form-data; name="file"; filename="photo.jpg"
//! Content-Type: image/jpeg
//!
//! <bytes>
//! ----
//! ```

use std::collections::HashMap;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use axum_extra::extract::{multipart::MultipartRejection, Multipart};

use super::error::{ApiError, ParamError};
use super::form::UploadForm;
use crate::error::conversion::ConversionError;
use crate::image::conversion::{ConvertedImage, ImageConversion};
use crate::image::upload::{validate, Upload};

pub const RESIZED_STEM: &str = "resized_image";
pub const CONVERTED_STEM: &str = "converted_image";

/// `GET /test`
pub async fn service_check() -> &'static str {
    "Service OK"
}

/// `POST /ScaleImageSize` with `width`, `height`, optional `newFileExt`.
pub async fn scale_image_size(
    Extension(conversion): Extension<ImageConversion>,
    Query(query): Query<HashMap<String, String>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let form = UploadForm::read(multipart).await?;
    let upload = checked_upload(&form)?;

    let width = form.int_param(&query, "width")?;
    let height = form.int_param(&query, "height")?;
    let new_ext = form.param(&query, "newFileExt");

    let converted = conversion
        .scale_to_size(upload, width, height, new_ext)
        .await?;
    Ok(file_response(converted, RESIZED_STEM))
}

/// `POST /ScaleImagePercentage` with `percentageChange`, optional `newFileExt`.
pub async fn scale_image_percentage(
    Extension(conversion): Extension<ImageConversion>,
    Query(query): Query<HashMap<String, String>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let form = UploadForm::read(multipart).await?;
    let upload = checked_upload(&form)?;

    let percentage = form.int_param(&query, "percentageChange")?;
    let new_ext = form.param(&query, "newFileExt");

    let converted = conversion
        .scale_by_percentage(upload, percentage, new_ext)
        .await?;
    Ok(file_response(converted, RESIZED_STEM))
}

/// `POST /ChangeImageFileType`, requires `newFileExt`.
pub async fn change_image_file_type(
    Extension(conversion): Extension<ImageConversion>,
    Query(query): Query<HashMap<String, String>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let form = UploadForm::read(multipart).await?;
    let upload = checked_upload(&form)?;

    let new_ext = form
        .param(&query, "newFileExt")
        .ok_or(ParamError::Missing("newFileExt"))?;

    let converted = conversion.change_type(upload, new_ext).await?;
    Ok(file_response(converted, CONVERTED_STEM))
}

/// Final fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn checked_upload(form: &UploadForm) -> Result<&Upload, ApiError> {
    validate(form.file.as_ref())?;
    form.file.as_ref().ok_or(ConversionError::EmptyFile.into())
}

/// Builds the download response: encoded bytes, MIME type and
/// `attachment; filename="<stem><extension>"`.
pub fn file_response(converted: ConvertedImage, stem: &str) -> Response {
    let disposition = format!("attachment; filename=\"{stem}{}\"", converted.extension());
    (
        [
            (header::CONTENT_TYPE, converted.mime_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        converted.into_bytes(),
    )
        .into_response()
}
