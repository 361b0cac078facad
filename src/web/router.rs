//! # Router
//!
//! Wires the image routes, body limit, timeout, CORS and request tracing.
//!
//! | Route | Handler |
//! |---|---|
//! | `GET /test` | [`service_check`](super::handlers::service_check) |
//! | `POST /ScaleImageSize` | [`scale_image_size`](super::handlers::scale_image_size) |
//! | `POST /ScaleImagePercentage` | [`scale_image_percentage`](super::handlers::scale_image_percentage) |
//! | `POST /ChangeImageFileType` | [`change_image_file_type`](super::handlers::change_image_file_type) |
//!
//! The upload routes take no CSRF token. The service keeps no session, cookie
//! or user state, so a forged cross-site request can do nothing a direct one
//! could not. Uploads are still capped by [`DefaultBodyLimit`] and checked for
//! an image content type before any decoding.

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Extension, Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::cors::build_cors;
use super::handlers;
use crate::config::app::AppConfig;
use crate::image::conversion::ImageConversion;

/// Builds the application router around `conversion`.
pub fn build_router(conversion: ImageConversion, config: &AppConfig) -> Router {
    let timeout =
        TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, config.http.request_timeout);

    Router::new()
        .route("/test", get(handlers::service_check))
        .route("/ScaleImageSize", post(handlers::scale_image_size))
        .route("/ScaleImagePercentage", post(handlers::scale_image_percentage))
        .route("/ChangeImageFileType", post(handlers::change_image_file_type))
        .fallback(handlers::not_found)
        .layer(Extension(conversion))
        .layer(DefaultBodyLimit::max(config.http.max_body_bytes))
        .layer(timeout)
        .layer(build_cors(&config.cors))
        .layer(TraceLayer::new_for_http())
}
