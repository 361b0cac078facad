//! # CORS (Cross-Origin Resource Sharing)
//!
//! Builds the [`CorsLayer`] that lets browser front-ends call the conversion
//! routes from another origin.
//!
//! - an empty origin list allows no cross-origin access,
//! - `*` allows any origin (only without credentials),
//! - otherwise a comma-separated allow-list is used.
//!
//! `Content-Disposition` is exposed so scripts can read the download filename.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use image_scaler::config::web::CorsConfig;
//! use image_scaler::web::cors::build_cors;
//!
//! let cfg = CorsConfig {
//!     origins: "http://example.com".into(),
//!     credentials: false,
//! };
//!
//! let app: Router = Router::new()
//!     .route("/test", get(|| async { "Service OK" }))
//!     .layer(build_cors(&cfg));
//! ```

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated origin list. Invalid or empty entries are ignored.
fn parse_origins(origins: &str) -> Vec<HeaderValue> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "*")
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

/// Builds a [`CorsLayer`] from [`CorsConfig`].
///
/// A wildcard cannot be combined with credentials, so `*` with
/// `credentials = true` falls back to the explicit entries only.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origin_cfg = if cors.allows_any_origin() && !cors.credentials {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_origins(&cors.origins))
    };

    let layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]);

    if cors.credentials {
        layer.allow_credentials(true)
    } else {
        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    fn app(origins: &str, credentials: bool) -> Router {
        let cfg = CorsConfig {
            origins: origins.into(),
            credentials,
        };
        Router::new()
            .route("/test", get(|| async { "Service OK" }))
            .layer(build_cors(&cfg))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/test")
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn parse_origins_skips_blank_and_wildcard_entries() {
        let out = parse_origins("  http://a.com , , * , https://b.com ");
        let strings: Vec<&str> = out.iter().map(|h| h.to_str().unwrap()).collect();
        assert_eq!(strings, vec!["http://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn listed_origin_is_allowed() {
        let res = app("http://example.com", true)
            .oneshot(preflight("http://example.com"))
            .await
            .unwrap();

        assert!(matches!(res.status(), StatusCode::OK | StatusCode::NO_CONTENT));
        let h = res.headers();
        assert_eq!(
            h.get("access-control-allow-origin").unwrap(),
            "http://example.com"
        );
        assert_eq!(h.get("access-control-allow-credentials").unwrap(), "true");
    }

    #[tokio::test]
    async fn wildcard_allows_any_origin() {
        let res = app("*", false)
            .oneshot(preflight("http://anything.test"))
            .await
            .unwrap();

        assert_eq!(res.headers().get("access-control-allow-origin").unwrap(), "*");
    }

    #[tokio::test]
    async fn empty_config_allows_no_origin() {
        let req = Request::builder()
            .uri("/test")
            .header("Origin", "http://evil.test")
            .body(Body::empty())
            .unwrap();

        let res = app("", false).oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().get("access-control-allow-origin").is_none());
    }

    #[tokio::test]
    async fn content_disposition_is_exposed() {
        let req = Request::builder()
            .uri("/test")
            .header("Origin", "http://example.com")
            .body(Body::empty())
            .unwrap();

        let res = app("http://example.com", false).oneshot(req).await.unwrap();

        let exposed = res
            .headers()
            .get("access-control-expose-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(exposed.contains("content-disposition"));
    }
}
