//! # HTTP and CORS Configuration
//!
//! Settings for the HTTP listener and for cross-origin access.
//!
//! These are part of [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use std::time::Duration;
//! use image_scaler::config::web::{CorsConfig, HttpConfig};
//!
//! let http = HttpConfig {
//!     host: "127.0.0.1".into(),
//!     port: 8080,
//!     max_body_bytes: 10 * 1024 * 1024,
//!     request_timeout: Duration::from_secs(30),
//! };
//! assert_eq!(http.bind_addr(), "127.0.0.1:8080");
//!
//! let cors = CorsConfig { origins: "*".into(), credentials: false };
//! assert!(cors.allows_any_origin());
//! ```

use std::time::Duration;

/// HTTP listener settings and request limits.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, which bounds the upload size.
    pub max_body_bytes: usize,
    /// Time allowed for one request, conversion included.
    pub request_timeout: Duration,
}

impl HttpConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// `origins` is a comma-separated list, or `*` for any origin.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsConfig {
    pub origins: String,
    pub credentials: bool,
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.origins.trim() == "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = HttpConfig {
            host: "0.0.0.0".into(),
            port: 3000,
            max_body_bytes: 1,
            request_timeout: Duration::from_secs(1),
        };
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn wildcard_origin_detection() {
        let any = CorsConfig {
            origins: " * ".into(),
            credentials: false,
        };
        assert!(any.allows_any_origin());

        let list = CorsConfig {
            origins: "http://a.com,*".into(),
            credentials: false,
        };
        assert!(!list.allows_any_origin());
    }
}
