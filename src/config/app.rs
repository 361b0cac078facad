//! # Application Configuration Loader
//!
//! Loads every service setting from the environment.
//!
//! `.env` files are read for non-production environments: a custom
//! `DOTENV_FILE` path first, then `.env.{APP_ENV}`, then `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `HOST` | Listen address | `"0.0.0.0"` |
//! | `PORT` | Listen port | `8080` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `20` |
//! | `HTTP_TIMEOUT_SECS` | Per-request timeout | `30` |
//! | `CORS_ORIGINS` | Allowed origins, comma separated or `*` | `""` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |
//! | `IMAGE_MAX_WIDTH` | Largest accepted or produced width (px) | `16384` |
//! | `IMAGE_MAX_HEIGHT` | Largest accepted or produced height (px) | `16384` |
//! | `IMAGE_MAX_PIXELS` | Largest produced pixel area (`width * height`) | `67108864` |
//!
//! # Example
//! ```rust,no_run
//! use image_scaler::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("listening on {}", cfg.http.bind_addr());
//! ```

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::config::{
    env::*,
    image::{ImageConfig, DEFAULT_MAX_DIMENSION, DEFAULT_MAX_PIXELS},
    web::{CorsConfig, HttpConfig},
};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_MB: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Name of the running environment.
    pub app_env: String,
    pub http: HttpConfig,
    pub cors: CorsConfig,
    pub image: ImageConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults; loading never fails.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                if let Err(e) = dotenvy::from_filename(&path) {
                    warn!(%path, error = %e, "failed to load DOTENV_FILE");
                }
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| {
                (read_u32("HTTP_MAX_BODY_MB", DEFAULT_MAX_BODY_MB) as usize) * 1024 * 1024
            });

        let port = u16::try_from(read_u32("PORT", u32::from(DEFAULT_PORT))).unwrap_or(DEFAULT_PORT);

        AppConfig {
            app_env,
            http: HttpConfig {
                host: read_string("HOST", "0.0.0.0"),
                port,
                max_body_bytes,
                request_timeout: Duration::from_secs(read_u64(
                    "HTTP_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )),
            },
            cors: CorsConfig {
                origins: env::var("CORS_ORIGINS").unwrap_or_default(),
                credentials: read_flag("CORS_CREDENTIALS", false),
            },
            image: ImageConfig {
                max_width: read_u32("IMAGE_MAX_WIDTH", DEFAULT_MAX_DIMENSION),
                max_height: read_u32("IMAGE_MAX_HEIGHT", DEFAULT_MAX_DIMENSION),
                max_pixels: read_u64("IMAGE_MAX_PIXELS", DEFAULT_MAX_PIXELS),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 11] = [
        "HOST",
        "PORT",
        "HTTP_MAX_BODY_BYTES",
        "HTTP_MAX_BODY_MB",
        "HTTP_TIMEOUT_SECS",
        "CORS_ORIGINS",
        "CORS_CREDENTIALS",
        "IMAGE_MAX_WIDTH",
        "IMAGE_MAX_HEIGHT",
        "IMAGE_MAX_PIXELS",
        "DOTENV_FILE",
    ];

    fn env_with(
        overrides: &[(&'static str, &'static str)],
    ) -> Vec<(&'static str, Option<&'static str>)> {
        let mut vars: Vec<(&str, Option<&str>)> = VARS
            .iter()
            .map(|k| (*k, overrides.iter().find(|(o, _)| o == k).map(|(_, v)| *v)))
            .collect();
        vars.push(("APP_ENV", Some("production")));
        vars
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        temp_env::with_vars(env_with(&[]), || {
            let cfg = AppConfig::from_env();
            assert_eq!(cfg.app_env, "production");
            assert_eq!(cfg.http.bind_addr(), "0.0.0.0:8080");
            assert_eq!(cfg.http.max_body_bytes, 20 * 1024 * 1024);
            assert_eq!(cfg.http.request_timeout, Duration::from_secs(30));
            assert_eq!(cfg.cors.origins, "");
            assert!(!cfg.cors.credentials);
            assert_eq!(cfg.image, ImageConfig::default());
        });
    }

    #[test]
    fn reads_overrides() {
        let vars = env_with(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
            ("HTTP_MAX_BODY_MB", "2"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("CORS_ORIGINS", "http://a.com"),
            ("CORS_CREDENTIALS", "yes"),
            ("IMAGE_MAX_WIDTH", "800"),
            ("IMAGE_MAX_HEIGHT", "600"),
            ("IMAGE_MAX_PIXELS", "400000"),
        ]);
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::from_env();
            assert_eq!(cfg.http.bind_addr(), "127.0.0.1:9001");
            assert_eq!(cfg.http.max_body_bytes, 2 * 1024 * 1024);
            assert_eq!(cfg.http.request_timeout, Duration::from_secs(5));
            assert_eq!(cfg.cors.origins, "http://a.com");
            assert!(cfg.cors.credentials);
            assert_eq!(cfg.image.max_width, 800);
            assert_eq!(cfg.image.max_height, 600);
            assert_eq!(cfg.image.max_pixels, 400_000);
        });
    }

    #[test]
    fn body_bytes_wins_over_megabytes() {
        let vars = env_with(&[("HTTP_MAX_BODY_BYTES", "1234"), ("HTTP_MAX_BODY_MB", "9")]);
        temp_env::with_vars(vars, || {
            assert_eq!(AppConfig::from_env().http.max_body_bytes, 1234);
        });
    }

    #[test]
    fn out_of_range_port_falls_back() {
        temp_env::with_vars(env_with(&[("PORT", "70000")]), || {
            assert_eq!(AppConfig::from_env().http.port, DEFAULT_PORT);
        });
    }

    #[test]
    fn unreadable_dotenv_file_falls_back_to_defaults() {
        let mut vars = env_with(&[("DOTENV_FILE", "/nonexistent/image-scaler.env")]);
        vars.retain(|(k, _)| *k != "APP_ENV");
        vars.push(("APP_ENV", Some("development")));
        temp_env::with_vars(vars, || {
            let cfg = AppConfig::from_env();
            assert_eq!(cfg.app_env, "development");
            assert_eq!(cfg.http.port, DEFAULT_PORT);
            assert_eq!(cfg.image, ImageConfig::default());
        });
    }
}
