//! # image_scaler
//!
//! HTTP service that resizes uploaded raster images and converts them between
//! JPEG, PNG, BMP, TIFF and GIF.
//!
//! The crate is split into:
//! - `image`: the conversion core (dimension math, extension allow-list,
//!   processor backend, pipeline),
//! - `web`: the axum routes around it,
//! - `config`: environment-driven settings,
//! - `error`: the typed conversion error.
//!
//! ## Example usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use image_scaler::config::app::AppConfig;
//! use image_scaler::image::conversion::ImageConversion;
//! use image_scaler::image::image_rs_processor::ImageRsProcessor;
//! use image_scaler::web::router::build_router;
//!
//! let cfg = AppConfig::from_env();
//! let conversion = ImageConversion::new(Arc::new(ImageRsProcessor::new(cfg.image.clone())));
//! let app = build_router(conversion, &cfg);
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use axum;
pub use tokio;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod image;
pub mod web;
