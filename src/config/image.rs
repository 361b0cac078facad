//! # Image Configuration
//!
//! Upper bounds on image dimensions, applied both when decoding an upload and
//! when resolving a resize target.
//!
//! # Example
//! ```rust
//! use image_scaler::config::image::ImageConfig;
//!
//! let cfg = ImageConfig::default();
//! assert!(cfg.allows(1920, 1080));
//! assert!(!cfg.allows(cfg.max_width + 1, 1));
//! assert!(!cfg.allows(cfg.max_width, cfg.max_height));
//! ```

/// Default limit for either axis, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 16_384;

/// Default limit on `width * height` of a resize target: 64 Mpx, 256 MiB as RGBA8.
pub const DEFAULT_MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Limits for image processing.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageConfig {
    pub max_width: u32,
    pub max_height: u32,
    /// Largest pixel area a resize may produce.
    pub max_pixels: u64,
}

impl ImageConfig {
    /// Returns `true` if a `width`×`height` image is within the limits.
    pub fn allows(&self, width: u32, height: u32) -> bool {
        width <= self.max_width
            && height <= self.max_height
            && u64::from(width) * u64::from(height) <= self.max_pixels
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            max_pixels: DEFAULT_MAX_PIXELS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_same_limit_on_both_axes() {
        let cfg = ImageConfig::default();
        assert_eq!(cfg.max_width, DEFAULT_MAX_DIMENSION);
        assert_eq!(cfg.max_height, DEFAULT_MAX_DIMENSION);
        assert_eq!(cfg.max_pixels, DEFAULT_MAX_PIXELS);
    }

    #[test]
    fn allows_is_inclusive() {
        let cfg = ImageConfig {
            max_width: 100,
            max_height: 50,
            max_pixels: u64::MAX,
        };
        assert!(cfg.allows(100, 50));
        assert!(!cfg.allows(101, 50));
        assert!(!cfg.allows(100, 51));
    }

    #[test]
    fn pixel_area_is_bounded_even_within_both_axes() {
        let cfg = ImageConfig {
            max_width: 100,
            max_height: 100,
            max_pixels: 2_500,
        };
        assert!(cfg.allows(50, 50));
        assert!(cfg.allows(100, 25));
        assert!(!cfg.allows(51, 50));
        assert!(!cfg.allows(100, 100));
    }

    #[test]
    fn default_area_rejects_full_size_square() {
        let cfg = ImageConfig::default();
        assert!(cfg.allows(8_192, 8_192));
        assert!(!cfg.allows(DEFAULT_MAX_DIMENSION, DEFAULT_MAX_DIMENSION));
    }
}
