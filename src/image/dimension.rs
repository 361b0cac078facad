//! Resize directives and target dimension math.
//!
//! All functions here are pure and testable without any image data.

use std::num::NonZeroU32;

/// Axis value asking the processor to keep the source size on that axis.
pub const KEEP_AXIS: i64 = -1;

/// How, or whether, to change an image's dimensions for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirective {
    /// Re-encode only. The resize step is skipped entirely.
    NoResize,
    /// Resize to the given size. [`KEEP_AXIS`] keeps the source size on that axis.
    Explicit { width: i64, height: i64 },
    /// Scale both axes by a percentage of the source size.
    Percentage(NonZeroU32),
}

impl ResizeDirective {
    /// Builds a directive from raw request parameters.
    ///
    /// `new_file_type_only` wins over everything; a positive `percentage` wins over
    /// the explicit size; a non-positive percentage counts as "not given".
    pub fn from_params(width: i64, height: i64, percentage: i64, new_file_type_only: bool) -> Self {
        if new_file_type_only {
            return ResizeDirective::NoResize;
        }
        match u32::try_from(percentage).ok().and_then(NonZeroU32::new) {
            Some(p) => ResizeDirective::Percentage(p),
            None => ResizeDirective::Explicit { width, height },
        }
    }

    /// Percentage-only directive; `p <= 0` keeps both source axes.
    pub fn from_percentage(percentage: i64) -> Self {
        Self::from_params(KEEP_AXIS, KEEP_AXIS, percentage, false)
    }
}

/// Computes the target size for `directive` from the source size.
///
/// Percentages round to nearest with ties away from zero, in integer arithmetic
/// so `5px * 50%` is exactly `3px`.
///
/// # Examples
/// ```
/// use std::num::NonZeroU32;
/// use image_scaler::image::dimension::{resolve, ResizeDirective};
///
/// let half = ResizeDirective::Percentage(NonZeroU32::new(50).unwrap());
/// assert_eq!(resolve(200, 100, half), (100, 50));
/// ```
pub fn resolve(source_width: u32, source_height: u32, directive: ResizeDirective) -> (i64, i64) {
    match directive {
        ResizeDirective::NoResize => (i64::from(source_width), i64::from(source_height)),
        ResizeDirective::Explicit { width, height } => (width, height),
        ResizeDirective::Percentage(p) => (
            scale(source_width, p.get()),
            scale(source_height, p.get()),
        ),
    }
}

fn scale(source: u32, percentage: u32) -> i64 {
    let scaled = (u64::from(source) * u64::from(percentage) + 50) / 100;
    i64::try_from(scaled).unwrap_or(i64::MAX)
}
