//! # Output Extensions
//!
//! The allow-list of file types the service can produce.
//!
//! The wire form of each variant lives only in [`Extension::as_str`]; parsing
//! walks [`Extension::ALL`] through it. Codec and MIME type are exhaustive
//! matches, so an allow-listed extension without an encoder cannot exist.
//!
//! # Example
//! ```rust
//! use image_scaler::image::extension::Extension;
//!
//! let ext = Extension::parse(".PNG").unwrap();
//! assert_eq!(ext.as_str(), ".png");
//! assert_eq!(ext.mime_type(), "image/png");
//!
//! assert!(Extension::parse(".webp").is_none());
//! ```

use std::fmt;
use std::path::Path;

use image::ImageFormat;

/// A supported output file type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    Jpg,
    Png,
    Bmp,
    Tiff,
    Gif,
}

impl Extension {
    /// Every supported extension.
    pub const ALL: [Extension; 5] = [
        Extension::Jpg,
        Extension::Png,
        Extension::Bmp,
        Extension::Tiff,
        Extension::Gif,
    ];

    /// Parses a dotted extension such as `".Gif"`, ignoring ASCII case.
    ///
    /// Returns `None` for anything outside [`Extension::ALL`], including the
    /// empty string.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|ext| ext.as_str().eq_ignore_ascii_case(value))
    }

    /// Reads the extension of an uploaded file name (`"photo.PNG"` → `.png`).
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name).extension()?.to_str()?;
        Self::parse(&format!(".{ext}"))
    }

    /// Lowercase dotted form, also used as the download filename suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Extension::Jpg => ".jpg",
            Extension::Png => ".png",
            Extension::Bmp => ".bmp",
            Extension::Tiff => ".tiff",
            Extension::Gif => ".gif",
        }
    }

    /// `image/jpeg` for `.jpg`, `image/<ext>` otherwise.
    pub fn mime_type(self) -> &'static str {
        match self {
            Extension::Jpg => "image/jpeg",
            Extension::Png => "image/png",
            Extension::Bmp => "image/bmp",
            Extension::Tiff => "image/tiff",
            Extension::Gif => "image/gif",
        }
    }

    /// Encoder used for this extension.
    pub fn image_format(self) -> ImageFormat {
        match self {
            Extension::Jpg => ImageFormat::Jpeg,
            Extension::Png => ImageFormat::Png,
            Extension::Bmp => ImageFormat::Bmp,
            Extension::Tiff => ImageFormat::Tiff,
            Extension::Gif => ImageFormat::Gif,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_supported_extension_in_any_case() {
        for ext in Extension::ALL {
            let wire = ext.as_str();
            assert_eq!(Extension::parse(wire), Some(ext));
            assert_eq!(Extension::parse(&wire.to_ascii_uppercase()), Some(ext));
            assert_eq!(Extension::parse(&format!(" {wire} ")), Some(ext));
        }
    }

    #[test]
    fn wire_forms_are_distinct_lowercase_and_dotted() {
        let wires: Vec<&str> = Extension::ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(wires, [".jpg", ".png", ".bmp", ".tiff", ".gif"]);
        for wire in &wires {
            assert!(wire.starts_with('.'));
            assert_eq!(*wire, wire.to_ascii_lowercase());
        }
    }

    #[test]
    fn parse_rejects_unlisted_and_undotted_values() {
        for val in [".webp", ".jpeg", "png", "", " ", ".tif", "image/png"] {
            assert_eq!(Extension::parse(val), None, "{val:?} should be rejected");
        }
    }

    #[test]
    fn from_file_name_uses_last_extension() {
        assert_eq!(Extension::from_file_name("cat.PNG"), Some(Extension::Png));
        assert_eq!(
            Extension::from_file_name("archive.png.gif"),
            Some(Extension::Gif)
        );
        assert_eq!(Extension::from_file_name("noext"), None);
        assert_eq!(Extension::from_file_name("photo.webp"), None);
    }

    #[test]
    fn mime_types_follow_extension() {
        assert_eq!(Extension::Jpg.mime_type(), "image/jpeg");
        for ext in [
            Extension::Png,
            Extension::Bmp,
            Extension::Tiff,
            Extension::Gif,
        ] {
            assert_eq!(ext.mime_type(), format!("image/{}", &ext.as_str()[1..]));
        }
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(Extension::Tiff.to_string(), ".tiff");
    }
}
