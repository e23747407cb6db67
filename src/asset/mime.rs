//! MIME type selection for data URIs.

/// Image MIME type constants.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const SVG: &str = "image/svg+xml";
}

/// Pick the MIME type for a lowercase file extension.
///
/// Unknown extensions default to `image/png` so an unexpected asset still
/// produces a well-formed data URI.
pub fn from_extension(ext: &str) -> &'static str {
    match ext {
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "svg" => types::SVG,
        _ => types::PNG,
    }
}
