//! Asset encoding: inline SVG markup or base64 data URIs.

use std::fs;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::config::{RASTER_EXTENSIONS, SVG_INLINE_MAX_BYTES};
use crate::error::AssetError;

use super::mime;
use super::resolve::ResolvedAsset;

/// How a resolved asset gets embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeChoice {
    /// Splice cleaned SVG markup in place of the whole image tag.
    InlineSvg,
    /// Rewrite only the src attribute value to a data URI.
    DataUri,
    /// Unsupported extension; the reference stays untouched.
    Skip,
}

impl EncodeChoice {
    /// Pick the embedding strategy for a resolved asset.
    ///
    /// Pure function of extension and byte size, never of content.
    pub fn for_asset(asset: &ResolvedAsset) -> Self {
        if asset.extension == "svg" {
            if asset.size <= SVG_INLINE_MAX_BYTES {
                Self::InlineSvg
            } else {
                Self::DataUri
            }
        } else if RASTER_EXTENSIONS.contains(&asset.extension.as_str()) {
            Self::DataUri
        } else {
            Self::Skip
        }
    }
}

/// Read a file and encode it as a `data:<mime>;base64,<payload>` URI.
pub fn encode_as_data_uri(path: &Path, extension: &str) -> Result<String, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mime = mime::from_extension(extension);
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Read an SVG file and clean it for direct splicing into HTML.
///
/// Strips the XML declaration and comment blocks, then trims surrounding
/// whitespace. The result starts at the `<svg>` element itself.
pub fn encode_as_inline_svg(path: &Path) -> Result<String, AssetError> {
    let source = fs::read_to_string(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_svg(&source))
}

/// Remove the XML prologue and comments from SVG source.
fn clean_svg(source: &str) -> String {
    let mut text = source.trim_start();

    // The declaration, when present, is the first markup item.
    if text.starts_with("<?xml")
        && let Some(end) = text.find("?>")
    {
        text = &text[end + 2..];
    }

    let mut cleaned = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("<!--") {
        cleaned.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            // Unterminated comment: drop the remainder.
            None => rest = "",
        }
    }
    cleaned.push_str(rest);

    cleaned.trim().to_string()
}
