//! Document rewriting.
//!
//! Pattern-based text transform: the document is treated as text, image
//! references are located with a regex and substituted in place. Inputs are
//! hand-authored, well-formed templates with a small tag vocabulary, so a
//! full DOM parse buys nothing here.

pub mod stylesheet;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::asset::encode::{self, EncodeChoice};
use crate::asset::resolve::{self, Resolution};
use crate::config::BuildConfig;
use crate::error::AssetError;
use crate::report::DocumentStats;
use crate::{debug, log};

/// `<img ...>` tag with a double-quoted src attribute. Captures the
/// attribute text before src, the src value, and the attribute text after
/// src (including a self-closing slash).
static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img\b([^>]*?\s)src\s*=\s*"([^"]*)"([^>]*)>"#).unwrap());

/// Rewrite one document: stylesheet inlining first, then every image
/// reference in match order.
///
/// Returns the rewritten text and the per-document stats. Writing the
/// result to disk is the orchestrator's job.
pub fn rewrite_document(
    text: &str,
    doc_path: &Path,
    config: &BuildConfig,
) -> (String, DocumentStats) {
    let mut stats = DocumentStats::default();
    let mut text = text.to_string();

    stylesheet::inline_stylesheet(&mut text, config, &mut stats);
    rewrite_images(&mut text, doc_path, &mut stats);

    (text, stats)
}

/// Scan-and-substitute loop over image references.
///
/// The cursor only moves forward and every substitution lands behind it, so
/// the loop terminates even though inline SVG output or a freshly written
/// data URI sits where the original tag was. Later duplicate tags for the
/// same asset are matched and processed independently.
fn rewrite_images(text: &mut String, doc_path: &Path, stats: &mut DocumentStats) {
    let mut cursor = 0;
    while let Some(caps) = IMG_TAG.captures_at(text, cursor) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        let pre = caps[1].to_string();
        let src = caps[2].to_string();
        let post = caps[3].to_string();

        let replacement = process_reference(doc_path, &src, &pre, &post, stats);

        match replacement {
            Some(markup) => {
                let start = whole.start;
                text.replace_range(whole, &markup);
                cursor = start + markup.len();
            }
            None => cursor = whole.end,
        }
    }
}

/// Classify and process one image reference.
///
/// Returns the replacement for the whole matched tag, or `None` when the
/// tag must stay as written (pass-through, skipped, or errored).
fn process_reference(
    doc_path: &Path,
    src: &str,
    pre: &str,
    post: &str,
    stats: &mut DocumentStats,
) -> Option<String> {
    let asset = match resolve::resolve_asset(doc_path, src) {
        Resolution::PassThrough => return None,
        Resolution::Missing(path) => {
            stats.errors += 1;
            log!("error"; "{}: {}", doc_path.display(), AssetError::Missing(path));
            return None;
        }
        Resolution::Found(asset) => asset,
    };

    match EncodeChoice::for_asset(&asset) {
        EncodeChoice::Skip => {
            stats.skipped += 1;
            debug!("skip"; "{}: unsupported extension .{}", doc_path.display(), asset.extension);
            None
        }
        EncodeChoice::InlineSvg => match encode::encode_as_inline_svg(&asset.path) {
            Ok(markup) => {
                stats.svgs_inlined += 1;
                debug!("inline"; "svg {}", asset.path.display());
                // The SVG's own markup carries sizing now; the original
                // tag's attributes are dropped with the tag.
                Some(markup)
            }
            Err(e) => {
                stats.errors += 1;
                log!("error"; "{}: {:#}", doc_path.display(), anyhow::Error::from(e));
                None
            }
        },
        EncodeChoice::DataUri => match encode::encode_as_data_uri(&asset.path, &asset.extension) {
            Ok(uri) => {
                stats.images_encoded += 1;
                debug!("inline"; "base64 {}", asset.path.display());
                Some(format!(r#"<img{pre}src="{uri}"{post}>"#))
            }
            Err(e) => {
                stats.errors += 1;
                log!("error"; "{}: {:#}", doc_path.display(), anyhow::Error::from(e));
                None
            }
        },
    }
}
