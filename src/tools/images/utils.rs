use scraper::Html;
use url::Url;

use crate::error::{Error, Result};
use crate::selectors::IMG_SELECTOR;
use crate::tools::table::WIKI_ORIGIN;

/// The first image of an animal page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// Find the first `<img>` anywhere in the page; it must carry `src` and `alt`.
pub(super) fn first_image(html: &str, page_url: &str) -> Result<ImageRef> {
    let doc = Html::parse_document(html);
    let img = doc
        .select(&IMG_SELECTOR)
        .next()
        .ok_or_else(|| Error::parse(page_url, "no img element"))?;
    let src = img
        .value()
        .attr("src")
        .ok_or_else(|| Error::parse(page_url, "img has no src attribute"))?;
    let alt = img
        .value()
        .attr("alt")
        .ok_or_else(|| Error::parse(page_url, "img has no alt attribute"))?;

    Ok(ImageRef {
        url: resolve_image_url(src),
        alt: alt.to_string(),
    })
}

/// Absolute URL for an image `src`.
///
/// - `//host/path` (what Wikipedia serves) gets `https:`
/// - a URL that already has a scheme is kept
/// - `/path` is resolved against the wiki origin
/// - anything else is taken as `host/path` and gets `https://`
pub(super) fn resolve_image_url(src: &str) -> String {
    if let Some(rest) = src.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if src.starts_with('/') {
        return format!("{WIKI_ORIGIN}{src}");
    }
    if Url::parse(src).is_ok() && src.contains("://") {
        return src.to_string();
    }
    format!("https://{src}")
}
