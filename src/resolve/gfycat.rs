//! Gfycat links. Thumbnail URLs are rewritten to the full resolution video.

use crate::media::{strip_query, ResolvedLinkSet};

pub fn supports(url: &str) -> bool {
    url.contains("//gfycat.com/") || url.contains("www.gfycat.com/")
}

const THUMBNAIL_SUFFIX: &str = "-size_restricted.gif";

/// `thumbs.gfycat.com/<Id>-size_restricted.gif` -> `giant.gfycat.com/<Id>.mp4`
///
/// Any other Gfycat URL is a watch page with nothing to rewrite and yields
/// an empty set.
pub fn resolve_links(url: &str) -> ResolvedLinkSet {
    let url = strip_query(url);
    if !url.ends_with(THUMBNAIL_SUFFIX) {
        tracing::debug!("No Gfycat thumbnail in {}", url);
        return ResolvedLinkSet::empty();
    }

    let link = url
        .replacen("thumbs", "giant", 1)
        .replacen(THUMBNAIL_SUFFIX, ".mp4", 1);

    ResolvedLinkSet::single(link)
}
