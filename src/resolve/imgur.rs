//! Imgur albums and galleries (`https://imgur.com/a/<id>`, `https://imgur.com/gallery/<id>`).
//!
//! Direct `i.imgur.com` content links are left to the direct file resolver.

use crate::api::ImgurKind;
use crate::error::{Error, Result};
use crate::media::{strip_query, ResolvedLinkSet};
use crate::resolve::ImgurSource;

pub fn supports(url: &str) -> bool {
    url.contains("imgur.com/") && !url.contains("i.imgur.com/")
}

/// Split an Imgur page URL into endpoint kind and ID.
pub fn classify(url: &str) -> Option<(ImgurKind, &str)> {
    let (_, path) = strip_query(url).split_once("imgur.com/")?;
    let path = path.trim_end_matches('/');

    let kind = if path.starts_with("a/") {
        ImgurKind::Album
    } else {
        ImgurKind::Gallery
    };

    let last = path.rsplit('/').next()?;
    let id = last.split_once('.').map(|(id, _)| id).unwrap_or(last);

    if id.is_empty() {
        None
    } else {
        Some((kind, id))
    }
}

pub async fn resolve_links(
    url: &str,
    imgur: &dyn ImgurSource,
    client_id: Option<&str>,
) -> Result<ResolvedLinkSet> {
    let client_id = client_id.ok_or_else(|| Error::MissingConfig("imgur.client_id".into()))?;

    let (kind, id) = classify(url).ok_or_else(|| Error::resolve(url, "no Imgur ID in URL"))?;
    tracing::debug!("Resolving Imgur {} {}", kind, id);

    let links = imgur.images(kind, id, client_id).await?;
    Ok(ResolvedLinkSet::new(links))
}
