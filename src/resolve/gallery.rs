//! Reddit galleries (`https://www.reddit.com/gallery/<id>`).
//!
//! The gallery URL itself carries no image list. The post's own JSON (via
//! its permalink) has a `media_metadata` map, or for a crosspost, the
//! parent post's map.

use serde_json::{Map, Value};

use crate::api::types::{MediaEntry, ThingData};
use crate::error::{Error, Result};
use crate::media::{unescape_ampersands, PostRecord, ResolvedLinkSet};
use crate::resolve::PostSource;

pub fn supports(url: &str) -> bool {
    url.contains("reddit.com/gallery/")
}

pub async fn resolve_links(post: &PostRecord, posts: &dyn PostSource) -> Result<ResolvedLinkSet> {
    let data = posts.post_data(&post.origin_url).await?;

    let metadata = media_metadata(&data)
        .ok_or_else(|| Error::resolve(&post.origin_url, "post has no media metadata"))?;

    Ok(links_from_metadata(metadata))
}

/// The post's gallery map, falling back to the first crosspost parent's.
fn media_metadata(data: &ThingData) -> Option<&Map<String, Value>> {
    data.media_metadata
        .as_ref()
        .filter(|m| !m.is_empty())
        .or_else(|| {
            data.crosspost_parent_list
                .as_ref()?
                .first()?
                .media_metadata
                .as_ref()
                .filter(|m| !m.is_empty())
        })
}

/// One link per entry, in map order.
pub fn links_from_metadata(metadata: &Map<String, Value>) -> ResolvedLinkSet {
    let mut links = Vec::with_capacity(metadata.len());

    for (key, value) in metadata {
        let entry: MediaEntry = match serde_json::from_value(value.clone()) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping malformed gallery entry {}: {}", key, e);
                continue;
            }
        };

        match entry.s.as_ref().and_then(|s| s.best_url()) {
            Some(url) => links.push(unescape_ampersands(url)),
            None => tracing::warn!(
                "Skipping gallery entry {} without a source (status: {})",
                key,
                entry.status.as_deref().unwrap_or("unknown")
            ),
        }
    }

    ResolvedLinkSet::new(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::CrosspostParent;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct FakePosts {
        data: ThingData,
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl PostSource for FakePosts {
        async fn post_data(&self, permalink_url: &str) -> Result<ThingData> {
            self.calls.lock().unwrap().push(permalink_url.to_string());
            Ok(self.data.clone())
        }
    }

    fn metadata(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    fn gallery_post() -> PostRecord {
        PostRecord {
            id: "t3_gal".into(),
            url: Some("https://www.reddit.com/gallery/gal".into()),
            origin_url: "https://www.reddit.com/r/cats/comments/gal/three_cats/".into(),
            source: "cats".into(),
        }
    }

    const THREE_ENTRIES: &str = r#"{
        "k2": {"status": "valid", "s": {"u": "https://preview.redd.it/k2.jpg?width=640&amp;s=2"}},
        "k0": {"status": "valid", "s": {"u": "https://preview.redd.it/k0.jpg?width=640&amp;s=0"}},
        "k1": {"status": "valid", "s": {"u": "https://preview.redd.it/k1.png"}}
    }"#;

    #[test]
    fn test_supports() {
        assert!(supports("https://www.reddit.com/gallery/abc"));
        assert!(supports("https://reddit.com/gallery/abc"));
        assert!(!supports("https://www.reddit.com/r/cats/comments/abc/"));
    }

    #[tokio::test]
    async fn test_resolve_uses_permalink_and_keeps_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let posts = FakePosts {
            data: ThingData {
                name: "t3_gal".into(),
                media_metadata: Some(metadata(THREE_ENTRIES)),
                ..Default::default()
            },
            calls: calls.clone(),
        };

        let links = resolve_links(&gallery_post(), &posts).await.unwrap();

        assert_eq!(
            links.as_slice(),
            [
                "https://preview.redd.it/k2.jpg?width=640&s=2",
                "https://preview.redd.it/k0.jpg?width=640&s=0",
                "https://preview.redd.it/k1.png",
            ]
        );
        assert_eq!(
            *calls.lock().unwrap(),
            ["https://www.reddit.com/r/cats/comments/gal/three_cats/"]
        );
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_crosspost_parent() {
        let posts = FakePosts {
            data: ThingData {
                name: "t3_gal".into(),
                media_metadata: None,
                crosspost_parent_list: Some(vec![CrosspostParent {
                    media_metadata: Some(metadata(THREE_ENTRIES)),
                }]),
                ..Default::default()
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        };

        let links = resolve_links(&gallery_post(), &posts).await.unwrap();
        assert_eq!(links.len(), 3);
    }

    #[tokio::test]
    async fn test_resolve_without_metadata_fails() {
        let posts = FakePosts {
            data: ThingData {
                name: "t3_gal".into(),
                ..Default::default()
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        };

        let err = resolve_links(&gallery_post(), &posts).await.unwrap_err();
        assert!(matches!(err, Error::Resolve { .. }));
    }

    #[test]
    fn test_animated_and_failed_entries() {
        let links = links_from_metadata(&metadata(
            r#"{
                "a": {"status": "valid", "s": {"gif": "https://i.redd.it/a.gif", "mp4": "https://i.redd.it/a.mp4?x=1&amp;y=2"}},
                "b": {"status": "failed"}
            }"#,
        ));
        assert_eq!(links.as_slice(), ["https://i.redd.it/a.mp4?x=1&y=2"]);
    }
}
