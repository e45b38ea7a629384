//! API response type definitions.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Reddit listing wrapper (`{"kind": "Listing", "data": {...}}`).
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

/// Listing payload: pagination cursor and items.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    /// Cursor for the next page. `None` on the last page.
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

impl ListingData {
    /// The cursor for the next page, treating a literal `"null"` as absent.
    pub fn next_cursor(&self) -> Option<&str> {
        self.after
            .as_deref()
            .filter(|after| !after.is_empty() && *after != "null")
    }
}

/// A listing item (post `t3` or comment `t1`).
#[derive(Debug, Clone, Deserialize)]
pub struct Thing {
    #[serde(default)]
    pub kind: String,
    pub data: ThingData,
}

/// Fields of a listing item used by the downloader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThingData {
    /// Fullname, e.g. `t3_abc123`.
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Link URL of the post a saved comment belongs to.
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub subreddit: String,
    /// Gallery entries keyed by media ID, in gallery order.
    #[serde(default)]
    pub media_metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub crosspost_parent_list: Option<Vec<CrosspostParent>>,
}

/// Parent post of a crosspost.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrosspostParent {
    #[serde(default)]
    pub media_metadata: Option<Map<String, Value>>,
}

/// One gallery entry from `media_metadata`.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaEntry {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub s: Option<MediaSource>,
}

/// Source rendition of a gallery entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSource {
    /// Image URL (HTML-escaped).
    #[serde(default)]
    pub u: Option<String>,
    /// Video rendition of an animated entry.
    #[serde(default)]
    pub mp4: Option<String>,
    /// GIF rendition of an animated entry.
    #[serde(default)]
    pub gif: Option<String>,
}

impl MediaSource {
    /// The best URL for this rendition.
    pub fn best_url(&self) -> Option<&str> {
        self.u
            .as_deref()
            .or(self.mp4.as_deref())
            .or(self.gif.as_deref())
    }
}

/// Imgur API response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct ImgurResponse {
    pub data: ImgurData,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub status: Option<u16>,
}

/// Imgur payload: albums return a bare image list, galleries an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImgurData {
    Images(Vec<ImgurImage>),
    Gallery(ImgurGallery),
}

/// Imgur gallery item.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImgurGallery {
    #[serde(default)]
    pub images: Option<Vec<ImgurImage>>,
    /// Set when the gallery item is a single image.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Imgur image.
#[derive(Debug, Clone, Deserialize)]
pub struct ImgurImage {
    pub link: String,
}

impl ImgurData {
    /// Image links in response order.
    pub fn into_links(self) -> Vec<String> {
        match self {
            ImgurData::Images(images) => images.into_iter().map(|i| i.link).collect(),
            ImgurData::Gallery(gallery) => match (gallery.images, gallery.link) {
                (Some(images), _) => images.into_iter().map(|i| i.link).collect(),
                (None, Some(link)) => vec![link],
                (None, None) => Vec::new(),
            },
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_parse() {
        let json = r#"{
            "kind": "Listing",
            "data": {
                "after": "t3_second",
                "children": [
                    {"kind": "t3", "data": {
                        "name": "t3_first",
                        "url": "https://i.redd.it/abc.jpg",
                        "permalink": "/r/cats/comments/first/title/",
                        "subreddit": "cats"
                    }}
                ]
            }
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.data.next_cursor(), Some("t3_second"));
        assert_eq!(listing.data.children.len(), 1);
        assert_eq!(listing.data.children[0].data.name, "t3_first");
        assert_eq!(listing.data.children[0].data.subreddit, "cats");
    }

    #[test]
    fn test_null_cursor() {
        let listing: Listing =
            serde_json::from_str(r#"{"data": {"after": null, "children": []}}"#).unwrap();
        assert_eq!(listing.data.next_cursor(), None);

        let listing: Listing =
            serde_json::from_str(r#"{"data": {"after": "null", "children": []}}"#).unwrap();
        assert_eq!(listing.data.next_cursor(), None);
    }

    #[test]
    fn test_media_metadata_keeps_order() {
        let json = r#"{
            "name": "t3_x",
            "media_metadata": {
                "zzz": {"status": "valid", "s": {"u": "https://preview.redd.it/zzz.jpg"}},
                "aaa": {"status": "valid", "s": {"u": "https://preview.redd.it/aaa.jpg"}},
                "mmm": {"status": "valid", "s": {"gif": "https://i.redd.it/mmm.gif", "mp4": "https://i.redd.it/mmm.mp4"}}
            }
        }"#;

        let data: ThingData = serde_json::from_str(json).unwrap();
        let keys: Vec<&String> = data.media_metadata.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["zzz", "aaa", "mmm"]);

        let entry: MediaEntry =
            serde_json::from_value(data.media_metadata.unwrap()["mmm"].clone()).unwrap();
        assert_eq!(
            entry.s.unwrap().best_url(),
            Some("https://i.redd.it/mmm.mp4")
        );
    }

    #[test]
    fn test_imgur_album_shape() {
        let json = r#"{"data": [{"link": "https://i.imgur.com/a.jpg"}, {"link": "https://i.imgur.com/b.png"}], "success": true, "status": 200}"#;
        let response: ImgurResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.data.into_links(),
            ["https://i.imgur.com/a.jpg", "https://i.imgur.com/b.png"]
        );
    }

    #[test]
    fn test_imgur_gallery_shapes() {
        let json = r#"{"data": {"images": [{"link": "https://i.imgur.com/a.jpg"}]}, "success": true}"#;
        let response: ImgurResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.into_links(), ["https://i.imgur.com/a.jpg"]);

        let json = r#"{"data": {"link": "https://i.imgur.com/single.gif"}, "success": true}"#;
        let response: ImgurResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.into_links(), ["https://i.imgur.com/single.gif"]);

        let json = r#"{"data": {"id": "abc"}, "success": true}"#;
        let response: ImgurResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.into_links().is_empty());
    }

    #[test]
    fn test_imgur_error_shape() {
        let json = r#"{"data": {"error": "Unauthorized", "request": "/3/album/x/images"}, "success": false, "status": 403}"#;
        let response: ImgurResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.status, Some(403));
    }
}
