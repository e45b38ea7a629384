//! Normalized post records.

use crate::api::types::ThingData;

/// One saved or fetched post.
///
/// `id` is the only identity: two records with the same `id` are the same
/// post even if their `url` differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    /// Fullname, e.g. `t3_abc123`.
    pub id: String,

    /// Target URL of the post. `None` for text posts.
    pub url: Option<String>,

    /// Absolute permalink of the post itself.
    pub origin_url: String,

    /// Subreddit name.
    pub source: String,
}

impl PostRecord {
    /// Normalize a listing item. Saved comments fall back to their post's link.
    pub fn from_thing(data: &ThingData, origin: &str) -> Self {
        let url = data
            .url
            .as_deref()
            .or(data.link_url.as_deref())
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .map(str::to_string);

        let origin_url = if data.permalink.starts_with("http") {
            data.permalink.clone()
        } else {
            format!("{}{}", origin.trim_end_matches('/'), data.permalink)
        };

        Self {
            id: data.name.clone(),
            url,
            origin_url,
            source: data.subreddit.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thing(name: &str, url: Option<&str>, link_url: Option<&str>) -> ThingData {
        ThingData {
            name: name.to_string(),
            url: url.map(str::to_string),
            link_url: link_url.map(str::to_string),
            permalink: format!("/r/cats/comments/{}/title/", name),
            subreddit: "cats".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_thing() {
        let post = PostRecord::from_thing(
            &thing("t3_abc", Some("https://i.redd.it/abc.jpg"), None),
            "https://www.reddit.com/",
        );

        assert_eq!(post.id, "t3_abc");
        assert_eq!(post.url.as_deref(), Some("https://i.redd.it/abc.jpg"));
        assert_eq!(
            post.origin_url,
            "https://www.reddit.com/r/cats/comments/t3_abc/title/"
        );
        assert_eq!(post.source, "cats");
    }

    #[test]
    fn test_saved_comment_uses_link_url() {
        let post = PostRecord::from_thing(
            &thing("t1_xyz", None, Some("https://i.imgur.com/x.png")),
            "https://www.reddit.com",
        );
        assert_eq!(post.url.as_deref(), Some("https://i.imgur.com/x.png"));
    }

    #[test]
    fn test_text_post_has_no_url() {
        let post = PostRecord::from_thing(&thing("t3_text", Some(""), None), "https://www.reddit.com");
        assert_eq!(post.url, None);
    }
}
