//! Direct file links (`https://i.redd.it/abc.jpg`).

use crate::media::{strip_query, url_extension, ResolvedLinkSet};

/// Extensions downloaded as-is.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "gifv", "mp4", "mp3"];

pub fn supports(url: &str) -> bool {
    url_extension(url)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// The URL itself, with `.gifv` wrappers pointed at the real `.mp4`.
pub fn resolve_links(url: &str) -> ResolvedLinkSet {
    let url = strip_query(url);

    let link = match url.len().checked_sub(".gifv".len()) {
        Some(stem_len)
            if url
                .get(stem_len..)
                .is_some_and(|ext| ext.eq_ignore_ascii_case(".gifv")) =>
        {
            format!("{}.mp4", &url[..stem_len])
        }
        _ => url.to_string(),
    };

    ResolvedLinkSet::single(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_allow_list() {
        for ext in SUPPORTED_EXTENSIONS {
            assert!(supports(&format!("https://i.redd.it/abc.{}", ext)), "{}", ext);
        }
        assert!(supports("https://i.imgur.com/abc.JPG"));
        assert!(supports("https://i.redd.it/abc.jpg?width=640"));
    }

    #[test]
    fn test_does_not_support_pages() {
        assert!(!supports("https://www.reddit.com/r/cats/comments/abc/title/"));
        assert!(!supports("https://imgur.com/a/abc"));
        assert!(!supports("https://example.com/page.html"));
        assert!(!supports("https://redgifs.com/watch/happyredfox"));
    }

    #[test]
    fn test_resolve_returns_input() {
        for ext in SUPPORTED_EXTENSIONS.iter().filter(|e| **e != "gifv") {
            let url = format!("https://i.redd.it/abc.{}", ext);
            assert_eq!(resolve_links(&url).as_slice(), [url.clone()]);
        }
    }

    #[test]
    fn test_resolve_rewrites_gifv() {
        assert_eq!(
            resolve_links("https://i.imgur.com/abc.gifv").as_slice(),
            ["https://i.imgur.com/abc.mp4"]
        );
    }

    #[test]
    fn test_resolve_strips_query() {
        assert_eq!(
            resolve_links("https://i.imgur.com/abc.gifv?1").as_slice(),
            ["https://i.imgur.com/abc.mp4"]
        );
    }
}
