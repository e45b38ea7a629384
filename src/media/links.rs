//! Resolved link sets and URL helpers.

/// Ordered direct media URLs for one post. Empty means no media was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedLinkSet(Vec<String>);

impl ResolvedLinkSet {
    pub fn new(links: Vec<String>) -> Self {
        Self(links)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn single(link: impl Into<String>) -> Self {
        Self(vec![link.into()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for ResolvedLinkSet {
    fn from(links: Vec<String>) -> Self {
        Self(links)
    }
}

impl IntoIterator for ResolvedLinkSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedLinkSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Remove the query string (and anything after it) from a URL.
pub fn strip_query(url: &str) -> &str {
    url.split(['?', '#']).next().unwrap_or(url)
}

/// Extension of the last path segment, without the query string.
///
/// Returns `None` when the last segment has no `.`.
pub fn url_extension(url: &str) -> Option<&str> {
    let path = strip_query(url);
    let path = path.split_once("://").map(|(_, rest)| rest).unwrap_or(path);
    let (_, last_segment) = path.rsplit_once('/')?;
    let (_, ext) = last_segment.rsplit_once('.')?;

    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// Undo HTML entity escaping of `&` in a URL.
pub fn unescape_ampersands(url: &str) -> String {
    url.replace("&amp;", "&")
}
