//! Redgifs watch pages.
//!
//! `https://www.redgifs.com/watch/happyredcatfish` becomes
//! `https://thcf2.redgifs.com/HappyRedCatFish.mp4`.

use crate::media::{strip_query, ResolvedLinkSet};
use crate::resolve::vocabulary::{capitalize_words, Vocabulary};

/// Content subdomain prefixed to the site host.
const CONTENT_SUBDOMAIN: &str = "thcf2.";

pub fn supports(url: &str) -> bool {
    url.contains("//redgifs.com/") || url.contains("www.redgifs.com/")
}

/// Rewrite a watch page to its video file. Empty when the ID has no known words.
pub fn resolve_links(url: &str, vocabulary: &Vocabulary) -> ResolvedLinkSet {
    let url = strip_query(url).trim_end_matches('/');

    let Some((page, token)) = url.rsplit_once('/') else {
        return ResolvedLinkSet::empty();
    };

    let token = token.to_lowercase();
    let stem = capitalize_words(&vocabulary.segment(&token));
    if stem.is_empty() {
        tracing::debug!("No vocabulary words in redgifs ID '{}'", token);
        return ResolvedLinkSet::empty();
    }

    let host = page
        .replacen("www.", "", 1)
        .replacen("/watch", "", 1)
        .replacen("redgifs", &format!("{}redgifs", CONTENT_SUBDOMAIN), 1);

    ResolvedLinkSet::single(format!("{}/{}.mp4", host, stem))
}
