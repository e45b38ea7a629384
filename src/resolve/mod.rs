//! Link resolution.
//!
//! This module provides:
//! - Per-host resolvers turning a post URL into direct file URLs
//! - The ordered resolver registry (first match wins)
//! - The word vocabulary used to rebuild Redgifs file names

pub mod direct;
pub mod gallery;
pub mod gfycat;
pub mod imgur;
pub mod redgifs;
pub mod vocabulary;

use std::fmt;

use async_trait::async_trait;

use crate::api::types::ThingData;
use crate::api::ImgurKind;
use crate::error::{Error, Result};
use crate::media::{strip_query, PostRecord, ResolvedLinkSet};

pub use vocabulary::Vocabulary;

/// Source of a post's own metadata, fetched by permalink.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn post_data(&self, permalink_url: &str) -> Result<ThingData>;
}

/// Source of Imgur album and gallery image lists.
#[async_trait]
pub trait ImgurSource: Send + Sync {
    async fn images(&self, kind: ImgurKind, id: &str, client_id: &str) -> Result<Vec<String>>;
}

/// Collaborators a resolver may need.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    pub posts: &'a dyn PostSource,
    pub imgur: &'a dyn ImgurSource,
    pub imgur_client_id: Option<&'a str>,
    pub vocabulary: &'a Vocabulary,
}

/// Site-specific strategy for turning a post URL into direct media URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkResolver {
    RedditGallery,
    Imgur,
    Gfycat,
    Redgifs,
    DirectFile,
}

impl LinkResolver {
    pub fn name(self) -> &'static str {
        match self {
            LinkResolver::RedditGallery => "reddit-gallery",
            LinkResolver::Imgur => "imgur",
            LinkResolver::Gfycat => "gfycat",
            LinkResolver::Redgifs => "redgifs",
            LinkResolver::DirectFile => "direct",
        }
    }

    pub fn supports(self, url: &str) -> bool {
        match self {
            LinkResolver::RedditGallery => gallery::supports(url),
            LinkResolver::Imgur => imgur::supports(url),
            LinkResolver::Gfycat => gfycat::supports(url),
            LinkResolver::Redgifs => redgifs::supports(url),
            LinkResolver::DirectFile => direct::supports(url),
        }
    }

    /// Resolve a post's URL into direct media URLs.
    pub async fn resolve_links(
        self,
        post: &PostRecord,
        ctx: &ResolveContext<'_>,
    ) -> Result<ResolvedLinkSet> {
        let url = post
            .url
            .as_deref()
            .ok_or_else(|| Error::resolve(&post.origin_url, "post has no URL"))?;

        match self {
            LinkResolver::RedditGallery => gallery::resolve_links(post, ctx.posts).await,
            LinkResolver::Imgur => {
                imgur::resolve_links(strip_query(url), ctx.imgur, ctx.imgur_client_id).await
            }
            LinkResolver::Gfycat => Ok(gfycat::resolve_links(url)),
            LinkResolver::Redgifs => Ok(redgifs::resolve_links(url, ctx.vocabulary)),
            LinkResolver::DirectFile => Ok(direct::resolve_links(url)),
        }
    }
}

impl fmt::Display for LinkResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered resolver list. The first resolver that supports a URL wins.
#[derive(Debug, Clone)]
pub struct ResolverRegistry {
    resolvers: Vec<LinkResolver>,
}

impl Default for ResolverRegistry {
    /// Host-specific resolvers first, the generic extension matcher last.
    fn default() -> Self {
        Self::with_order(vec![
            LinkResolver::RedditGallery,
            LinkResolver::Imgur,
            LinkResolver::Gfycat,
            LinkResolver::Redgifs,
            LinkResolver::DirectFile,
        ])
    }
}

impl ResolverRegistry {
    pub fn with_order(resolvers: Vec<LinkResolver>) -> Self {
        Self { resolvers }
    }

    /// The first resolver supporting `url`, or `None` when the link is unsupported.
    pub fn resolve(&self, url: &str) -> Option<LinkResolver> {
        self.resolvers.iter().copied().find(|r| r.supports(url))
    }
}
