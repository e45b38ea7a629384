//! Paginated walk over the saved listing.

use std::collections::VecDeque;

use futures::stream::{self, Stream, TryStreamExt};

use crate::crawl::checkpoint::RunContext;
use crate::crawl::SavedFeed;
use crate::error::Result;
use crate::media::PostRecord;

struct CrawlState<'a> {
    feed: &'a dyn SavedFeed,
    origin: &'a str,
    stop_at: Option<String>,
    cursor: Option<String>,
    pending: VecDeque<PostRecord>,
    exhausted: bool,
}

impl CrawlState<'_> {
    async fn fetch_page(&mut self) -> Result<()> {
        let page = self.feed.saved_page(self.cursor.as_deref()).await?;
        tracing::debug!(
            "Saved page after {:?}: {} item(s), next {:?}",
            self.cursor,
            page.children.len(),
            page.next_cursor()
        );

        self.cursor = page.next_cursor().map(str::to_string);
        if self.cursor.is_none() || page.children.is_empty() {
            self.exhausted = true;
        }

        for thing in &page.children {
            if self.stop_at.as_deref() == Some(thing.data.name.as_str()) {
                tracing::info!("Reached checkpoint {}", thing.data.name);
                self.exhausted = true;
                break;
            }
            self.pending
                .push_back(PostRecord::from_thing(&thing.data, self.origin));
        }

        Ok(())
    }
}

/// Walks saved posts newest first until the checkpoint or the end of the listing.
pub struct PostCrawler<'a> {
    feed: &'a dyn SavedFeed,
    origin: &'a str,
}

impl<'a> PostCrawler<'a> {
    pub fn new(feed: &'a dyn SavedFeed, origin: &'a str) -> Self {
        Self { feed, origin }
    }

    /// Lazy stream of posts. Pages are fetched only as the stream is polled.
    ///
    /// The post whose ID equals `stop_at` is not yielded, nor is anything after it.
    pub fn stream(&self, stop_at: Option<&str>) -> impl Stream<Item = Result<PostRecord>> + 'a {
        let state = CrawlState {
            feed: self.feed,
            origin: self.origin,
            stop_at: stop_at.map(str::to_string),
            cursor: None,
            pending: VecDeque::new(),
            exhausted: false,
        };

        stream::try_unfold(state, |mut state| async move {
            loop {
                if let Some(post) = state.pending.pop_front() {
                    return Ok(Some((post, state)));
                }
                if state.exhausted {
                    return Ok(None);
                }
                state.fetch_page().await?;
            }
        })
    }

    /// Collect every new post, advancing the checkpoint to the first one seen.
    pub async fn collect(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PostRecord>> {
        let stop_at = ctx.stop_at().map(str::to_string);
        let mut posts_stream = std::pin::pin!(self.stream(stop_at.as_deref()));

        let mut posts = Vec::new();
        while let Some(post) = posts_stream.try_next().await? {
            if posts.is_empty() {
                ctx.advance(&post.id)?;
            }
            posts.push(post);
        }

        tracing::info!("Collected {} new saved post(s)", posts.len());
        Ok(posts)
    }
}
