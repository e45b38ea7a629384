//! Saved-listing crawl and resume checkpoint.

pub mod checkpoint;
pub mod crawler;

use async_trait::async_trait;

use crate::api::types::ListingData;
use crate::error::Result;

pub use checkpoint::{CheckpointStore, JsonFileStore, MemoryStore, RunContext, CHECKPOINT_KEY};
pub use crawler::PostCrawler;

/// One page of the user's saved listing.
#[async_trait]
pub trait SavedFeed: Send + Sync {
    async fn saved_page(&self, after: Option<&str>) -> Result<ListingData>;
}
