//! Reddit Downloader - media downloader for saved Reddit posts
//!
//! This library walks a user's saved posts newest first, resolves each
//! post's link into direct media URLs and downloads the files.
//!
//! # Features
//!
//! - Resume from the newest post of the previous run
//! - Direct image and video links (`.gifv` fetched as `.mp4`)
//! - Reddit galleries, including crossposted ones
//! - Imgur albums and galleries (needs an API client ID)
//! - Gfycat and Redgifs watch pages
//! - Optional per-subreddit folders with an allow-list
//! - Single post downloads by permalink
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use reddit_downloader::{
//!     crawl::{JsonFileStore, RunContext},
//!     download::{DownloadOrchestrator, HttpDownloader, OrchestratorOptions},
//!     fs::RandomNames,
//!     output::ConsoleNotifier,
//!     resolve::{ResolveContext, ResolverRegistry, Vocabulary},
//!     Config, ImgurApi, RedditApi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let reddit = RedditApi::new(&config.account)?;
//!     let imgur = ImgurApi::new(&config.account.user_agent)?;
//!     let downloader = HttpDownloader::new(&config.account.user_agent, true)?;
//!
//!     let orchestrator = DownloadOrchestrator {
//!         registry: ResolverRegistry::default(),
//!         resolve: ResolveContext {
//!             posts: &reddit,
//!             imgur: &imgur,
//!             imgur_client_id: config.imgur_client_id(),
//!             vocabulary: Vocabulary::bundled(),
//!         },
//!         downloader: &downloader,
//!         notifier: &ConsoleNotifier,
//!         options: OrchestratorOptions::from_config(&config),
//!     };
//!
//!     let store = JsonFileStore::new(config.checkpoint_file());
//!     let mut ctx = RunContext::load(&store)?;
//!     let stats = orchestrator
//!         .run(&reddit, reddit.origin(), &mut ctx, &mut RandomNames)
//!         .await?;
//!     println!("{} files downloaded", stats.files_downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;
pub mod resolve;

// Re-exports for convenience
pub use api::{ImgurApi, RedditApi};
pub use config::{Config, DownloadMode};
pub use crawl::{PostCrawler, RunContext};
pub use download::{
    download_single_post, BulkDownloadPlanner, DownloadJob, DownloadOrchestrator, RunStats,
};
pub use error::{Error, Result};
pub use media::{PostRecord, ResolvedLinkSet};
pub use resolve::{LinkResolver, ResolverRegistry};
