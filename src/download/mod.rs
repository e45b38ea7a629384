//! Download module.
//!
//! This module provides:
//! - Job planning (destination folders and file names)
//! - The HTTP download primitive
//! - The bulk orchestrator and single post downloads
//! - Run statistics

pub mod fetcher;
pub mod orchestrator;
pub mod planner;
pub mod single;
pub mod state;

use async_trait::async_trait;

use crate::error::Result;

pub use fetcher::HttpDownloader;
pub use orchestrator::{DownloadOrchestrator, OrchestratorOptions};
pub use planner::{BulkDownloadPlanner, DownloadJob};
pub use single::download_single_post;
pub use state::RunStats;

/// Result of one submitted job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved { bytes: u64 },
    /// The destination already existed.
    Skipped,
}

/// Fetches a job's URL into its destination.
#[async_trait]
pub trait Downloader: Send + Sync {
    async fn submit(&self, job: &DownloadJob) -> Result<DownloadOutcome>;
}
