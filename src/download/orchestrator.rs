//! Bulk run: crawl, resolve, plan, submit.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;

use crate::config::{Config, FolderPolicy};
use crate::crawl::{PostCrawler, RunContext, SavedFeed};
use crate::download::planner::BulkDownloadPlanner;
use crate::download::state::RunStats;
use crate::download::{DownloadOutcome, Downloader};
use crate::error::Result;
use crate::fs::naming::NameGenerator;
use crate::media::PostRecord;
use crate::output::notify::{Notification, Notifier};
use crate::output::progress::create_item_bar;
use crate::resolve::{ResolveContext, ResolverRegistry};

/// Knobs for a run, usually taken from [`Config`].
#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    pub base_folder: PathBuf,
    pub folder_policy: FolderPolicy,
    /// Pause between files of one post.
    pub job_delay: Duration,
    /// Pause after each supported post.
    pub post_delay: Duration,
    pub show_progress: bool,
    /// Log each saved file at info level.
    pub show_downloads: bool,
}

impl OrchestratorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_folder: config.download_directory(),
            folder_policy: config.folder_policy(),
            job_delay: config.job_delay(),
            post_delay: config.post_delay(),
            show_progress: config.options.show_progress,
            show_downloads: config.options.show_downloads,
        }
    }
}

/// Drives posts through resolution, planning and download, one at a time.
pub struct DownloadOrchestrator<'a> {
    pub registry: ResolverRegistry,
    pub resolve: ResolveContext<'a>,
    pub downloader: &'a dyn Downloader,
    pub notifier: &'a dyn Notifier,
    pub options: OrchestratorOptions,
}

impl<'a> DownloadOrchestrator<'a> {
    /// Crawl new saved posts and download each of them.
    ///
    /// A failing post is logged and skipped. A failing page fetch aborts the
    /// run before any notification is sent.
    pub async fn run(
        &self,
        feed: &dyn SavedFeed,
        origin: &str,
        ctx: &mut RunContext<'_>,
        names: &mut dyn NameGenerator,
    ) -> Result<RunStats> {
        let posts = PostCrawler::new(feed, origin).collect(ctx).await?;

        let mut stats = RunStats {
            posts_found: posts.len() as u64,
            ..Default::default()
        };

        let progress = if self.options.show_progress && !posts.is_empty() {
            create_item_bar(posts.len() as u64, "Posts")
        } else {
            ProgressBar::hidden()
        };

        for post in &posts {
            if let Err(e) = self.download_post(post, names, &mut stats).await {
                tracing::warn!("Failed to download {}: {}", post.origin_url, e);
                stats.mark_post_failed();
            }
            progress.inc(1);
        }

        progress.finish_and_clear();

        self.notifier
            .notify(&Notification::finished(posts.len()))
            .await;

        Ok(stats)
    }

    /// Resolve one post and submit its files.
    ///
    /// Unsupported posts are counted and return `Ok`. Individual file
    /// failures are counted without failing the post.
    pub async fn download_post(
        &self,
        post: &PostRecord,
        names: &mut dyn NameGenerator,
        stats: &mut RunStats,
    ) -> Result<()> {
        let Some(url) = post.url.as_deref() else {
            tracing::debug!("{} has no link", post.id);
            stats.mark_post_unsupported();
            return Ok(());
        };

        let Some(resolver) = self.registry.resolve(url) else {
            tracing::debug!("No resolver for {} ({})", url, post.id);
            stats.mark_post_unsupported();
            return Ok(());
        };

        let links = resolver.resolve_links(post, &self.resolve).await?;
        tracing::debug!("{} resolved {} link(s) via {}", post.id, links.len(), resolver);

        let folder = self.options.folder_policy.folder_for(&post.source);
        let jobs =
            BulkDownloadPlanner::plan(&links, &self.options.base_folder, folder, names)?;

        for (index, job) in jobs.iter().enumerate() {
            if index > 0 {
                pause(self.options.job_delay).await;
            }

            match self.downloader.submit(job).await {
                Ok(DownloadOutcome::Saved { bytes }) => {
                    if self.options.show_downloads {
                        tracing::info!("Downloaded: {}", job.destination.display());
                    }
                    stats.record_download(bytes);
                }
                Ok(DownloadOutcome::Skipped) => stats.record_skip(),
                Err(e) => {
                    tracing::warn!("Failed to download {}: {}", job.source_url, e);
                    stats.record_file_failure();
                }
            }
        }

        stats.mark_post_processed();
        pause(self.options.post_delay).await;
        Ok(())
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
