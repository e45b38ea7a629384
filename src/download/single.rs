//! Single post download logic.

use crate::download::orchestrator::DownloadOrchestrator;
use crate::download::state::RunStats;
use crate::error::Result;
use crate::fs::naming::NameGenerator;
use crate::media::PostRecord;

/// Download one post by permalink. The checkpoint is neither read nor written.
pub async fn download_single_post(
    orchestrator: &DownloadOrchestrator<'_>,
    permalink: &str,
    origin: &str,
    names: &mut dyn NameGenerator,
) -> Result<RunStats> {
    tracing::info!("Downloading single post: {}", permalink);

    let data = orchestrator.resolve.posts.post_data(permalink).await?;
    let post = PostRecord::from_thing(&data, origin);

    let mut stats = RunStats {
        posts_found: 1,
        ..Default::default()
    };
    orchestrator.download_post(&post, names, &mut stats).await?;

    tracing::info!(
        "Single post download complete: {} downloaded, {} skipped",
        stats.files_downloaded,
        stats.files_skipped
    );

    Ok(stats)
}
