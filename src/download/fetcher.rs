//! HTTP file downloads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::download::planner::DownloadJob;
use crate::download::{DownloadOutcome, Downloader};
use crate::error::{Error, Result};
use crate::output::progress::create_download_bar;

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Streams files to disk with `reqwest`.
pub struct HttpDownloader {
    client: Client,
    show_progress: bool,
}

impl HttpDownloader {
    pub fn new(user_agent: &str, show_progress: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Download(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            show_progress,
        })
    }

    async fn fetch(&self, url: &str, output_path: &Path) -> Result<u64> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Download(format!("{} returned {}", url, status)));
        }

        let content_length = response.content_length();
        let progress = if self.show_progress
            && content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false)
        {
            Some(create_download_bar(content_length.unwrap_or(0)))
        } else {
            None
        };

        let part_path = part_path(output_path);
        let mut file = File::create(&part_path).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await?;
        drop(file);
        tokio::fs::rename(&part_path, output_path).await?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        Ok(downloaded)
    }
}

/// Sibling path the body is streamed into before the final rename.
fn part_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    output_path.with_file_name(name)
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn submit(&self, job: &DownloadJob) -> Result<DownloadOutcome> {
        if job.destination.exists() {
            tracing::debug!("Skipping existing file: {}", job.destination.display());
            return Ok(DownloadOutcome::Skipped);
        }

        if let Some(parent) = job.destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tracing::debug!("Downloading {} -> {}", job.source_url, job.destination.display());
        match self.fetch(&job.source_url, &job.destination).await {
            Ok(bytes) => Ok(DownloadOutcome::Saved { bytes }),
            Err(e) => {
                let _ = tokio::fs::remove_file(part_path(&job.destination)).await;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(destination: PathBuf) -> DownloadJob {
        DownloadJob {
            // Nothing listens on the discard port.
            source_url: "http://127.0.0.1:9/file.jpg".into(),
            destination,
            extension: "jpg".into(),
        }
    }

    #[test]
    fn test_part_path() {
        assert_eq!(
            part_path(Path::new("/dl/cats/[0]abc.jpg")),
            PathBuf::from("/dl/cats/[0]abc.jpg.part")
        );
    }

    #[tokio::test]
    async fn test_existing_destination_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("abc.jpg");
        std::fs::write(&destination, b"already here").unwrap();

        let downloader = HttpDownloader::new("test-agent", false).unwrap();
        let outcome = downloader.submit(&job(destination.clone())).await.unwrap();

        assert_eq!(outcome, DownloadOutcome::Skipped);
        assert_eq!(std::fs::read(&destination).unwrap(), b"already here");
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("group").join("[0]abc.jpg");

        let downloader = HttpDownloader::new("test-agent", false).unwrap();
        let result = downloader.submit(&job(destination.clone())).await;

        assert!(result.is_err());
        assert!(dir.path().join("group").is_dir());
        assert!(!destination.exists());
        assert!(!part_path(&destination).exists());
    }
}
