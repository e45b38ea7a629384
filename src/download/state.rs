//! Run statistics.

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    /// Posts returned by the crawl.
    pub posts_found: u64,
    /// Posts resolved and submitted, including ones that resolved to nothing.
    pub posts_processed: u64,
    /// Posts with no URL or no matching resolver.
    pub posts_unsupported: u64,
    /// Posts whose resolution or planning failed.
    pub posts_failed: u64,

    pub files_downloaded: u64,
    /// Destination already existed.
    pub files_skipped: u64,
    pub files_failed: u64,
    pub bytes_downloaded: u64,
}

impl RunStats {
    pub fn mark_post_processed(&mut self) {
        self.posts_processed += 1;
    }

    pub fn mark_post_unsupported(&mut self) {
        self.posts_unsupported += 1;
    }

    pub fn mark_post_failed(&mut self) {
        self.posts_failed += 1;
    }

    pub fn record_download(&mut self, bytes: u64) {
        self.files_downloaded += 1;
        self.bytes_downloaded += bytes;
    }

    pub fn record_skip(&mut self) {
        self.files_skipped += 1;
    }

    pub fn record_file_failure(&mut self) {
        self.files_failed += 1;
    }

    /// Files handed to the downloader.
    pub fn files_submitted(&self) -> u64 {
        self.files_downloaded + self.files_skipped + self.files_failed
    }
}
