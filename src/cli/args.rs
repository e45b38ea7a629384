//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DownloadMode};

/// Reddit saved posts downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-downloader",
    version,
    about = "Download media from your saved Reddit posts",
    long_about = "A CLI tool to download images, galleries and videos linked from saved Reddit posts.\n\n\
                  Supports direct links, Reddit galleries, Imgur albums, Gfycat and Redgifs. \
                  Runs resume from the newest post of the previous run."
)]
pub struct Args {
    /// Reddit username whose saved posts are downloaded.
    #[arg(short, long, env = "REDDIT_USERNAME")]
    pub user: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Value of the reddit_session cookie.
    #[arg(long = "cookie", env = "REDDIT_SESSION", hide_env_values = true)]
    pub session_cookie: Option<String>,

    /// Imgur API client ID, needed for Imgur albums and galleries.
    #[arg(long = "imgur-client-id", env = "IMGUR_CLIENT_ID", hide_env_values = true)]
    pub imgur_client_id: Option<String>,

    /// Download mode.
    #[arg(long, value_enum)]
    pub mode: Option<DownloadModeArg>,

    /// Post permalink for single post download (requires --mode single).
    #[arg(long)]
    pub post: Option<String>,

    /// Put each post in a folder named after its subreddit.
    #[arg(long)]
    pub source_folders: bool,

    /// Only create subreddit folders for subreddits in the filter list.
    #[arg(long)]
    pub only_filtered: bool,

    /// Comma separated subreddit names, e.g. "cats,aww".
    #[arg(long)]
    pub filter: Option<String>,

    /// File holding the resume checkpoint.
    #[arg(long)]
    pub checkpoint_file: Option<PathBuf>,

    /// Ignore the stored checkpoint and crawl the whole saved list.
    #[arg(long)]
    pub reset_checkpoint: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI download mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DownloadModeArg {
    /// Download new saved posts.
    Saved,
    /// Download a single post by permalink.
    Single,
}

impl From<DownloadModeArg> for DownloadMode {
    fn from(arg: DownloadModeArg) -> Self {
        match arg {
            DownloadModeArg::Saved => DownloadMode::Saved,
            DownloadModeArg::Single => DownloadMode::Single,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(user) = self.user {
            config.account.username = user;
        }

        if let Some(cookie) = self.session_cookie {
            config.account.session_cookie = Some(cookie);
        }

        if let Some(client_id) = self.imgur_client_id {
            config.imgur.client_id = Some(client_id);
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        if let Some(mode) = self.mode {
            config.options.download_mode = mode.into();
        }

        if let Some(post) = self.post {
            config.options.single_post = Some(post);
            if self.mode.is_none() {
                config.options.download_mode = DownloadMode::Single;
            }
        }

        // Flags only override when set
        if self.source_folders {
            config.options.create_source_folder = true;
        }

        if self.only_filtered {
            config.options.create_only_for_filtered = true;
        }

        if let Some(filter) = self.filter {
            config.options.source_filter = filter;
        }

        if let Some(path) = self.checkpoint_file {
            config.state.checkpoint_file = Some(path);
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_progress = false;
        }
    }
}
