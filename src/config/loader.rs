//! Configuration structures and loading logic.

use crate::config::filter::{FilterList, FolderPolicy};
use crate::config::modes::DownloadMode;
use crate::error::{Error, Result};
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub imgur: ImgurConfig,

    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub state: StateConfig,
}

/// Reddit account configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Reddit username whose saved posts are crawled.
    #[serde(default)]
    pub username: String,

    /// Site origin used for feed and post requests.
    #[serde(default = "default_origin")]
    pub origin: String,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Value of the `reddit_session` cookie.
    #[serde(default)]
    pub session_cookie: Option<String>,
}

/// Imgur API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImgurConfig {
    /// Imgur client ID. Imgur links fail to resolve without it.
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Download mode (saved, single).
    #[serde(default)]
    pub download_mode: DownloadMode,

    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Whether to put each post in a folder named after its subreddit.
    #[serde(default)]
    pub create_source_folder: bool,

    /// Only create subreddit folders for subreddits in `source_filter`.
    #[serde(default)]
    pub create_only_for_filtered: bool,

    /// Comma separated subreddit names.
    #[serde(default)]
    pub source_filter: String,

    /// Post permalink for single post download mode.
    #[serde(default)]
    pub single_post: Option<String>,

    /// Delay between files of the same post.
    #[serde(default = "default_job_delay")]
    pub job_delay_ms: u64,

    /// Delay between posts.
    #[serde(default = "default_post_delay")]
    pub post_delay_ms: u64,

    /// Whether to log every downloaded file.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to show the post progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_mode: DownloadMode::default(),
            download_directory: None,
            create_source_folder: false,
            create_only_for_filtered: false,
            source_filter: String::new(),
            single_post: None,
            job_delay_ms: default_job_delay(),
            post_delay_ms: default_post_delay(),
            show_downloads: true,
            show_progress: true,
        }
    }
}

/// Persistent state configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateConfig {
    /// File holding the resume checkpoint.
    #[serde(default)]
    pub checkpoint_file: Option<PathBuf>,
}

fn default_origin() -> String {
    "https://www.reddit.com".to_string()
}

fn default_user_agent() -> String {
    format!(
        "reddit-downloader/{} (saved posts media downloader)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_true() -> bool {
    true
}

fn default_job_delay() -> u64 {
    100
}

fn default_post_delay() -> u64 {
    20
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            origin: default_origin(),
            user_agent: default_user_agent(),
            session_cookie: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective download directory.
    ///
    /// Defaults to `Reddit` inside the user's Downloads folder.
    pub fn download_directory(&self) -> PathBuf {
        if let Some(dir) = &self.options.download_directory {
            return dir.clone();
        }

        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.join("Reddit")))
            .unwrap_or_else(|| {
                std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join("Reddit")
            })
    }

    /// Get the effective checkpoint file path.
    pub fn checkpoint_file(&self) -> PathBuf {
        if let Some(path) = &self.state.checkpoint_file {
            return path.clone();
        }

        ProjectDirs::from("", "", "reddit-downloader")
            .map(|dirs| dirs.data_dir().join("checkpoint.json"))
            .unwrap_or_else(|| PathBuf::from(".reddit-downloader-checkpoint.json"))
    }

    /// Build the subreddit folder policy from the options.
    pub fn folder_policy(&self) -> FolderPolicy {
        FolderPolicy {
            create_source_folder: self.options.create_source_folder,
            only_filtered: self.options.create_only_for_filtered,
            filter: FilterList::parse(&self.options.source_filter),
        }
    }

    /// Delay between files of the same post.
    pub fn job_delay(&self) -> Duration {
        Duration::from_millis(self.options.job_delay_ms)
    }

    /// Delay between posts.
    pub fn post_delay(&self) -> Duration {
        Duration::from_millis(self.options.post_delay_ms)
    }

    /// The configured Imgur client ID, if it is non-empty.
    pub fn imgur_client_id(&self) -> Option<&str> {
        self.imgur
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
