//! Configuration module for the reddit-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation
//! - Subreddit filter lists and folder policy

pub mod filter;
pub mod loader;
pub mod modes;
pub mod validation;

pub use filter::{FilterList, FolderPolicy};
pub use loader::{AccountConfig, Config, ImgurConfig, OptionsConfig, StateConfig};
pub use modes::DownloadMode;
pub use validation::{parse_post_permalink, validate_config};
