//! Download mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available download modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    /// Crawl the saved posts feed down to the last checkpoint (default).
    #[default]
    Saved,
    /// Download a single post by permalink.
    Single,
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Saved => write!(f, "saved"),
            DownloadMode::Single => write!(f, "single"),
        }
    }
}

impl FromStr for DownloadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "saved" => Ok(DownloadMode::Saved),
            "single" => Ok(DownloadMode::Single),
            _ => Err(format!("Unknown download mode: {}", s)),
        }
    }
}
