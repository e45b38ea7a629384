//! HTTP API module.
//!
//! This module provides:
//! - Reddit client for the saved feed and post metadata
//! - Imgur client for album and gallery image lists
//! - API response types

pub mod client;
pub mod imgur;
pub mod types;

pub use client::{RedditApi, PAGE_SIZE};
pub use imgur::{ImgurApi, ImgurKind};
pub use types::*;
