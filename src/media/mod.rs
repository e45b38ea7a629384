//! Media module for post records and resolved links.

pub mod links;
pub mod post;

pub use links::{strip_query, unescape_ampersands, url_extension, ResolvedLinkSet};
pub use post::PostRecord;
