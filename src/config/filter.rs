//! Subreddit filter list and folder policy.

use std::collections::HashSet;

/// Set of subreddit names parsed from a comma separated string.
///
/// Names compare ASCII case-insensitively, as subreddit names do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterList {
    names: HashSet<String>,
}

impl FilterList {
    /// Parse a delimited list such as `"cats, dogs,aww"`. Blank entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let names = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_ascii_lowercase)
            .collect();
        Self { names }
    }

    pub fn contains(&self, source: &str) -> bool {
        self.names.contains(&source.to_ascii_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Decides whether a post gets a folder named after its source.
#[derive(Debug, Clone, Default)]
pub struct FolderPolicy {
    pub create_source_folder: bool,
    pub only_filtered: bool,
    pub filter: FilterList,
}

impl FolderPolicy {
    /// The folder segment to use for a post from `source`, if any.
    pub fn folder_for<'a>(&self, source: &'a str) -> Option<&'a str> {
        if !self.create_source_folder || source.is_empty() {
            return None;
        }

        if self.only_filtered && !self.filter.contains(source) {
            return None;
        }

        Some(source)
    }
}
