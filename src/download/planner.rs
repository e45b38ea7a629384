//! Turns a resolved link set into download jobs with destination paths.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::{album_index, sanitize_filename, sanitize_path_component, NameGenerator};
use crate::media::{url_extension, ResolvedLinkSet};

/// Extension used when a link has none.
pub const FALLBACK_EXTENSION: &str = "bin";

/// One file to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadJob {
    pub source_url: String,
    pub destination: PathBuf,
    pub extension: String,
}

/// Plans destinations for the files of one post.
///
/// - one link: `<base>/[<source>/]<name>.<ext>`
/// - several links: `<base>/[<source>/]<group>/[<i>]<name>.<ext>`, sharing one group folder
pub struct BulkDownloadPlanner;

impl BulkDownloadPlanner {
    pub fn plan(
        links: &ResolvedLinkSet,
        base: &Path,
        source_folder: Option<&str>,
        names: &mut dyn NameGenerator,
    ) -> Result<Vec<DownloadJob>> {
        if links.is_empty() {
            return Ok(Vec::new());
        }

        let mut dir = base.to_path_buf();
        if let Some(folder) = source_folder {
            dir.push(sanitize_path_component(folder)?);
        }

        if links.len() == 1 {
            let link = &links.as_slice()[0];
            return Ok(vec![Self::job(link, &dir, "", names)?]);
        }

        dir.push(sanitize_path_component(&names.next_name())?);

        links
            .iter()
            .enumerate()
            .map(|(index, link)| Self::job(link, &dir, &album_index(index, links.len()), names))
            .collect()
    }

    fn job(
        link: &str,
        dir: &Path,
        prefix: &str,
        names: &mut dyn NameGenerator,
    ) -> Result<DownloadJob> {
        let extension = url_extension(link).unwrap_or(FALLBACK_EXTENSION).to_string();
        let filename = sanitize_filename(&format!("{}{}.{}", prefix, names.next_name(), extension))?;

        Ok(DownloadJob {
            source_url: link.to_string(),
            destination: dir.join(filename),
            extension,
        })
    }
}
