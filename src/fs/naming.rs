//! Filename generation and sanitization.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::error::{Error, Result};

/// Length of generated file and folder names.
pub const RANDOM_NAME_LEN: usize = 16;

/// Source of fresh file and group-folder names.
pub trait NameGenerator {
    fn next_name(&mut self) -> String;
}

/// Random alphanumeric names, [`RANDOM_NAME_LEN`] characters long.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNames;

impl NameGenerator for RandomNames {
    fn next_name(&mut self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(RANDOM_NAME_LEN)
            .map(char::from)
            .collect()
    }
}

/// Album file name prefix, zero-padded to the width of the album size.
///
/// `album_index(3, 12)` is `[03]`, `album_index(3, 5)` is `[3]`.
pub fn album_index(index: usize, total: usize) -> String {
    let width = total.saturating_sub(1).max(1).to_string().len();
    format!("[{:0width$}]", index, width = width)
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized = replace_reserved(name, &[]);

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Sanitize a folder name such as a subreddit.
///
/// Separators are replaced rather than rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized = replace_reserved(name.trim(), &['/', '\\']);

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

fn replace_reserved(name: &str, extra: &[char]) -> String {
    name.chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if extra.contains(&c) || c.is_control() => '_',
            c => c,
        })
        .collect()
}
