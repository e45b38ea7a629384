//! Filesystem module.
//!
//! Provides:
//! - File and group folder name generation
//! - Filename sanitization

pub mod naming;

pub use naming::{
    album_index, sanitize_filename, sanitize_path_component, NameGenerator, RandomNames,
};
