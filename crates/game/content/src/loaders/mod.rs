//! Content loaders for reading game data from files.
//!
//! This module provides the level loader and its error type.

pub mod error;
pub mod level;

pub use error::{HeaderField, LoadError};
pub use level::{LevelLoader, SymbolPolicy};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, LoadError>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
