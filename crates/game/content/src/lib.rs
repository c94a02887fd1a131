//! Level content and loaders.
//!
//! This crate turns level descriptions into playable [`game_core::Level`]s.
//! The level format is plain text: four whitespace-separated integers
//! (`rows cols player_row player_col`) followed by `rows * cols` tile symbols
//! in row-major order.
//!
//! ```text
//! 3 4 1 1
//! - - $ -
//! - - + M
//! ! - - ?
//! ```
//!
//! Content is consumed by front ends and never appears in game-core.

pub mod loaders;

pub use loaders::{HeaderField, LevelLoader, LoadError, LoadResult, SymbolPolicy};
