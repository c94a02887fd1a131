//! Authoritative game state representation.
//!
//! This module owns the tile grid, the player, and the [`Level`] aggregate
//! that keeps the two in sync. Rendering layers read this state; turn logic
//! mutates it exclusively through [`crate::action`] and [`crate::engine`].
mod error;
mod level;
mod map;
mod player;
mod tile;

pub use error::{MapError, ResizeError};
pub use level::Level;
pub use map::{MapDimensions, TileMap};
pub use player::{Player, Position};
pub use tile::Tile;
