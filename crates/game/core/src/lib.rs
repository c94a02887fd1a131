//! Deterministic dungeon-crawler rules shared by every front end.
//!
//! `game-core` defines the tile map, the player, and the per-turn rules:
//! player movement with tile interactions (treasure, doors, exit, amulet) and
//! straight-line monster pursuit. It performs no I/O; levels are parsed by
//! `game-content` and turns are sequenced through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{Command, Direction, MoveOutcome, SCAN_ORDER, advance_monsters, move_player};
pub use config::GameConfig;
pub use engine::{GameEngine, TurnReport, TurnStatus};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Level, MapDimensions, MapError, Player, Position, ResizeError, Tile, TileMap,
};
