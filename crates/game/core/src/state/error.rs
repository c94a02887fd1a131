//! Map store errors.
//!
//! Errors raised while allocating, growing, or populating a [`TileMap`] and
//! while placing the player on it.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{MapDimensions, Position, TileMap};

/// Errors that occur when creating or growing a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// A row or column count was negative.
    #[error("invalid map dimensions {rows}x{cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// The cell count does not fit in the addressable range.
    #[error("map of {rows}x{cols} cells exceeds the maximum cell count")]
    CapacityOverflow { rows: i64, cols: i64 },

    /// Row-major cell data does not fill the declared grid.
    #[error("expected {expected} cells, found {found}")]
    CellCountMismatch { expected: usize, found: usize },

    /// The player start lies outside the map.
    #[error("player position {position} is outside the {dimensions} map")]
    PlayerOutOfBounds {
        position: Position,
        dimensions: MapDimensions,
    },

    /// The map already holds a player tile away from the player start.
    #[error("second player tile at {position}")]
    DuplicatePlayer { position: Position },
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use MapError::*;
        match self {
            InvalidDimensions { .. } => "MAP_INVALID_DIMENSIONS",
            CapacityOverflow { .. } => "MAP_CAPACITY_OVERFLOW",
            CellCountMismatch { .. } => "MAP_CELL_COUNT_MISMATCH",
            PlayerOutOfBounds { .. } => "MAP_PLAYER_OUT_OF_BOUNDS",
            DuplicatePlayer { .. } => "MAP_DUPLICATE_PLAYER",
        }
    }
}

/// A failed [`TileMap::resize`].
///
/// The original map is handed back untouched so the caller keeps playing on it.
#[derive(Debug, thiserror::Error)]
#[error("cannot resize map: {source}")]
pub struct ResizeError {
    #[source]
    source: MapError,
    map: TileMap,
}

impl ResizeError {
    pub(crate) fn new(source: MapError, map: TileMap) -> Self {
        Self { source, map }
    }

    pub fn kind(&self) -> MapError {
        self.source
    }

    /// Recovers the map that could not be resized.
    pub fn into_map(self) -> TileMap {
        self.map
    }
}

impl GameError for ResizeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        self.source.error_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_errors_are_validation_failures() {
        let err = MapError::InvalidDimensions { rows: -1, cols: 2 };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "MAP_INVALID_DIMENSIONS");
        assert_eq!(err.to_string(), "invalid map dimensions -1x2");
    }

    #[test]
    fn resize_error_hands_back_the_map() {
        let map = TileMap::allocate(2, 2).unwrap();
        let err = ResizeError::new(MapError::CapacityOverflow { rows: 4, cols: 4 }, map.clone());

        assert!(err.severity().is_recoverable());
        assert_eq!(err.error_code(), "MAP_CAPACITY_OVERFLOW");
        assert_eq!(err.into_map(), map);
    }
}
