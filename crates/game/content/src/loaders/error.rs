//! Level loading errors.

use std::path::PathBuf;

use game_core::{ErrorSeverity, GameError, MapError, Position};

/// Numeric fields of the level header, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum HeaderField {
    #[strum(serialize = "row count")]
    Rows,
    #[strum(serialize = "column count")]
    Cols,
    #[strum(serialize = "player row")]
    PlayerRow,
    #[strum(serialize = "player column")]
    PlayerCol,
}

/// Errors that occur while loading a level.
///
/// Every variant means the load failed as a whole; no partially built level
/// is ever returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The level file could not be opened or read.
    #[error("failed to read level file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The level stream could not be read.
    #[error("failed to read level: {0}")]
    Read(#[from] std::io::Error),

    /// The header ended before this field.
    #[error("level header is missing the {0}")]
    MissingField(HeaderField),

    /// A header field is not a 32-bit integer.
    #[error("level header has an invalid {field}: '{token}'")]
    InvalidNumber { field: HeaderField, token: String },

    /// Dimensions or player start rejected by the map store.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The tile section ended early.
    #[error("level declares {expected} tiles but only {found} are present")]
    MissingTiles { expected: usize, found: usize },

    /// Strict loading met a symbol outside the tile set.
    #[error("unknown tile symbol '{symbol}' at {position}")]
    UnknownSymbol { symbol: char, position: Position },
}

impl GameError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        use LoadError::*;
        match self {
            Io { .. } | Read(_) => ErrorSeverity::Fatal,
            MissingField(_)
            | InvalidNumber { .. }
            | Map(_)
            | MissingTiles { .. }
            | UnknownSymbol { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use LoadError::*;
        match self {
            Io { .. } => "LOAD_IO",
            Read(_) => "LOAD_READ",
            MissingField(_) => "LOAD_MISSING_FIELD",
            InvalidNumber { .. } => "LOAD_INVALID_NUMBER",
            Map(err) => err.error_code(),
            MissingTiles { .. } => "LOAD_MISSING_TILES",
            UnknownSymbol { .. } => "LOAD_UNKNOWN_SYMBOL",
        }
    }
}
