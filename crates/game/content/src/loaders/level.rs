//! Level loader.
//!
//! Parses the whitespace-delimited text format into a [`Level`]. Tile symbols
//! are read one non-whitespace character at a time, so `- - -` and `---`
//! describe the same row.

use std::io::Read;
use std::path::Path;

use game_core::{Level, MapDimensions, Player, Position, Tile, TileMap};

use crate::loaders::{HeaderField, LoadError, LoadResult, read_file};

/// How the loader treats characters outside the tile set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SymbolPolicy {
    /// Keep them as [`Tile::Unknown`]; they behave like open floor.
    #[default]
    Permissive,
    /// Reject the level with [`LoadError::UnknownSymbol`].
    Strict,
}

/// Loader for text level files.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelLoader {
    policy: SymbolPolicy,
}

impl LevelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::with_policy(SymbolPolicy::Strict)
    }

    pub fn with_policy(policy: SymbolPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SymbolPolicy {
        self.policy
    }

    /// Load a level from a file.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadResult<Level> {
        let path = path.as_ref();
        let content = read_file(path)?;
        let level = self.parse(&content)?;
        tracing::info!("Loaded level {} ({})", path.display(), level.map().dimensions());
        Ok(level)
    }

    /// Load a level from any byte stream.
    pub fn read_from<R: Read>(&self, mut reader: R) -> LoadResult<Level> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse(&content)
    }

    /// Parse a level description.
    ///
    /// The player tile is stamped over whatever symbol the file holds at the
    /// start position; a player symbol anywhere else fails the load. Input
    /// after the last tile is ignored.
    pub fn parse(&self, source: &str) -> LoadResult<Level> {
        let mut header = Header::new(source);
        let rows = header.next_number(HeaderField::Rows)?;
        let cols = header.next_number(HeaderField::Cols)?;
        let start = Position::new(
            header.next_number(HeaderField::PlayerRow)?,
            header.next_number(HeaderField::PlayerCol)?,
        );

        // Reject oversize grids before reading any tiles.
        let dimensions = MapDimensions::checked(i64::from(rows), i64::from(cols))?;
        let cells = self.read_tiles(header.remainder(), dimensions)?;

        let map = TileMap::from_cells(rows, cols, cells)?;
        let level = Level::new(map, Player::new(start))?;

        let unknown = level
            .map()
            .cells()
            .iter()
            .filter(|tile| !tile.is_known())
            .count();
        if unknown > 0 {
            tracing::warn!("Level contains {} unrecognized tile symbols", unknown);
        }
        tracing::debug!(
            "Parsed {} level, player at {}, {} monsters",
            dimensions,
            start,
            level.map().count(Tile::Monster)
        );

        Ok(level)
    }

    fn read_tiles(&self, body: &str, dimensions: MapDimensions) -> LoadResult<Vec<Tile>> {
        let expected = dimensions.cell_count();
        let cols = dimensions.cols as usize;

        // Size the buffer from the input, not the header, so a bogus header
        // cannot force a large allocation.
        let mut cells = Vec::with_capacity(expected.min(body.len()));
        let symbols = body.chars().filter(|symbol| !symbol.is_whitespace());
        for (index, symbol) in symbols.take(expected).enumerate() {
            let tile = Tile::from_symbol(symbol);
            if self.policy == SymbolPolicy::Strict && !tile.is_known() {
                return Err(LoadError::UnknownSymbol {
                    symbol,
                    position: Position::new((index / cols) as i32, (index % cols) as i32),
                });
            }
            cells.push(tile);
        }

        if cells.len() < expected {
            return Err(LoadError::MissingTiles {
                expected,
                found: cells.len(),
            });
        }
        Ok(cells)
    }
}

/// Cursor over the numeric header tokens.
struct Header<'a> {
    rest: &'a str,
}

impl<'a> Header<'a> {
    fn new(source: &'a str) -> Self {
        Self { rest: source }
    }

    fn next_token(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start();
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.rest = rest;
        (!token.is_empty()).then_some(token)
    }

    fn next_number(&mut self, field: HeaderField) -> LoadResult<i32> {
        let token = self.next_token().ok_or(LoadError::MissingField(field))?;
        token.parse().map_err(|_| LoadError::InvalidNumber {
            field,
            token: token.to_string(),
        })
    }

    fn remainder(&self) -> &'a str {
        self.rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameError, MapError};

    #[test]
    fn parses_open_grid_with_player() {
        let level = LevelLoader::new()
            .parse("3 3 1 1\n- - -\n- - -\n- - -\n")
            .unwrap();

        assert_eq!(level.map().dimensions(), MapDimensions::new(3, 3));
        assert_eq!(level.player().position, Position::new(1, 1));
        assert_eq!(level.treasure(), 0);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if (row, col) == (1, 1) { Tile::Player } else { Tile::Open };
                assert_eq!(level.map().get(Position::new(row, col)), Some(expected));
            }
        }
    }

    #[test]
    fn adjacent_symbols_are_separate_tiles() {
        let level = LevelLoader::new().parse("2 3 0 0 -$+\nM?!").unwrap();
        assert_eq!(level.map().to_string(), "o$+\nM?!\n");
    }

    #[test]
    fn player_overwrites_file_symbol() {
        let level = LevelLoader::new().parse("1 2 0 1 - $").unwrap();
        assert_eq!(level.map().to_string(), "-o\n");
        assert!(level.is_consistent());
    }

    #[test]
    fn trailing_input_is_ignored() {
        let level = LevelLoader::new().parse("1 1 0 0 - extra stuff").unwrap();
        assert_eq!(level.map().cells(), &[Tile::Player]);
    }

    #[test]
    fn missing_header_fields_are_reported() {
        let err = LevelLoader::new().parse("3 3 1").unwrap_err();
        assert!(matches!(err, LoadError::MissingField(HeaderField::PlayerCol)));

        let err = LevelLoader::new().parse("").unwrap_err();
        assert!(matches!(err, LoadError::MissingField(HeaderField::Rows)));
    }

    #[test]
    fn non_numeric_header_is_rejected() {
        let err = LevelLoader::new().parse("3 x 1 1").unwrap_err();
        match err {
            LoadError::InvalidNumber { field, token } => {
                assert_eq!(field, HeaderField::Cols);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_tile_section_is_rejected() {
        let err = LevelLoader::new().parse("2 2 0 0 - - -").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingTiles {
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let err = LevelLoader::new().parse("-1 3 0 0").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Map(MapError::InvalidDimensions { rows: -1, cols: 3 })
        ));
    }

    #[test]
    fn oversize_dimensions_overflow_before_reading_tiles() {
        let err = LevelLoader::new().parse("100000 100000 0 0 -").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Map(MapError::CapacityOverflow { .. })
        ));
    }

    #[test]
    fn player_outside_map_is_rejected() {
        let err = LevelLoader::new().parse("2 2 2 0 ----").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Map(MapError::PlayerOutOfBounds { .. })
        ));
    }

    #[test]
    fn stray_player_symbol_is_rejected() {
        for loader in [LevelLoader::new(), LevelLoader::strict()] {
            let err = loader.parse("1 3 0 0 - - o").unwrap_err();
            assert!(matches!(
                err,
                LoadError::Map(MapError::DuplicatePlayer {
                    position: Position { row: 0, col: 2 }
                })
            ));
            assert_eq!(err.error_code(), "MAP_DUPLICATE_PLAYER");
        }

        let level = LevelLoader::strict().parse("1 3 0 2 - - o").unwrap();
        assert!(level.is_consistent());
    }

    #[test]
    fn unknown_symbols_follow_policy() {
        let source = "1 3 0 0 - x -";

        let level = LevelLoader::new().parse(source).unwrap();
        assert_eq!(level.map().get(Position::new(0, 1)), Some(Tile::Unknown('x')));

        let err = LevelLoader::strict().parse(source).unwrap_err();
        assert!(matches!(
            err,
            LoadError::UnknownSymbol {
                symbol: 'x',
                position: Position { row: 0, col: 1 }
            }
        ));
    }

    #[test]
    fn reads_from_any_reader() {
        let bytes: &[u8] = b"1 2 0 0\n- @\n";
        let level = LevelLoader::new().read_from(bytes).unwrap();
        assert_eq!(level.map().get(Position::new(0, 1)), Some(Tile::Amulet));
    }
}
