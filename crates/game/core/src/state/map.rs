use std::fmt;

use crate::config::GameConfig;
use crate::state::{MapError, Position, ResizeError, Tile};

/// Row and column counts of a [`TileMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub rows: u32,
    pub cols: u32,
}

impl MapDimensions {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Validates signed dimensions against the map size limits.
    ///
    /// Negative counts are [`MapError::InvalidDimensions`]; a side or cell
    /// count beyond [`GameConfig::MAX_SIDE`] / [`GameConfig::MAX_CELLS`] is
    /// [`MapError::CapacityOverflow`].
    pub fn checked(rows: i64, cols: i64) -> Result<Self, MapError> {
        if rows < 0 || cols < 0 {
            return Err(MapError::InvalidDimensions { rows, cols });
        }

        let overflow = MapError::CapacityOverflow { rows, cols };
        let max_side = i64::from(GameConfig::MAX_SIDE);
        if rows > max_side || cols > max_side {
            return Err(overflow);
        }

        let cells = rows.checked_mul(cols).ok_or(overflow)?;
        let cells = usize::try_from(cells).map_err(|_| overflow)?;
        if cells > GameConfig::MAX_CELLS {
            return Err(overflow);
        }

        Ok(Self::new(rows as u32, cols as u32))
    }

    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && (position.row as u32) < self.rows
            && (position.col as u32) < self.cols
    }
}

impl fmt::Display for MapDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Rectangular grid of tiles stored as one row-major buffer.
///
/// Every row holds exactly `cols` cells by construction. The map is owned by a
/// single holder; operations that replace it ([`TileMap::resize`],
/// [`TileMap::release`]) consume `self`, so a stale handle cannot be used.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTileMap"))]
pub struct TileMap {
    dimensions: MapDimensions,
    cells: Vec<Tile>,
}

impl TileMap {
    /// Allocates a `rows x cols` map with every cell [`Tile::Open`].
    pub fn allocate(rows: i32, cols: i32) -> Result<Self, MapError> {
        let dimensions = MapDimensions::checked(i64::from(rows), i64::from(cols))?;
        Ok(Self {
            dimensions,
            cells: vec![Tile::Open; dimensions.cell_count()],
        })
    }

    /// Builds a map from row-major cells.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Tile>) -> Result<Self, MapError> {
        let dimensions = MapDimensions::checked(i64::from(rows), i64::from(cols))?;
        Self::with_cells(dimensions, cells)
    }

    fn with_cells(dimensions: MapDimensions, cells: Vec<Tile>) -> Result<Self, MapError> {
        if cells.len() != dimensions.cell_count() {
            return Err(MapError::CellCountMismatch {
                expected: dimensions.cell_count(),
                found: cells.len(),
            });
        }
        Ok(Self { dimensions, cells })
    }

    /// Frees the map. The handle is consumed.
    pub fn release(self) {}

    /// Doubles both dimensions, tiling the original grid into four quadrants.
    ///
    /// The top-left quadrant is an exact copy. The other three are copies with
    /// every [`Tile::Player`] replaced by [`Tile::Open`], so the player is never
    /// duplicated. The original storage is released; on failure it is returned
    /// inside the error instead.
    pub fn resize(self) -> Result<Self, ResizeError> {
        let rows = self.dimensions.rows as usize;
        let doubled = match MapDimensions::checked(
            i64::from(self.dimensions.rows) * 2,
            i64::from(self.dimensions.cols) * 2,
        ) {
            Ok(dimensions) => dimensions,
            Err(err) => return Err(ResizeError::new(err, self)),
        };

        let mut cells = Vec::with_capacity(doubled.cell_count());
        for lower in [false, true] {
            for row in 0..rows {
                for right in [false, true] {
                    let replica = lower || right;
                    cells.extend(self.row(row).iter().map(|&tile| match tile {
                        Tile::Player if replica => Tile::Open,
                        other => other,
                    }));
                }
            }
        }

        Ok(Self {
            dimensions: doubled,
            cells,
        })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn rows(&self) -> u32 {
        self.dimensions.rows
    }

    pub fn cols(&self) -> u32 {
        self.dimensions.cols
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position).then(|| {
            position.row as usize * self.dimensions.cols as usize + position.col as usize
        })
    }

    pub fn get(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.cells[index])
    }

    /// Writes `tile` at `position`. Returns false if the position is out of bounds.
    pub fn set(&mut self, position: Position, tile: Tile) -> bool {
        match self.index(position) {
            Some(index) => {
                self.cells[index] = tile;
                true
            }
            None => false,
        }
    }

    /// Cells of row `row`. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Tile] {
        let cols = self.dimensions.cols as usize;
        &self.cells[row * cols..(row + 1) * cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        (0..self.dimensions.rows as usize).map(|row| self.row(row))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == tile).count()
    }

    pub fn positions_of(&self, tile: Tile) -> Vec<Position> {
        let cols = self.dimensions.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == tile)
            .map(|(index, _)| Position::new((index / cols) as i32, (index % cols) as i32))
            .collect()
    }
}

/// Wire form of [`TileMap`]; decoding goes through the same checks as
/// [`TileMap::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTileMap {
    dimensions: MapDimensions,
    cells: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTileMap> for TileMap {
    type Error = MapError;

    fn try_from(raw: RawTileMap) -> Result<Self, Self::Error> {
        let MapDimensions { rows, cols } = raw.dimensions;
        let dimensions = MapDimensions::checked(i64::from(rows), i64::from(cols))?;
        Self::with_cells(dimensions, raw.cells)
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
