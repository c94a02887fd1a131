use std::fmt;

/// Discrete grid position expressed in (row, column) tile coordinates.
///
/// Coordinates are signed so that a step off the top or left edge is
/// representable and can be rejected by a bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the position shifted by `(d_row, d_col)`, saturating at the
    /// `i32` range so an edge position never wraps around.
    pub const fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The adventurer: where they stand and how much treasure they carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub position: Position,
    pub treasure: u32,
}

impl Player {
    pub const fn new(position: Position) -> Self {
        Self {
            position,
            treasure: 0,
        }
    }

    pub const fn has_treasure(&self) -> bool {
        self.treasure > 0
    }
}
