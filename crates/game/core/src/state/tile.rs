use std::fmt;

/// Content of a single map cell.
///
/// Level files store one character per cell. Characters outside the canonical
/// set are kept as [`Tile::Unknown`] so a level always round-trips through the
/// loader and renderer unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Pillar,
    Player,
    Monster,
    Treasure,
    Door,
    Exit,
    Amulet,
    /// Unrecognized level symbol. Passable and transparent, like [`Tile::Open`].
    Unknown(char),
}

impl Tile {
    pub const OPEN: char = '-';
    pub const PILLAR: char = '+';
    pub const PLAYER: char = 'o';
    pub const MONSTER: char = 'M';
    pub const TREASURE: char = '$';
    pub const DOOR: char = '?';
    pub const EXIT: char = '!';
    pub const AMULET: char = '@';

    pub const KNOWN: [Tile; 8] = [
        Tile::Open,
        Tile::Pillar,
        Tile::Player,
        Tile::Monster,
        Tile::Treasure,
        Tile::Door,
        Tile::Exit,
        Tile::Amulet,
    ];

    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            Self::OPEN => Tile::Open,
            Self::PILLAR => Tile::Pillar,
            Self::PLAYER => Tile::Player,
            Self::MONSTER => Tile::Monster,
            Self::TREASURE => Tile::Treasure,
            Self::DOOR => Tile::Door,
            Self::EXIT => Tile::Exit,
            Self::AMULET => Tile::Amulet,
            other => Tile::Unknown(other),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Tile::Open => Self::OPEN,
            Tile::Pillar => Self::PILLAR,
            Tile::Player => Self::PLAYER,
            Tile::Monster => Self::MONSTER,
            Tile::Treasure => Self::TREASURE,
            Tile::Door => Self::DOOR,
            Tile::Exit => Self::EXIT,
            Tile::Amulet => Self::AMULET,
            Tile::Unknown(symbol) => symbol,
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Tile::Unknown(_))
    }

    /// Tiles the player can never step onto.
    pub const fn blocks_player(self) -> bool {
        matches!(self, Tile::Pillar | Tile::Monster)
    }

    /// Tiles that cut a monster's line of sight.
    pub const fn blocks_sight(self) -> bool {
        matches!(self, Tile::Pillar)
    }
}

impl From<char> for Tile {
    fn from(symbol: char) -> Self {
        Tile::from_symbol(symbol)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
