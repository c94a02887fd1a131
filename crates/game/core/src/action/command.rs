use crate::state::Position;

/// One of the four cardinal directions a player can step in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row and column change for a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn step(self, from: Position) -> Position {
        from.offset(self.delta())
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A player's choice for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(Direction),
    /// Pass the turn in place. Monsters still advance.
    Stay,
    /// End the session.
    Quit,
}

impl Command {
    pub const KEY_UP: char = 'w';
    pub const KEY_LEFT: char = 'a';
    pub const KEY_DOWN: char = 's';
    pub const KEY_RIGHT: char = 'd';
    pub const KEY_STAY: char = 'e';
    pub const KEY_QUIT: char = 'q';

    /// Translates a keypress. Keys are case-insensitive; unmapped keys yield `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            Self::KEY_UP => Some(Command::Move(Direction::Up)),
            Self::KEY_LEFT => Some(Command::Move(Direction::Left)),
            Self::KEY_DOWN => Some(Command::Move(Direction::Down)),
            Self::KEY_RIGHT => Some(Command::Move(Direction::Right)),
            Self::KEY_STAY => Some(Command::Stay),
            Self::KEY_QUIT => Some(Command::Quit),
            _ => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
