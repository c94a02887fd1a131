//! Turn sequencing.
//!
//! The [`GameEngine`] drives one turn of play against a [`Level`]: the
//! player's command is resolved first, then (unless the level just ended)
//! every monster with line of sight advances. The engine holds the level's
//! exclusive borrow for its lifetime, so no other code can touch the map
//! mid-turn.

use crate::action::{Command, MoveOutcome, advance_monsters, move_player};
use crate::state::Level;

/// How the session stands after a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TurnStatus {
    /// Play goes on.
    Continue,
    /// A monster reached the player.
    Captured,
    /// The player walked through a door.
    LeftLevel,
    /// The player reached the exit with treasure.
    Escaped,
    /// The player asked to stop.
    Quit,
}

impl TurnStatus {
    pub const fn is_over(self) -> bool {
        !matches!(self, TurnStatus::Continue)
    }
}

/// Everything that happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub command: Command,
    pub outcome: MoveOutcome,
    pub captured: bool,
    pub status: TurnStatus,
}

/// Runs turns against a borrowed level.
pub struct GameEngine<'a> {
    level: &'a mut Level,
}

impl<'a> GameEngine<'a> {
    pub fn new(level: &'a mut Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> &Level {
        self.level
    }

    /// Plays one turn.
    ///
    /// - `Quit` touches nothing.
    /// - `Stay` skips the move; monsters still advance.
    /// - A move onto a door or the exit ends the level before monsters act.
    pub fn play_turn(&mut self, command: Command) -> TurnReport {
        let (map, player) = self.level.parts_mut();

        let outcome = match command {
            Command::Quit => {
                return TurnReport {
                    command,
                    outcome: MoveOutcome::Stay,
                    captured: false,
                    status: TurnStatus::Quit,
                };
            }
            Command::Stay => MoveOutcome::Stay,
            Command::Move(direction) => move_player(map, player, direction),
        };

        let (captured, status) = match outcome {
            MoveOutcome::Leave => (false, TurnStatus::LeftLevel),
            MoveOutcome::Escape => (false, TurnStatus::Escaped),
            _ if advance_monsters(map, player) => (true, TurnStatus::Captured),
            _ => (false, TurnStatus::Continue),
        };

        TurnReport {
            command,
            outcome,
            captured,
            status,
        }
    }
}
