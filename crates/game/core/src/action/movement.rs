use crate::action::Direction;
use crate::state::{Player, Tile, TileMap};

/// Result of an attempted player move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveOutcome {
    /// Blocked or out of bounds; nothing changed.
    Stay,
    /// Ordinary step onto a free cell.
    Move,
    /// Stepped onto treasure and picked it up.
    Treasure,
    /// Stepped onto a door.
    Leave,
    /// Stepped onto the exit while carrying treasure.
    Escape,
    /// Stepped onto the amulet.
    Amulet,
}

impl MoveOutcome {
    /// Whether the player changed cells.
    pub const fn moved(self) -> bool {
        !matches!(self, MoveOutcome::Stay)
    }

    /// Whether the outcome ends the level (no monster phase follows).
    pub const fn ends_level(self) -> bool {
        matches!(self, MoveOutcome::Leave | MoveOutcome::Escape)
    }
}

/// Attempts to move the player one cell in `direction`.
///
/// Rules, in precedence order:
/// 1. A target outside the map is [`MoveOutcome::Stay`].
/// 2. Pillars and monsters block the move.
/// 3. The exit only opens for a player carrying treasure.
/// 4. Anything else is entered; doors, the exit, the amulet, and treasure
///    report their own outcome, and treasure adds one to the player's count.
///
/// On a successful move the old cell becomes [`Tile::Open`] and the target
/// becomes [`Tile::Player`]. A blocked move leaves map and player untouched.
pub fn move_player(map: &mut TileMap, player: &mut Player, direction: Direction) -> MoveOutcome {
    let origin = player.position;
    let target = direction.step(origin);

    let Some(tile) = map.get(target) else {
        return MoveOutcome::Stay;
    };
    if tile.blocks_player() {
        return MoveOutcome::Stay;
    }
    if tile == Tile::Exit && !player.has_treasure() {
        return MoveOutcome::Stay;
    }

    let outcome = match tile {
        Tile::Door => MoveOutcome::Leave,
        Tile::Exit => MoveOutcome::Escape,
        Tile::Amulet => MoveOutcome::Amulet,
        Tile::Treasure => {
            player.treasure = player.treasure.saturating_add(1);
            MoveOutcome::Treasure
        }
        _ => MoveOutcome::Move,
    };

    map.set(origin, Tile::Open);
    player.position = target;
    map.set(target, Tile::Player);

    outcome
}
