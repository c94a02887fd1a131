use crate::action::Direction;
use crate::state::{Player, Position, Tile, TileMap};

/// Order in which the four rays are scanned each turn.
pub const SCAN_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Moves every monster with line of sight to the player one cell closer.
///
/// Each cardinal ray is walked outward from the player until it leaves the map
/// or meets a pillar. A monster found on the ray steps into the cell just
/// behind it (toward the player) and the scan carries on past its old cell,
/// so a column of monsters shuffles forward together.
///
/// Returns true when a monster ended up on the player's cell. The check runs
/// once, after all four rays.
pub fn advance_monsters(map: &mut TileMap, player: &Player) -> bool {
    for direction in SCAN_ORDER {
        advance_along(map, player.position, direction);
    }
    map.get(player.position) == Some(Tile::Monster)
}

fn advance_along(map: &mut TileMap, origin: Position, direction: Direction) {
    let mut previous = origin;
    let mut cursor = direction.step(origin);

    while let Some(tile) = map.get(cursor) {
        match tile {
            Tile::Pillar => break,
            Tile::Monster => {
                map.set(previous, Tile::Monster);
                map.set(cursor, Tile::Open);
            }
            _ => {}
        }
        previous = cursor;
        cursor = direction.step(cursor);
    }
}
