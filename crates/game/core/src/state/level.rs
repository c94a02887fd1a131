use crate::state::{MapError, Player, Tile, TileMap};

/// A loaded level: the map together with the player standing on it.
///
/// The player's position is stored twice, in [`Player::position`] and as the
/// single [`Tile::Player`] cell of the map. `Level` owns both so every mutation
/// goes through code that updates them together.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLevel"))]
pub struct Level {
    map: TileMap,
    player: Player,
}

impl Level {
    /// Places `player` on `map`, overwriting whatever tile lies at the start position.
    ///
    /// A [`Tile::Player`] anywhere else on the map is rejected, so the level
    /// always holds exactly one player tile.
    pub fn new(mut map: TileMap, player: Player) -> Result<Self, MapError> {
        if !map.contains(player.position) {
            return Err(MapError::PlayerOutOfBounds {
                position: player.position,
                dimensions: map.dimensions(),
            });
        }
        if let Some(stray) = map
            .positions_of(Tile::Player)
            .into_iter()
            .find(|&position| position != player.position)
        {
            return Err(MapError::DuplicatePlayer { position: stray });
        }

        map.set(player.position, Tile::Player);
        Ok(Self { map, player })
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn treasure(&self) -> u32 {
        self.player.treasure
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut TileMap, &mut Player) {
        (&mut self.map, &mut self.player)
    }

    pub fn into_parts(self) -> (TileMap, Player) {
        (self.map, self.player)
    }

    /// Doubles the map (see [`TileMap::resize`]). The player keeps their
    /// coordinates, which fall in the faithfully copied top-left quadrant.
    ///
    /// On failure the level is left exactly as it was.
    pub fn resize(&mut self) -> Result<(), MapError> {
        let map = std::mem::take(&mut self.map);
        match map.resize() {
            Ok(resized) => {
                self.map = resized;
                Ok(())
            }
            Err(err) => {
                let kind = err.kind();
                self.map = err.into_map();
                Err(kind)
            }
        }
    }

    /// True when the map holds exactly one player tile, at the player's position.
    pub fn is_consistent(&self) -> bool {
        self.map.positions_of(Tile::Player) == [self.player.position]
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLevel {
    map: TileMap,
    player: Player,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLevel> for Level {
    type Error = MapError;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        Self::new(raw.map, raw.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MapDimensions, Position};

    #[test]
    fn new_stamps_player_tile() {
        let mut map = TileMap::allocate(3, 3).unwrap();
        map.set(Position::new(1, 1), Tile::Treasure);

        let level = Level::new(map, Player::new(Position::new(1, 1))).unwrap();
        assert_eq!(level.map().get(Position::new(1, 1)), Some(Tile::Player));
        assert_eq!(level.treasure(), 0);
        assert!(level.is_consistent());
    }

    #[test]
    fn new_rejects_player_outside_map() {
        let map = TileMap::allocate(2, 2).unwrap();
        let err = Level::new(map, Player::new(Position::new(2, 0))).unwrap_err();
        assert_eq!(
            err,
            MapError::PlayerOutOfBounds {
                position: Position::new(2, 0),
                dimensions: MapDimensions::new(2, 2),
            }
        );
    }

    #[test]
    fn new_rejects_second_player_tile() {
        let mut map = TileMap::allocate(1, 3).unwrap();
        map.set(Position::new(0, 2), Tile::Player);

        let err = Level::new(map, Player::new(Position::ORIGIN)).unwrap_err();
        assert_eq!(
            err,
            MapError::DuplicatePlayer {
                position: Position::new(0, 2)
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decoding_keeps_single_player_tile() {
        let level = Level::new(
            TileMap::allocate(2, 2).unwrap(),
            Player::new(Position::new(1, 0)),
        )
        .unwrap();
        let json = serde_json::to_string(&level).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back, level);

        let moved = json.replace(r#""row":1"#, r#""row":0"#);
        let err = serde_json::from_str::<Level>(&moved).unwrap_err();
        assert!(err.to_string().contains("second player tile at (1, 0)"));

        let off_map = json.replace(r#""row":1"#, r#""row":5"#);
        assert!(serde_json::from_str::<Level>(&off_map).is_err());
    }

    #[test]
    fn resize_keeps_player_in_top_left_quadrant() {
        let map = TileMap::allocate(2, 3).unwrap();
        let mut level = Level::new(map, Player::new(Position::new(1, 2))).unwrap();

        level.resize().unwrap();
        assert_eq!(level.map().dimensions(), MapDimensions::new(4, 6));
        assert_eq!(level.player().position, Position::new(1, 2));
        assert!(level.is_consistent());
    }
}
