use std::io::Write;
use std::path::PathBuf;

use game_content::{LevelLoader, LoadError};
use game_core::{
    Command, Direction, GameEngine, GameError, MapDimensions, MoveOutcome, Position, Tile,
    TurnStatus,
};
use tempfile::NamedTempFile;

fn write_level(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file should be created");
    file.write_all(contents.as_bytes())
        .expect("level should be written");
    file
}

fn bundled_level(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../../levels")
        .join(name)
}

#[test]
fn loads_level_from_disk() {
    let file = write_level("3 3 1 1\n- - -\n- - -\n- - -\n");

    let level = LevelLoader::new().load(file.path()).unwrap();
    assert_eq!(level.map().dimensions(), MapDimensions::new(3, 3));
    assert_eq!(level.map().positions_of(Tile::Player), vec![Position::new(1, 1)]);
    assert_eq!(level.map().count(Tile::Open), 8);
    assert_eq!(level.treasure(), 0);
}

#[test]
fn missing_file_is_a_fatal_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = LevelLoader::new().load(&path).unwrap_err();
    assert!(matches!(&err, LoadError::Io { path: p, .. } if p == &path));
    assert!(err.severity().is_internal());
    assert_eq!(err.error_code(), "LOAD_IO");
}

#[test]
fn bundled_levels_use_only_known_symbols() {
    for name in ["level1.txt", "level2.txt"] {
        let level = LevelLoader::strict()
            .load(bundled_level(name))
            .unwrap_or_else(|err| panic!("{name} should load: {err}"));
        assert!(level.is_consistent());
    }
}

#[test]
fn walking_into_line_of_sight_gets_player_caught() {
    let file = write_level("3 4 0 0\no - $ -\n+ + - -\n! - - M\n");
    let mut level = LevelLoader::new().load(file.path()).unwrap();
    let mut engine = GameEngine::new(&mut level);

    let script = [
        (Direction::Right, MoveOutcome::Move, TurnStatus::Continue),
        (Direction::Right, MoveOutcome::Treasure, TurnStatus::Continue),
        (Direction::Down, MoveOutcome::Move, TurnStatus::Continue),
        (Direction::Down, MoveOutcome::Move, TurnStatus::Captured),
    ];
    for (direction, outcome, status) in script {
        let report = engine.play_turn(Command::Move(direction));
        assert_eq!(report.outcome, outcome, "moving {direction}");
        assert_eq!(report.status, status, "moving {direction}");
    }

    assert_eq!(engine.level().treasure(), 1);
    assert_eq!(
        engine.level().map().get(Position::new(2, 2)),
        Some(Tile::Monster)
    );
    assert_eq!(engine.level().map().get(Position::new(2, 3)), Some(Tile::Open));
}

#[test]
fn amulet_pickup_then_resize() {
    let file = write_level("2 2 0 0\no @\n- M\n");
    let mut level = LevelLoader::new().load(file.path()).unwrap();

    let report = GameEngine::new(&mut level).play_turn(Direction::Right.into());
    assert_eq!(report.outcome, MoveOutcome::Amulet);
    // The monster below the amulet closes in on the same turn.
    assert_eq!(report.status, TurnStatus::Captured);

    let file = write_level("2 2 0 0\no @\n- -\n");
    let mut level = LevelLoader::new().load(file.path()).unwrap();
    let report = GameEngine::new(&mut level).play_turn(Direction::Right.into());
    assert_eq!(report.status, TurnStatus::Continue);

    level.resize().unwrap();
    assert_eq!(level.map().dimensions(), MapDimensions::new(4, 4));
    assert_eq!(level.player().position, Position::new(0, 1));
    assert_eq!(level.map().count(Tile::Player), 1);
    assert_eq!(level.map().count(Tile::Amulet), 0);
    assert!(level.is_consistent());
}
