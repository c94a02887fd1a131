//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use game_content::SymbolPolicy;
use game_core::GameConfig;

/// Configuration for a terminal play session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub level_path: PathBuf,
    pub symbol_policy: SymbolPolicy,
    pub game: GameConfig,
}

impl ClientConfig {
    pub const DEFAULT_LEVEL: &'static str = "levels/level1.txt";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRAWLER_LEVEL` - Level file to play (default: `levels/level1.txt`)
    /// - `CRAWLER_STRICT_SYMBOLS` - Reject unknown tile symbols (default: false)
    /// - `CRAWLER_RESIZE_ON_AMULET` - Grow the map on amulet pickup (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("CRAWLER_LEVEL") {
            config.level_path = PathBuf::from(path);
        }

        if let Some(strict) = read_env::<bool>("CRAWLER_STRICT_SYMBOLS") {
            config.symbol_policy = if strict {
                SymbolPolicy::Strict
            } else {
                SymbolPolicy::Permissive
            };
        }

        if let Some(resize) = read_env::<bool>("CRAWLER_RESIZE_ON_AMULET") {
            config.game.resize_on_amulet = resize;
        }

        config
    }

    /// Level path given on the command line wins over the environment.
    pub fn with_level_arg(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.level_path = PathBuf::from(path);
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            level_path: PathBuf::from(Self::DEFAULT_LEVEL),
            symbol_policy: SymbolPolicy::default(),
            game: GameConfig::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
