/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Grow the map when the player picks up the amulet.
    pub resize_on_amulet: bool,
}

impl GameConfig {
    // ===== compile-time limits =====
    /// Largest number of cells a map may hold, on every platform.
    ///
    /// Level files carry 32-bit signed dimensions, so the product is capped at
    /// the same range regardless of the host's pointer width.
    pub const MAX_CELLS: usize = i32::MAX as usize;
    /// Largest row or column count a map may declare.
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RESIZE_ON_AMULET: bool = true;

    pub fn new() -> Self {
        Self {
            resize_on_amulet: Self::DEFAULT_RESIZE_ON_AMULET,
        }
    }

    pub fn with_resize_on_amulet(resize_on_amulet: bool) -> Self {
        Self { resize_on_amulet }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
