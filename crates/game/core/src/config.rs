/// Parameters controlling procedural generation of a new dungeon.
///
/// The record is passed once into session creation and not retained.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationParams {
    pub map_width: u32,
    pub map_height: u32,
    pub max_rooms: u32,
    pub room_min_size: u32,
    pub room_max_size: u32,
    pub max_monsters_per_room: u32,
    pub max_items_per_room: u32,
    /// Fixed seed for reproducible dungeons; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl GenerationParams {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAP_WIDTH: u32 = 80;
    pub const DEFAULT_MAP_HEIGHT: u32 = 43;
    pub const DEFAULT_MAX_ROOMS: u32 = 30;
    pub const DEFAULT_ROOM_MIN_SIZE: u32 = 6;
    pub const DEFAULT_ROOM_MAX_SIZE: u32 = 10;
    pub const DEFAULT_MAX_MONSTERS_PER_ROOM: u32 = 2;
    pub const DEFAULT_MAX_ITEMS_PER_ROOM: u32 = 2;

    /// Smallest room that still has a floor tile inside its walls.
    pub const MIN_ROOM_SIZE: u32 = 2;
    /// Upper bound on placement attempts.
    pub const MAX_ROOMS_LIMIT: u32 = 1024;
    /// Upper bound on monsters or items spawned into one room.
    pub const MAX_SPAWNS_PER_ROOM: u32 = 64;

    pub const fn new() -> Self {
        Self {
            map_width: Self::DEFAULT_MAP_WIDTH,
            map_height: Self::DEFAULT_MAP_HEIGHT,
            max_rooms: Self::DEFAULT_MAX_ROOMS,
            room_min_size: Self::DEFAULT_ROOM_MIN_SIZE,
            room_max_size: Self::DEFAULT_ROOM_MAX_SIZE,
            max_monsters_per_room: Self::DEFAULT_MAX_MONSTERS_PER_ROOM,
            max_items_per_room: Self::DEFAULT_MAX_ITEMS_PER_ROOM,
            seed: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::new()
    }
}
