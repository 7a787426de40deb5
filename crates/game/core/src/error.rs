//! Error types raised by generation and turn resolution.

use crate::position::Position;

/// Parameter sets that no dungeon can satisfy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("map dimensions {width}x{height} must both be non-zero")]
    EmptyMap { width: u32, height: u32 },

    #[error("room size bounds {min}..={max} are invalid (minimum room size is {floor})")]
    InvalidRoomSize { min: u32, max: u32, floor: u32 },

    #[error("rooms up to {room_max_size} tiles do not fit in a {width}x{height} map")]
    RoomTooLarge {
        room_max_size: u32,
        width: u32,
        height: u32,
    },

    #[error("map dimensions {width}x{height} exceed the size limit")]
    MapTooLarge { width: u32, height: u32 },

    #[error("at least one room is required, max_rooms is 0")]
    NoRooms,

    #[error("max_rooms {max_rooms} exceeds the limit of {limit}")]
    TooManyRooms { max_rooms: u32, limit: u32 },

    #[error("{per_room} {kind} per room exceeds the limit of {limit}")]
    SpawnDensityTooHigh {
        kind: &'static str,
        per_room: u32,
        limit: u32,
    },

    #[error("spawn table `{0}` is empty or has zero total weight")]
    EmptySpawnTable(&'static str),
}

/// Map shapes that cannot be built or loaded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map dimensions {width}x{height} must both be non-zero")]
    Empty { width: u32, height: u32 },

    #[error("map dimensions {width}x{height} exceed the size limit")]
    TooLarge { width: u32, height: u32 },

    #[error("{width}x{height} map holds {tiles} tiles")]
    TileCount { width: u32, height: u32, tiles: usize },
}

/// Failures while resolving a player action.
///
/// [`ActionError::Impossible`] is a game-rule refusal that is reported to the
/// player and consumes no turn; the other variants indicate broken state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("{0}")]
    Impossible(String),

    #[error("player stands outside the map at {0}")]
    PlayerOutOfBounds(Position),

    #[error("player entity has no actor component")]
    PlayerNotAnActor,
}

impl ActionError {
    pub fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible(reason.into())
    }

    pub const fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible(_))
    }
}
