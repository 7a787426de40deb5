//! Generated dungeon level: terrain grid, room layout and non-player entities.

use crate::entity::Entity;
use crate::error::MapError;
use crate::position::Position;

/// Terrain class of a single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Wall,
    Floor,
}

impl TileKind {
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor)
    }

    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
        }
    }
}

/// Axis-aligned room carved by the generator.
///
/// `(x1, y1)` and `(x2, y2)` are the wall corners; the floor is strictly inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectangularRoom {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl RectangularRoom {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
        }
    }

    pub const fn center(&self) -> Position {
        Position::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Iterates the floor tiles of the room (walls excluded).
    pub fn inner(&self) -> impl Iterator<Item = Position> + '_ {
        ((self.y1 + 1)..self.y2)
            .flat_map(move |y| ((self.x1 + 1)..self.x2).map(move |x| Position::new(x, y)))
    }

    pub fn contains_inner(&self, position: Position) -> bool {
        position.x > self.x1 && position.x < self.x2 && position.y > self.y1 && position.y < self.y2
    }

    /// True when the rooms (walls included) overlap.
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }
}

/// Terrain grid plus the rooms and entities placed on it.
///
/// `tiles.len() == width * height` always holds; deserialization rejects
/// data that breaks it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGameMap"))]
pub struct GameMap {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
    pub rooms: Vec<RectangularRoom>,
    /// Monsters and floor items. The player is owned by the session instead.
    pub entities: Vec<Entity>,
}

impl GameMap {
    /// Largest accepted width or height.
    pub const MAX_DIMENSION: u32 = 4096;
    /// Largest accepted tile count.
    pub const MAX_AREA: u64 = 1 << 20;

    /// Checks `width`/`height` against the size limits.
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty { width, height });
        }
        if width > Self::MAX_DIMENSION
            || height > Self::MAX_DIMENSION
            || u64::from(width) * u64::from(height) > Self::MAX_AREA
        {
            return Err(MapError::TooLarge { width, height });
        }
        Ok(())
    }

    /// Creates a map filled with walls.
    pub fn filled(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Wall; width as usize * height as usize],
            rooms: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| position.y as usize * self.width as usize + position.x as usize)
    }

    /// Returns the tile at `position`, or `None` outside the map.
    pub fn tile(&self, position: Position) -> Option<TileKind> {
        self.index(position).map(|idx| self.tiles[idx])
    }

    /// Sets a tile; writes outside the map are ignored.
    pub fn set_tile(&mut self, position: Position, tile: TileKind) {
        if let Some(idx) = self.index(position) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.tile(position).is_some_and(TileKind::is_walkable)
    }

    pub fn blocking_entity_at(&self, position: Position) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.blocks_movement && entity.position == position)
    }

    pub fn any_entity_at(&self, position: Position) -> bool {
        self.entities.iter().any(|entity| entity.position == position)
    }

    /// Index into [`GameMap::entities`] of the first item lying at `position`.
    pub fn item_index_at(&self, position: Position) -> Option<usize> {
        self.entities
            .iter()
            .position(|entity| entity.is_item() && entity.position == position)
    }

    pub fn actors(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.as_actor().is_some())
    }

    pub fn items(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|entity| entity.is_item())
    }
}

/// Wire form of [`GameMap`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGameMap {
    width: u32,
    height: u32,
    tiles: Vec<TileKind>,
    rooms: Vec<RectangularRoom>,
    entities: Vec<Entity>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGameMap> for GameMap {
    type Error = MapError;

    fn try_from(raw: RawGameMap) -> Result<Self, Self::Error> {
        Self::check_dimensions(raw.width, raw.height)?;
        let expected = raw.width as usize * raw.height as usize;
        if raw.tiles.len() != expected {
            return Err(MapError::TileCount {
                width: raw.width,
                height: raw.height,
                tiles: raw.tiles.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
            rooms: raw.rooms,
            entities: raw.entities,
        })
    }
}
