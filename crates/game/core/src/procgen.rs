//! Room-and-corridor dungeon generation.
//!
//! Rooms are rectangles dropped at random positions and discarded when they
//! overlap an earlier room. Each accepted room is joined to the previous one
//! by an L-shaped tunnel and populated from the template spawn tables. The
//! player is placed at the centre of the first room.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GenerationParams;
use crate::entity::Entity;
use crate::error::{GenerationError, MapError};
use crate::map::{GameMap, RectangularRoom, TileKind};
use crate::oracle::{SpawnEntry, TemplateOracle};
use crate::position::Position;

/// Rejects parameter sets that cannot produce a dungeon.
pub fn validate(params: &GenerationParams) -> Result<(), GenerationError> {
    match GameMap::check_dimensions(params.map_width, params.map_height) {
        Ok(()) => {}
        Err(MapError::Empty { width, height }) => {
            return Err(GenerationError::EmptyMap { width, height });
        }
        Err(_) => {
            return Err(GenerationError::MapTooLarge {
                width: params.map_width,
                height: params.map_height,
            });
        }
    }

    if params.room_min_size < GenerationParams::MIN_ROOM_SIZE
        || params.room_min_size > params.room_max_size
    {
        return Err(GenerationError::InvalidRoomSize {
            min: params.room_min_size,
            max: params.room_max_size,
            floor: GenerationParams::MIN_ROOM_SIZE,
        });
    }

    // A room of size s spans s + 1 tiles including its far wall.
    if params.room_max_size >= params.map_width || params.room_max_size >= params.map_height {
        return Err(GenerationError::RoomTooLarge {
            room_max_size: params.room_max_size,
            width: params.map_width,
            height: params.map_height,
        });
    }

    if params.max_rooms == 0 {
        return Err(GenerationError::NoRooms);
    }
    if params.max_rooms > GenerationParams::MAX_ROOMS_LIMIT {
        return Err(GenerationError::TooManyRooms {
            max_rooms: params.max_rooms,
            limit: GenerationParams::MAX_ROOMS_LIMIT,
        });
    }

    for (kind, per_room) in [
        ("monsters", params.max_monsters_per_room),
        ("items", params.max_items_per_room),
    ] {
        if per_room > GenerationParams::MAX_SPAWNS_PER_ROOM {
            return Err(GenerationError::SpawnDensityTooHigh {
                kind,
                per_room,
                limit: GenerationParams::MAX_SPAWNS_PER_ROOM,
            });
        }
    }

    Ok(())
}

/// Generates a dungeon and moves `player` to the centre of its first room.
///
/// The map holds at least one and at most `params.max_rooms` rooms. The same
/// parameters, templates and RNG state always yield the same map.
pub fn generate_dungeon<R>(
    params: &GenerationParams,
    player: &mut Entity,
    templates: &dyn TemplateOracle,
    rng: &mut R,
) -> Result<GameMap, GenerationError>
where
    R: Rng + ?Sized,
{
    validate(params)?;
    if params.max_monsters_per_room > 0 {
        ensure_weighted(templates.monsters(), "monsters")?;
    }
    if params.max_items_per_room > 0 {
        ensure_weighted(templates.items(), "items")?;
    }

    let mut map = GameMap::filled(params.map_width, params.map_height);
    let min = params.room_min_size as i32;
    let max = params.room_max_size as i32;
    let width = params.map_width as i32;
    let height = params.map_height as i32;

    for _ in 0..params.max_rooms {
        let room_width = rng.gen_range(min..=max);
        let room_height = rng.gen_range(min..=max);
        let x = rng.gen_range(0..=width - room_width - 1);
        let y = rng.gen_range(0..=height - room_height - 1);

        let room = RectangularRoom::new(x, y, room_width, room_height);
        if map.rooms.iter().any(|other| room.intersects(other)) {
            continue;
        }

        for position in room.inner() {
            map.set_tile(position, TileKind::Floor);
        }

        match map.rooms.last() {
            None => player.position = room.center(),
            Some(previous) => {
                for position in tunnel_between(previous.center(), room.center(), rng) {
                    map.set_tile(position, TileKind::Floor);
                }
            }
        }

        place_entities(&room, &mut map, player.position, params, templates, rng)?;
        map.rooms.push(room);
    }

    Ok(map)
}

fn ensure_weighted(table: &[SpawnEntry], name: &'static str) -> Result<(), GenerationError> {
    if table.iter().map(|entry| entry.weight as u64).sum::<u64>() == 0 {
        return Err(GenerationError::EmptySpawnTable(name));
    }
    Ok(())
}

/// L-shaped path between two points; the corner is picked at random.
fn tunnel_between<R>(start: Position, end: Position, rng: &mut R) -> Vec<Position>
where
    R: Rng + ?Sized,
{
    let corner = if rng.gen_bool(0.5) {
        Position::new(end.x, start.y)
    } else {
        Position::new(start.x, end.y)
    };

    let mut path = axis_line(start, corner);
    path.extend(axis_line(corner, end));
    path
}

/// Inclusive straight line between two points sharing a row or a column.
fn axis_line(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).signum();
    let dy = (to.y - from.y).signum();
    let steps = (to.x - from.x).abs().max((to.y - from.y).abs());
    (0..=steps).map(|i| from.offset(dx * i, dy * i)).collect()
}

fn place_entities<R>(
    room: &RectangularRoom,
    map: &mut GameMap,
    player_position: Position,
    params: &GenerationParams,
    templates: &dyn TemplateOracle,
    rng: &mut R,
) -> Result<(), GenerationError>
where
    R: Rng + ?Sized,
{
    let monsters = rng.gen_range(0..=params.max_monsters_per_room);
    let items = rng.gen_range(0..=params.max_items_per_room);

    for _ in 0..monsters {
        let position = random_floor(room, rng);
        if position == player_position || map.any_entity_at(position) {
            continue;
        }
        let entry = pick(templates.monsters(), "monsters", rng)?;
        map.entities.push(entry.template.spawn_at(position));
    }

    for _ in 0..items {
        let position = random_floor(room, rng);
        if position == player_position || map.any_entity_at(position) {
            continue;
        }
        let entry = pick(templates.items(), "items", rng)?;
        map.entities.push(entry.template.spawn_at(position));
    }

    Ok(())
}

fn random_floor<R>(room: &RectangularRoom, rng: &mut R) -> Position
where
    R: Rng + ?Sized,
{
    Position::new(
        rng.gen_range(room.x1 + 1..room.x2),
        rng.gen_range(room.y1 + 1..room.y2),
    )
}

fn pick<'a, R>(
    table: &'a [SpawnEntry],
    name: &'static str,
    rng: &mut R,
) -> Result<&'a SpawnEntry, GenerationError>
where
    R: Rng + ?Sized,
{
    table
        .choose_weighted(rng, |entry| entry.weight)
        .map_err(|_| GenerationError::EmptySpawnTable(name))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::color::Rgb;
    use crate::entity::{Actor, AiKind, Consumable, Fighter, Inventory};

    struct Catalog {
        player: Entity,
        monsters: Vec<SpawnEntry>,
        items: Vec<SpawnEntry>,
    }

    impl TemplateOracle for Catalog {
        fn player(&self) -> &Entity {
            &self.player
        }
        fn monsters(&self) -> &[SpawnEntry] {
            &self.monsters
        }
        fn items(&self) -> &[SpawnEntry] {
            &self.items
        }
    }

    fn actor(name: &str, glyph: char, ai: AiKind) -> Entity {
        Entity::actor(
            name,
            glyph,
            Rgb(200, 200, 200),
            Actor {
                fighter: Fighter::new(10, 0, 3),
                ai,
                inventory: Inventory::new(0),
            },
        )
    }

    fn catalog() -> Catalog {
        Catalog {
            player: actor("Player", '@', AiKind::Player),
            monsters: vec![SpawnEntry::new(actor("Orc", 'o', AiKind::Hostile), 1)],
            items: vec![SpawnEntry::new(
                Entity::item("Potion", '!', Rgb(127, 0, 255), Consumable::Healing { amount: 4 }),
                1,
            )],
        }
    }

    fn generate(params: &GenerationParams, seed: u64) -> Result<(GameMap, Entity), GenerationError> {
        let catalog = catalog();
        let mut player = catalog.player.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_dungeon(params, &mut player, &catalog, &mut rng).map(|map| (map, player))
    }

    #[test]
    fn default_params_produce_connected_rooms_within_bounds() {
        let params = GenerationParams::default();
        let (map, player) = generate(&params, 7).unwrap();

        assert_eq!(map.width(), 80);
        assert_eq!(map.height(), 43);
        assert!(!map.rooms.is_empty());
        assert!(map.rooms.len() <= params.max_rooms as usize);
        assert!(map.is_walkable(player.position));
        assert_eq!(player.position, map.rooms[0].center());

        for room in &map.rooms {
            assert!(room.x1 >= 0 && room.y1 >= 0);
            assert!(room.x2 < 80 && room.y2 < 43);
        }
        for entity in &map.entities {
            assert!(map.is_walkable(entity.position));
            assert_ne!(entity.position, player.position);
        }
    }

    #[test]
    fn per_room_density_is_capped() {
        let params = GenerationParams::default();
        let (map, _) = generate(&params, 99).unwrap();

        for room in &map.rooms {
            let monsters = map
                .actors()
                .filter(|e| room.contains_inner(e.position))
                .count();
            let items = map.items().filter(|e| room.contains_inner(e.position)).count();
            assert!(monsters <= 2);
            assert!(items <= 2);
        }
    }

    #[test]
    fn same_seed_same_dungeon() {
        let params = GenerationParams::default();
        let (first, p1) = generate(&params, 42).unwrap();
        let (second, p2) = generate(&params, 42).unwrap();
        assert_eq!(first, second);
        assert_eq!(p1.position, p2.position);
    }

    #[test]
    fn single_room_map() {
        let params = GenerationParams {
            map_width: 12,
            map_height: 12,
            max_rooms: 1,
            room_min_size: 4,
            room_max_size: 6,
            ..GenerationParams::default()
        };
        let (map, _) = generate(&params, 3).unwrap();
        assert_eq!(map.rooms.len(), 1);
    }

    #[test]
    fn unsatisfiable_params_are_rejected() {
        let too_large = GenerationParams {
            map_width: 8,
            map_height: 8,
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&too_large, 1),
            Err(GenerationError::RoomTooLarge { .. })
        ));

        let inverted = GenerationParams {
            room_min_size: 9,
            room_max_size: 4,
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&inverted, 1),
            Err(GenerationError::InvalidRoomSize { .. })
        ));

        let no_rooms = GenerationParams {
            max_rooms: 0,
            ..GenerationParams::default()
        };
        assert_eq!(generate(&no_rooms, 1).unwrap_err(), GenerationError::NoRooms);

        let empty = GenerationParams {
            map_width: 0,
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&empty, 1),
            Err(GenerationError::EmptyMap { .. })
        ));

        let huge = GenerationParams {
            map_width: 4_000_000_000,
            ..GenerationParams::default()
        };
        assert_eq!(
            generate(&huge, 1).unwrap_err(),
            GenerationError::MapTooLarge {
                width: 4_000_000_000,
                height: GenerationParams::DEFAULT_MAP_HEIGHT,
            }
        );

        let endless = GenerationParams {
            max_rooms: u32::MAX,
            ..GenerationParams::default()
        };
        assert!(matches!(
            generate(&endless, 1),
            Err(GenerationError::TooManyRooms { .. })
        ));

        let crowded = GenerationParams {
            max_items_per_room: u32::MAX,
            ..GenerationParams::default()
        };
        assert_eq!(
            generate(&crowded, 1).unwrap_err(),
            GenerationError::SpawnDensityTooHigh {
                kind: "items",
                per_room: u32::MAX,
                limit: GenerationParams::MAX_SPAWNS_PER_ROOM,
            }
        );
    }

    #[test]
    fn empty_spawn_table_fails_only_when_needed() {
        let mut catalog = catalog();
        catalog.monsters.clear();
        let mut player = catalog.player.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let err = generate_dungeon(&GenerationParams::default(), &mut player, &catalog, &mut rng)
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptySpawnTable("monsters"));

        let peaceful = GenerationParams {
            max_monsters_per_room: 0,
            ..GenerationParams::default()
        };
        assert!(generate_dungeon(&peaceful, &mut player, &catalog, &mut rng).is_ok());
    }

    #[test]
    fn axis_line_is_inclusive() {
        let line = axis_line(Position::new(3, 1), Position::new(0, 1));
        assert_eq!(
            line,
            vec![
                Position::new(3, 1),
                Position::new(2, 1),
                Position::new(1, 1),
                Position::new(0, 1)
            ]
        );
    }
}
