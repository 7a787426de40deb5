//! The in-progress game: player, generated map and message log.

use crate::action::Action;
use crate::color;
use crate::entity::{Entity, Fighter};
use crate::error::ActionError;
use crate::map::GameMap;
use crate::message::MessageLog;

/// A single game session.
///
/// Everything needed to resume play lives here, so persisting a `Session`
/// and reading it back restores the game exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub player: Entity,
    pub map: GameMap,
    pub log: MessageLog,
    seed: u64,
    turn: u64,
}

impl Session {
    pub fn new(player: Entity, map: GameMap, seed: u64, log_capacity: usize) -> Self {
        Self {
            player,
            map,
            log: MessageLog::new(log_capacity),
            seed,
            turn: 0,
        }
    }

    /// Seed the dungeon was generated from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of turns the player has taken.
    pub const fn turn(&self) -> u64 {
        self.turn
    }

    pub fn player_fighter(&self) -> Option<&Fighter> {
        self.player.as_actor().map(|actor| &actor.fighter)
    }

    /// Resolves one player action. A successful action consumes a turn.
    pub fn perform(&mut self, action: Action) -> Result<(), ActionError> {
        let origin = self.player.position;
        if !self.map.in_bounds(origin) {
            return Err(ActionError::PlayerOutOfBounds(origin));
        }

        match action {
            Action::Wait => {}
            Action::Move { dx, dy } => {
                let destination = origin.offset(dx, dy);
                if !self.map.is_walkable(destination) {
                    return Err(ActionError::impossible("That way is blocked."));
                }

                match self.map.blocking_entity_at(destination) {
                    Some(target) => {
                        let text = format!("You kick the {}, much to its annoyance!", target.name);
                        self.log.add_message(text, color::PLAYER_ATK);
                    }
                    None => self.player.position = destination,
                }
            }
            Action::Pickup => {
                let index = self
                    .map
                    .item_index_at(origin)
                    .ok_or_else(|| ActionError::impossible("There is nothing here to pick up."))?;

                let inventory = &mut self
                    .player
                    .as_actor_mut()
                    .ok_or(ActionError::PlayerNotAnActor)?
                    .inventory;
                if inventory.is_full() {
                    return Err(ActionError::impossible("Your inventory is full."));
                }

                let item = self.map.entities.remove(index);
                let text = format!("You picked up the {}!", item.name);
                inventory.items.push(item);
                self.log.add_message(text, color::WHITE);
            }
        }

        self.turn += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::entity::{Actor, AiKind, Consumable, Inventory};
    use crate::map::TileKind;
    use crate::position::Position;

    fn player(capacity: usize) -> Entity {
        Entity::actor(
            "Player",
            '@',
            color::WHITE,
            Actor {
                fighter: Fighter::new(30, 2, 5),
                ai: AiKind::Player,
                inventory: Inventory::new(capacity),
            },
        )
        .spawn_at(Position::new(1, 1))
    }

    fn corridor() -> GameMap {
        let mut map = GameMap::filled(5, 3);
        for x in 1..4 {
            map.set_tile(Position::new(x, 1), TileKind::Floor);
        }
        map
    }

    fn potion() -> Entity {
        Entity::item("Health Potion", '!', Rgb(127, 0, 255), Consumable::Healing { amount: 4 })
    }

    #[test]
    fn moves_onto_floor_and_counts_turns() {
        let mut session = Session::new(player(1), corridor(), 0, 16);
        session.perform(Action::step(1, 0)).unwrap();
        assert_eq!(session.player.position, Position::new(2, 1));
        assert_eq!(session.turn(), 1);
    }

    #[test]
    fn walls_are_impossible_and_free() {
        let mut session = Session::new(player(1), corridor(), 0, 16);
        let err = session.perform(Action::step(0, -1)).unwrap_err();
        assert!(err.is_impossible());
        assert_eq!(err.to_string(), "That way is blocked.");
        assert_eq!(session.turn(), 0);
    }

    #[test]
    fn bumping_a_monster_logs_without_moving() {
        let mut map = corridor();
        let orc = Entity::actor(
            "Orc",
            'o',
            Rgb(63, 127, 63),
            Actor {
                fighter: Fighter::new(10, 0, 3),
                ai: AiKind::Hostile,
                inventory: Inventory::new(0),
            },
        );
        map.entities.push(orc.spawn_at(Position::new(2, 1)));

        let mut session = Session::new(player(1), map, 0, 16);
        session.perform(Action::step(1, 0)).unwrap();
        assert_eq!(session.player.position, Position::new(1, 1));
        assert!(session.log.contains_text("You kick the Orc"));
    }

    #[test]
    fn pickup_moves_item_into_inventory() {
        let mut map = corridor();
        map.entities.push(potion().spawn_at(Position::new(1, 1)));
        map.entities.push(potion().spawn_at(Position::new(1, 1)));

        let mut session = Session::new(player(1), map, 0, 16);
        session.perform(Action::Pickup).unwrap();
        assert_eq!(session.map.entities.len(), 1);
        assert_eq!(session.player.as_actor().unwrap().inventory.items.len(), 1);
        assert!(session.log.contains_text("You picked up the Health Potion!"));

        let err = session.perform(Action::Pickup).unwrap_err();
        assert_eq!(err, ActionError::impossible("Your inventory is full."));
    }

    #[test]
    fn pickup_on_empty_tile_is_impossible() {
        let mut session = Session::new(player(1), corridor(), 0, 16);
        assert!(session.perform(Action::Pickup).unwrap_err().is_impossible());
    }

    #[test]
    fn displaced_player_is_reported_as_broken_state() {
        let mut session = Session::new(player(1), corridor(), 0, 16);
        session.player.position = Position::new(-4, 0);
        assert_eq!(
            session.perform(Action::Wait).unwrap_err(),
            ActionError::PlayerOutOfBounds(Position::new(-4, 0))
        );
    }
}
