//! Entities living on the map: actors (player, monsters) and items.
//!
//! Templates are plain values. Spawning always goes through [`Entity::spawn_at`],
//! which clones the whole tree (inventory included), so an instance never
//! shares mutable state with its template or with other instances.

use crate::color::Rgb;
use crate::position::Position;

/// Draw order; higher values are drawn on top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderOrder {
    Corpse,
    Item,
    #[default]
    Actor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub position: Position,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub kind: EntityKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Actor(Actor),
    Item(Item),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actor {
    pub fighter: Fighter,
    pub ai: AiKind,
    pub inventory: Inventory,
}

/// Combat statistics. Only carried and displayed here; combat rules live elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub max_hp: u32,
    pub hp: u32,
    pub defense: u32,
    pub power: u32,
}

impl Fighter {
    pub const fn new(hp: u32, defense: u32, power: u32) -> Self {
        Self {
            max_hp: hp,
            hp,
            defense,
            power,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiKind {
    /// Controlled by the player's input.
    #[default]
    Player,
    Hostile,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub capacity: usize,
    pub items: Vec<Entity>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub consumable: Consumable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    Healing { amount: u32 },
    Lightning { damage: u32, max_range: u32 },
    Confusion { turns: u32 },
    Fireball { damage: u32, radius: u32 },
}

impl Entity {
    /// Builds an actor that blocks movement and draws above items.
    pub fn actor(name: impl Into<String>, glyph: char, color: Rgb, actor: Actor) -> Self {
        Self {
            name: name.into(),
            glyph,
            color,
            position: Position::ORIGIN,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            kind: EntityKind::Actor(actor),
        }
    }

    /// Builds an item that can be walked over.
    pub fn item(name: impl Into<String>, glyph: char, color: Rgb, consumable: Consumable) -> Self {
        Self {
            name: name.into(),
            glyph,
            color,
            position: Position::ORIGIN,
            blocks_movement: false,
            render_order: RenderOrder::Item,
            kind: EntityKind::Item(Item { consumable }),
        }
    }

    /// Returns an independent copy of this template placed at `position`.
    pub fn spawn_at(&self, position: Position) -> Self {
        let mut entity = self.clone();
        entity.position = position;
        entity
    }

    pub fn as_actor(&self) -> Option<&Actor> {
        match &self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item(_) => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut Actor> {
        match &mut self.kind {
            EntityKind::Actor(actor) => Some(actor),
            EntityKind::Item(_) => None,
        }
    }

    pub fn is_item(&self) -> bool {
        matches!(self.kind, EntityKind::Item(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Entity {
        Entity::actor(
            "Player",
            '@',
            Rgb(255, 255, 255),
            Actor {
                fighter: Fighter::new(30, 2, 5),
                ai: AiKind::Player,
                inventory: Inventory::new(2),
            },
        )
    }

    #[test]
    fn spawn_at_is_independent_of_template() {
        let template = hero();
        let mut spawned = template.spawn_at(Position::new(3, 4));

        let actor = spawned.as_actor_mut().unwrap();
        actor.fighter.hp = 1;
        actor.inventory.items.push(Entity::item(
            "Potion",
            '!',
            Rgb(127, 0, 255),
            Consumable::Healing { amount: 4 },
        ));

        let original = template.as_actor().unwrap();
        assert_eq!(original.fighter.hp, 30);
        assert!(original.inventory.items.is_empty());
        assert_eq!(template.position, Position::ORIGIN);
        assert_eq!(spawned.position, Position::new(3, 4));
    }

    #[test]
    fn inventory_reports_full() {
        let mut inventory = Inventory::new(1);
        assert!(!inventory.is_full());
        inventory.items.push(hero());
        assert!(inventory.is_full());
    }

    #[test]
    fn ai_kind_parses_case_insensitively() {
        assert_eq!("HOSTILE".parse::<AiKind>().unwrap(), AiKind::Hostile);
        assert_eq!(AiKind::Player.to_string(), "player");
    }
}
