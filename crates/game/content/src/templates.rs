//! Built-in entity templates and spawn weights.

use game_core::color::Rgb;
use game_core::{
    Actor, AiKind, Consumable, Entity, Fighter, Inventory, SpawnEntry, TemplateOracle,
};

/// Template catalog: the player archetype plus weighted monster and item tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityTemplates {
    pub player: Entity,
    pub monsters: Vec<SpawnEntry>,
    pub items: Vec<SpawnEntry>,
}

impl EntityTemplates {
    pub const PLAYER_INVENTORY_CAPACITY: usize = 26;

    pub fn new(player: Entity, monsters: Vec<SpawnEntry>, items: Vec<SpawnEntry>) -> Self {
        Self {
            player,
            monsters,
            items,
        }
    }
}

impl Default for EntityTemplates {
    fn default() -> Self {
        Self::new(
            player(),
            vec![SpawnEntry::new(orc(), 80), SpawnEntry::new(troll(), 20)],
            vec![
                SpawnEntry::new(health_potion(), 70),
                SpawnEntry::new(confusion_scroll(), 10),
                SpawnEntry::new(lightning_scroll(), 10),
                SpawnEntry::new(fireball_scroll(), 10),
            ],
        )
    }
}

impl TemplateOracle for EntityTemplates {
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

fn fighter(name: &str, glyph: char, color: Rgb, stats: Fighter, ai: AiKind, slots: usize) -> Entity {
    Entity::actor(
        name,
        glyph,
        color,
        Actor {
            fighter: stats,
            ai,
            inventory: Inventory::new(slots),
        },
    )
}

pub fn player() -> Entity {
    fighter(
        "Player",
        '@',
        Rgb(255, 255, 255),
        Fighter::new(30, 2, 5),
        AiKind::Player,
        EntityTemplates::PLAYER_INVENTORY_CAPACITY,
    )
}

pub fn orc() -> Entity {
    fighter("Orc", 'o', Rgb(63, 127, 63), Fighter::new(10, 0, 3), AiKind::Hostile, 0)
}

pub fn troll() -> Entity {
    fighter("Troll", 'T', Rgb(0, 127, 0), Fighter::new(16, 1, 4), AiKind::Hostile, 0)
}

pub fn health_potion() -> Entity {
    Entity::item(
        "Health Potion",
        '!',
        Rgb(127, 0, 255),
        Consumable::Healing { amount: 4 },
    )
}

pub fn lightning_scroll() -> Entity {
    Entity::item(
        "Lightning Scroll",
        '~',
        Rgb(255, 255, 0),
        Consumable::Lightning {
            damage: 20,
            max_range: 5,
        },
    )
}

pub fn confusion_scroll() -> Entity {
    Entity::item(
        "Confusion Scroll",
        '~',
        Rgb(207, 63, 255),
        Consumable::Confusion { turns: 10 },
    )
}

pub fn fireball_scroll() -> Entity {
    Entity::item(
        "Fireball Scroll",
        '~',
        Rgb(255, 0, 0),
        Consumable::Fireball {
            damage: 12,
            radius: 3,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_are_weighted() {
        let templates = EntityTemplates::default();
        let monster_weight: u32 = templates.monsters.iter().map(|e| e.weight).sum();
        let item_weight: u32 = templates.items.iter().map(|e| e.weight).sum();
        assert_eq!(monster_weight, 100);
        assert_eq!(item_weight, 100);
        assert!(templates.monsters.iter().all(|e| e.template.blocks_movement));
        assert!(templates.items.iter().all(|e| e.template.is_item()));
    }

    #[test]
    fn player_template_has_empty_inventory() {
        let templates = EntityTemplates::default();
        let actor = templates.player().as_actor().unwrap();
        assert_eq!(actor.ai, AiKind::Player);
        assert!(actor.inventory.items.is_empty());
        assert_eq!(actor.inventory.capacity, 26);
    }
}
