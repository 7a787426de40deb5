//! Entity template loader.
//!
//! The RON file describes the player and two weighted spawn tables. Actor and
//! item specs are flattened forms of [`Entity`]; the loader fills in the
//! parts every template shares (origin position, empty inventory, AI kind).

use std::path::Path;

use game_core::{Actor, AiKind, Consumable, Entity, Fighter, Inventory, Rgb, SpawnEntry};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::templates::EntityTemplates;

fn default_weight() -> u32 {
    1
}

#[derive(Clone, Debug, Deserialize)]
pub struct ActorSpec {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub hp: u32,
    pub defense: u32,
    pub power: u32,
    #[serde(default)]
    pub inventory: usize,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

impl ActorSpec {
    fn into_entity(self, ai: AiKind) -> Entity {
        Entity::actor(
            self.name,
            self.glyph,
            self.color,
            Actor {
                fighter: Fighter::new(self.hp, self.defense, self.power),
                ai,
                inventory: Inventory::new(self.inventory),
            },
        )
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    pub glyph: char,
    pub color: Rgb,
    pub consumable: Consumable,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

/// Top-level layout of `entities.ron`.
#[derive(Clone, Debug, Deserialize)]
pub struct EntityCatalogSpec {
    pub player: ActorSpec,
    #[serde(default)]
    pub monsters: Vec<ActorSpec>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

impl EntityCatalogSpec {
    pub fn into_templates(self) -> EntityTemplates {
        let player = self.player.into_entity(AiKind::Player);
        let monsters = self
            .monsters
            .into_iter()
            .map(|spec| {
                let weight = spec.weight;
                SpawnEntry::new(spec.into_entity(AiKind::Hostile), weight)
            })
            .collect();
        let items = self
            .items
            .into_iter()
            .map(|spec| {
                SpawnEntry::new(
                    Entity::item(spec.name, spec.glyph, spec.color, spec.consumable),
                    spec.weight,
                )
            })
            .collect();

        EntityTemplates::new(player, monsters, items)
    }
}

/// Loader for entity templates from RON files.
pub struct EntityLoader;

impl EntityLoader {
    pub fn load(path: &Path) -> LoadResult<EntityTemplates> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EntityTemplates> {
        let spec: EntityCatalogSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse entity catalog RON: {}", e))?;

        if spec.player.hp == 0 {
            anyhow::bail!("Player template '{}' must start with positive hp", spec.player.name);
        }

        Ok(spec.into_templates())
    }
}
