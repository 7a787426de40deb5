//! Read-only access to the entity templates used when creating sessions.

use crate::entity::Entity;

/// Weighted template in a spawn table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnEntry {
    pub template: Entity,
    pub weight: u32,
}

impl SpawnEntry {
    pub fn new(template: Entity, weight: u32) -> Self {
        Self { template, weight }
    }
}

/// Static template catalog consumed by session creation and dungeon generation.
///
/// Implementations hand out references; callers clone what they spawn.
pub trait TemplateOracle: Send + Sync {
    fn player(&self) -> &Entity;
    fn monsters(&self) -> &[SpawnEntry];
    fn items(&self) -> &[SpawnEntry];
}
