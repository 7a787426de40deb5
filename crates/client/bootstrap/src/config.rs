//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use game_core::GenerationParams;
use runtime::SaveSlots;

/// Configuration required to bootstrap a client session.
///
/// Parsed from the environment; unset or unparsable variables keep their
/// defaults.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub generation: GenerationOverrides,
    pub saves: SaveConfig,
    pub messages: MessageConfig,
    /// Directory holding `entities.ron` / `generation.toml`.
    pub content_dir: Option<PathBuf>,
    /// Text file drawn behind the main menu.
    pub menu_background: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAP_WIDTH`, `MAP_HEIGHT` - Dungeon size in tiles (default: 80x43)
    /// - `MAX_ROOMS` - Room placement attempts (default: 30)
    /// - `ROOM_MIN_SIZE`, `ROOM_MAX_SIZE` - Room side bounds (default: 6..10)
    /// - `MAX_MONSTERS_PER_ROOM`, `MAX_ITEMS_PER_ROOM` - Spawn caps (default: 2)
    /// - `DUNGEON_SEED` - Fixed seed for reproducible dungeons
    /// - `SAVE_DATA_DIR` - Directory for save files (default: platform-specific)
    /// - `SAVE_FILE` - Save slot written on exit (default: savegame.sav)
    /// - `CRASH_SAVE_FILE` - Save slot written on crash (default: save_game.sav)
    /// - `MESSAGE_CAPACITY` - Message log capacity (default: 256)
    /// - `CONTENT_DATA_DIR` - Directory with content data files
    /// - `MENU_BACKGROUND` - Text file drawn behind the main menu
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-provided lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.generation = GenerationOverrides {
            map_width: read_env(&lookup, "MAP_WIDTH"),
            map_height: read_env(&lookup, "MAP_HEIGHT"),
            max_rooms: read_env(&lookup, "MAX_ROOMS"),
            room_min_size: read_env(&lookup, "ROOM_MIN_SIZE"),
            room_max_size: read_env(&lookup, "ROOM_MAX_SIZE"),
            max_monsters_per_room: read_env(&lookup, "MAX_MONSTERS_PER_ROOM"),
            max_items_per_room: read_env(&lookup, "MAX_ITEMS_PER_ROOM"),
            seed: read_env(&lookup, "DUNGEON_SEED"),
        };

        if let Some(dir) = lookup("SAVE_DATA_DIR") {
            config.saves.dir = PathBuf::from(dir);
        }
        if let Some(slot) = non_empty(lookup("SAVE_FILE")) {
            config.saves.slots.primary = slot;
        }
        if let Some(slot) = non_empty(lookup("CRASH_SAVE_FILE")) {
            config.saves.slots.fallback = slot;
        }

        if let Some(capacity) = read_env::<usize, _>(&lookup, "MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config.content_dir = lookup("CONTENT_DATA_DIR").map(PathBuf::from);
        config.menu_background = lookup("MENU_BACKGROUND").map(PathBuf::from);

        config
    }
}

/// Generation parameters set through the environment.
///
/// Applied on top of the content file (or built-in defaults), so only the
/// values actually set win.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationOverrides {
    pub map_width: Option<u32>,
    pub map_height: Option<u32>,
    pub max_rooms: Option<u32>,
    pub room_min_size: Option<u32>,
    pub room_max_size: Option<u32>,
    pub max_monsters_per_room: Option<u32>,
    pub max_items_per_room: Option<u32>,
    pub seed: Option<u64>,
}

impl GenerationOverrides {
    pub fn apply(&self, mut params: GenerationParams) -> GenerationParams {
        if let Some(value) = self.map_width {
            params.map_width = value;
        }
        if let Some(value) = self.map_height {
            params.map_height = value;
        }
        if let Some(value) = self.max_rooms {
            params.max_rooms = value;
        }
        if let Some(value) = self.room_min_size {
            params.room_min_size = value;
        }
        if let Some(value) = self.room_max_size {
            params.room_max_size = value;
        }
        if let Some(value) = self.max_monsters_per_room {
            params.max_monsters_per_room = value;
        }
        if let Some(value) = self.max_items_per_room {
            params.max_items_per_room = value;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        params
    }
}

#[derive(Clone, Debug)]
pub struct SaveConfig {
    pub dir: PathBuf,
    pub slots: SaveSlots,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            dir: crate::dirs::save_dir(),
            slots: SaveSlots::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: game_core::MessageLog::DEFAULT_CAPACITY,
        }
    }
}

fn read_env<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = RuntimeConfig::from_lookup(lookup(&[]));
        assert_eq!(config.generation, GenerationOverrides::default());
        assert_eq!(config.saves.slots, SaveSlots::default());
        assert_eq!(config.messages.capacity, game_core::MessageLog::DEFAULT_CAPACITY);
        assert!(config.content_dir.is_none());
    }

    #[test]
    fn parses_generation_and_save_settings() {
        let config = RuntimeConfig::from_lookup(lookup(&[
            ("MAP_WIDTH", "60"),
            ("DUNGEON_SEED", "1234"),
            ("SAVE_DATA_DIR", "/var/saves"),
            ("SAVE_FILE", "slot1.sav"),
            ("CRASH_SAVE_FILE", ""),
            ("MESSAGE_CAPACITY", "0"),
        ]));

        let params = config.generation.apply(GenerationParams::default());
        assert_eq!(params.map_width, 60);
        assert_eq!(params.map_height, GenerationParams::DEFAULT_MAP_HEIGHT);
        assert_eq!(params.seed, Some(1234));
        assert_eq!(config.saves.dir, PathBuf::from("/var/saves"));
        assert_eq!(config.saves.slots.primary, "slot1.sav");
        assert_eq!(config.saves.slots.fallback, SaveSlots::DEFAULT_FALLBACK);
        assert_eq!(config.messages.capacity, 1);
    }

    #[test]
    fn unparsable_values_are_ignored() {
        let config = RuntimeConfig::from_lookup(lookup(&[("MAX_ROOMS", "many")]));
        assert_eq!(config.generation.max_rooms, None);
    }

    #[test]
    fn overrides_only_replace_set_fields() {
        let base = GenerationParams {
            map_width: 50,
            seed: Some(9),
            ..GenerationParams::default()
        };
        let overrides = GenerationOverrides {
            map_height: Some(20),
            ..GenerationOverrides::default()
        };

        let params = overrides.apply(base);
        assert_eq!(params.map_width, 50);
        assert_eq!(params.map_height, 20);
        assert_eq!(params.seed, Some(9));
    }
}
