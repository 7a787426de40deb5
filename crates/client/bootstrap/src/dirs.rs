//! Per-user directories for logs and save files.
use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "dungeon")
}

/// `logs/` under the platform cache dir (`~/.cache/dungeon/logs` on Linux).
///
/// Falls back to `/tmp/dungeon/logs` when no home directory is known.
pub fn log_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/dungeon/logs"))
}

/// `saves/` under the platform data dir (`~/.local/share/dungeon/saves` on Linux).
///
/// Falls back to `./save_data` when no home directory is known.
pub fn save_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("saves"))
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}
