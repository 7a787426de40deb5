use std::fs;

use game_content::EntityTemplates;
use game_core::{GenerationParams, Session, TemplateOracle, color, generate_dungeon};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use runtime::{FileSessionRepository, RepositoryError, SessionRepository};

fn generated_session(seed: u64) -> Session {
    let templates = EntityTemplates::default();
    let mut player = templates.player().clone();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let map = generate_dungeon(&GenerationParams::default(), &mut player, &templates, &mut rng)
        .expect("default parameters generate");
    let mut session = Session::new(player, map, seed, 64);
    session.log.add_message("saved game", color::WELCOME_TEXT);
    session
}

#[test]
fn save_then_load_restores_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();
    let session = generated_session(42);

    repo.save("savegame.sav", &session).unwrap();

    assert!(repo.exists("savegame.sav"));
    assert_eq!(repo.load("savegame.sav").unwrap(), Some(session));
}

#[test]
fn missing_slot_loads_as_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();

    assert!(!repo.exists("savegame.sav"));
    assert_eq!(repo.load("savegame.sav").unwrap(), None);
}

#[test]
fn save_overwrites_without_leaving_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();

    repo.save("savegame.sav", &generated_session(1)).unwrap();
    let newer = generated_session(2);
    repo.save("savegame.sav", &newer).unwrap();

    assert_eq!(repo.load("savegame.sav").unwrap(), Some(newer));
    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["savegame.sav"]);
}

#[test]
fn creates_missing_save_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profiles").join("default");
    let repo = FileSessionRepository::new(&nested).unwrap();

    repo.save("savegame.sav", &generated_session(3)).unwrap();
    assert!(nested.join("savegame.sav").is_file());
}

#[test]
fn garbage_file_is_reported_as_corrupted() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();
    fs::write(repo.slot_path("savegame.sav"), b"not a save").unwrap();

    let err = repo.load("savegame.sav").unwrap_err();
    assert!(matches!(err, RepositoryError::CorruptedData(_)));
}

#[test]
fn version_mismatch_is_reported_as_corrupted() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();
    repo.save("savegame.sav", &generated_session(4)).unwrap();

    let path = repo.slot_path("savegame.sav");
    let mut bytes = fs::read(&path).unwrap();
    bytes[4..8].copy_from_slice(&(FileSessionRepository::FORMAT_VERSION + 1).to_le_bytes());
    fs::write(&path, bytes).unwrap();

    let err = repo.load("savegame.sav").unwrap_err();
    assert!(err.to_string().contains("unsupported save format version"));
}

#[test]
fn map_size_not_matching_its_tiles_is_reported_as_corrupted() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();
    let session = generated_session(7);
    assert_eq!((session.map.width(), session.map.height()), (80, 43));
    repo.save("savegame.sav", &session).unwrap();

    // Width and height are adjacent little-endian u32s in the encoded map.
    let path = repo.slot_path("savegame.sav");
    let mut bytes = fs::read(&path).unwrap();
    let dims = [80u8, 0, 0, 0, 43, 0, 0, 0];
    let at = bytes
        .windows(dims.len())
        .position(|window| window == dims)
        .expect("encoded map dimensions");
    bytes[at] = 81;
    fs::write(&path, bytes).unwrap();

    let err = repo.load("savegame.sav").unwrap_err();
    assert!(matches!(err, RepositoryError::CorruptedData(_)));
    assert!(err.to_string().contains("81x43 map holds 3440 tiles"));
}

#[test]
fn truncated_body_is_reported_as_corrupted() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileSessionRepository::new(dir.path()).unwrap();
    repo.save("savegame.sav", &generated_session(5)).unwrap();

    let path = repo.slot_path("savegame.sav");
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(
        repo.load("savegame.sav"),
        Err(RepositoryError::CorruptedData(_))
    ));
}
