//! Tests for the storage backends
//!
//! These tests verify:
//! - Missing files load as empty collections
//! - Save/load round trips for JSON and snapshot files
//! - Loading the older Spanish-keyed data file
//! - Snapshot corruption detection (magic, version, length, CRC)
//! - Backend selection from Config

use std::fs;
use std::path::PathBuf;

use multiverse::config::{Config, StorageFormat};
use multiverse::storage::{open_storage, JsonFileStorage, SnapshotStorage, Storage};
use multiverse::{Character, MultiverseError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().to_path_buf();
    (temp_dir, path)
}

fn sample_characters() -> Vec<Character> {
    vec![
        Character {
            id: "1001".to_string(),
            name: "Ana".to_string(),
            universe: "Dimensión Fantasma".to_string(),
            species: "Entidad dimensional".to_string(),
            origin_planet: "Saturno Prime".to_string(),
            power_level: 64,
            abilities: vec!["Magia arcana".to_string(), "Vuelo".to_string()],
            allies: vec!["Leo".to_string(), "Leo".to_string()],
            enemies: vec!["Ortega".to_string()],
            epic_phrase: "¡Mi poder no conoce límites!".to_string(),
            avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
        },
        Character {
            id: "1001".to_string(),
            name: "Duplicate".to_string(),
            power_level: -3,
            ..Default::default()
        },
    ]
}

// =============================================================================
// JSON Backend Tests
// =============================================================================

#[test]
fn test_json_missing_file_is_empty() {
    let (_temp, dir) = setup_temp_dir();
    let storage = JsonFileStorage::new(dir.join("db.json"));

    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_json_save_and_load() {
    let (_temp, dir) = setup_temp_dir();
    let storage = JsonFileStorage::new(dir.join("db.json"));
    let characters = sample_characters();

    storage.save(&characters).unwrap();

    assert_eq!(storage.load().unwrap(), characters);
}

#[test]
fn test_json_document_layout() {
    let (_temp, dir) = setup_temp_dir();
    let path = dir.join("db.json");
    let storage = JsonFileStorage::new(&path);

    storage.save(&sample_characters()).unwrap();

    let doc: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["characters"].as_array().unwrap().len(), 2);
    assert_eq!(doc["characters"][0]["originPlanet"], "Saturno Prime");
    assert_eq!(doc["characters"][0]["powerLevel"], 64);
}

#[test]
fn test_json_save_overwrites_entire_collection() {
    let (_temp, dir) = setup_temp_dir();
    let storage = JsonFileStorage::new(dir.join("db.json"));

    storage.save(&sample_characters()).unwrap();
    storage.save(&[]).unwrap();

    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_json_loads_legacy_layout() {
    let (_temp, dir) = setup_temp_dir();
    let path = dir.join("db.json");
    fs::write(
        &path,
        r#"{
          "personajes": [
            {
              "id": "4821",
              "nombre": "Lucía",
              "universo": "Neo-Zion",
              "especie": "Cyborg",
              "planetaOrigen": "Zebes",
              "nivelPoder": 73,
              "habilidades": ["Tecnopatía", "Vuelo"],
              "aliados": ["Eva", "Hugo"],
              "enemigos": ["Salazar"],
              "fraseEpica": "Solo yo puedo cambiar el destino.",
              "imagen": "https://avatars.githubusercontent.com/u/9"
            }
          ]
        }"#,
    )
    .unwrap();

    let loaded = JsonFileStorage::new(&path).load().unwrap();

    assert_eq!(loaded.len(), 1);
    let c = &loaded[0];
    assert_eq!(c.id, "4821");
    assert_eq!(c.name, "Lucía");
    assert_eq!(c.origin_planet, "Zebes");
    assert_eq!(c.power_level, 73);
    assert_eq!(c.abilities, vec!["Tecnopatía", "Vuelo"]);
    assert_eq!(c.avatar_url, "https://avatars.githubusercontent.com/u/9");
}

#[test]
fn test_json_empty_file_is_empty() {
    let (_temp, dir) = setup_temp_dir();
    let path = dir.join("db.json");
    fs::write(&path, "  \n").unwrap();

    assert!(JsonFileStorage::new(&path).load().unwrap().is_empty());
}

#[test]
fn test_json_malformed_file_errors() {
    let (_temp, dir) = setup_temp_dir();
    let path = dir.join("db.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStorage::new(&path).load().unwrap_err();

    assert!(matches!(err, MultiverseError::Serialization(_)));
}

// =============================================================================
// Snapshot Backend Tests
// =============================================================================

#[test]
fn test_snapshot_missing_file_is_empty() {
    let (_temp, dir) = setup_temp_dir();

    assert!(SnapshotStorage::new(dir.join("characters.snap"))
        .load()
        .unwrap()
        .is_empty());
}

#[test]
fn test_snapshot_save_and_load() {
    let (_temp, dir) = setup_temp_dir();
    let storage = SnapshotStorage::new(dir.join("characters.snap"));
    let characters = sample_characters();

    storage.save(&characters).unwrap();

    assert_eq!(storage.load().unwrap(), characters);
}

#[test]
fn test_snapshot_header() {
    let bytes = SnapshotStorage::encode(&sample_characters()).unwrap();

    assert_eq!(&bytes[0..4], b"MVRS");
    assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 1);
    let mut count = [0u8; 8];
    count.copy_from_slice(&bytes[6..14]);
    assert_eq!(u64::from_le_bytes(count), 2);
}

#[test]
fn test_snapshot_empty_collection() {
    let bytes = SnapshotStorage::encode(&[]).unwrap();

    assert!(SnapshotStorage::decode(&bytes).unwrap().is_empty());
}

#[test]
fn test_snapshot_detects_payload_corruption() {
    let mut bytes = SnapshotStorage::encode(&sample_characters()).unwrap();
    let mid = 18 + (bytes.len() - 22) / 2;
    bytes[mid] ^= 0xFF;

    let err = SnapshotStorage::decode(&bytes).unwrap_err();

    assert!(matches!(err, MultiverseError::SnapshotCorruption(ref msg) if msg.contains("CRC")));
}

#[test]
fn test_snapshot_detects_bad_magic() {
    let mut bytes = SnapshotStorage::encode(&sample_characters()).unwrap();
    bytes[0] = b'X';

    assert!(matches!(
        SnapshotStorage::decode(&bytes).unwrap_err(),
        MultiverseError::SnapshotCorruption(_)
    ));
}

#[test]
fn test_snapshot_detects_unknown_version() {
    let mut bytes = SnapshotStorage::encode(&sample_characters()).unwrap();
    bytes[4] = 9;

    let err = SnapshotStorage::decode(&bytes).unwrap_err();

    assert!(err.to_string().contains("version"));
}

#[test]
fn test_snapshot_detects_truncation() {
    let bytes = SnapshotStorage::encode(&sample_characters()).unwrap();

    assert!(SnapshotStorage::decode(&bytes[..bytes.len() - 1]).is_err());
    assert!(SnapshotStorage::decode(&bytes[..10]).is_err());
}

#[test]
fn test_snapshot_file_corruption_on_load() {
    let (_temp, dir) = setup_temp_dir();
    let path = dir.join("characters.snap");
    let storage = SnapshotStorage::new(&path);
    storage.save(&sample_characters()).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    fs::write(&path, bytes).unwrap();

    assert!(matches!(
        storage.load().unwrap_err(),
        MultiverseError::SnapshotCorruption(_)
    ));
}

// =============================================================================
// Backend Selection Tests
// =============================================================================

#[test]
fn test_open_storage_creates_data_dir() {
    let (_temp, dir) = setup_temp_dir();
    let data_dir = dir.join("nested").join("data");
    let config = Config::builder().data_dir(&data_dir).build();

    let storage = open_storage(&config).unwrap();

    assert!(data_dir.is_dir());
    assert!(storage.describe().starts_with("json:"));
}

#[test]
fn test_open_storage_snapshot() {
    let (_temp, dir) = setup_temp_dir();
    let config = Config::builder()
        .data_dir(&dir)
        .storage_format(StorageFormat::Snapshot)
        .build();

    let storage = open_storage(&config).unwrap();
    storage.save(&sample_characters()).unwrap();

    assert!(dir.join("characters.snap").exists());
    assert!(!dir.join("db.json").exists());
}
