//! Tests for Engine
//!
//! These tests verify:
//! - Engine lifecycle (open creates the data directory)
//! - Command execution for every command
//! - Persistence across reopen for both storage formats
//! - Rollback when the durable write fails
//! - Concurrent access patterns

use std::sync::Arc;
use std::thread;

use multiverse::config::{Config, StorageFormat};
use multiverse::engine::Engine;
use multiverse::generator::NameBank;
use multiverse::protocol::{Command, Reply, DELETED_MESSAGE};
use multiverse::random::{FixedRandom, ThreadRandom};
use multiverse::storage::MemoryStorage;
use multiverse::store::CharacterQuery;
use multiverse::{Character, CharacterPatch, MultiverseError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_engine() -> (TempDir, Engine) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().data_dir(temp_dir.path()).build();
    let engine = Engine::open(config).unwrap();
    (temp_dir, engine)
}

fn character(id: &str, name: &str, power_level: i64) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        universe: "Tierra-616".to_string(),
        species: "Humano".to_string(),
        origin_planet: "Tierra".to_string(),
        power_level,
        ..Default::default()
    }
}

fn memory_engine(storage: MemoryStorage) -> Engine {
    Engine::with_components(
        Config::default(),
        Box::new(storage),
        Arc::new(ThreadRandom),
        Arc::new(NameBank),
    )
    .unwrap()
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_engine_open_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("mydb");

    let config = Config::builder().data_dir(&data_dir).build();
    let engine = Engine::open(config).unwrap();

    assert!(data_dir.exists());
    assert!(engine.is_empty());
    assert_eq!(engine.data_dir(), data_dir.as_path());
}

#[test]
fn test_engine_open_path_convenience() {
    let temp_dir = TempDir::new().unwrap();

    let engine = Engine::open_path(temp_dir.path()).unwrap();
    engine.create(character("1", "Ana", 10)).unwrap();

    assert!(temp_dir.path().join("db.json").exists());
    assert_eq!(engine.config().storage_format, StorageFormat::Json);
}

#[test]
fn test_engine_corrupt_snapshot_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("characters.snap"), b"not a snapshot").unwrap();

    let config = Config::builder()
        .data_dir(temp_dir.path())
        .storage_format(StorageFormat::Snapshot)
        .build();

    assert!(matches!(
        Engine::open(config),
        Err(MultiverseError::SnapshotCorruption(_))
    ));
}

// =============================================================================
// Command Execution Tests
// =============================================================================

#[test]
fn test_engine_execute_create_and_get() {
    let (_temp, engine) = setup_temp_engine();

    let reply = engine
        .execute(Command::Create {
            character: character("7", "Ana", 40),
        })
        .unwrap();
    assert!(reply.is_created());

    let reply = engine.execute(Command::Get { id: "7".to_string() }).unwrap();
    assert_eq!(reply, Reply::Character(character("7", "Ana", 40)));
}

#[test]
fn test_engine_execute_get_nonexistent() {
    let (_temp, engine) = setup_temp_engine();

    let err = engine.execute(Command::Get { id: "nope".to_string() }).unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_engine_execute_list_preserves_order() {
    let (_temp, engine) = setup_temp_engine();
    for (id, name) in [("3", "C"), ("1", "A"), ("2", "B")] {
        engine.create(character(id, name, 1)).unwrap();
    }

    let Reply::Characters(list) = engine.execute(Command::List).unwrap() else {
        panic!("expected a character list");
    };

    let ids: Vec<_> = list.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}

#[test]
fn test_engine_execute_random() {
    let (_temp, engine) = setup_temp_engine();

    assert!(matches!(
        engine.execute(Command::Random).unwrap_err(),
        MultiverseError::EmptyCollection
    ));

    engine.create(character("1", "Solo", 1)).unwrap();
    let reply = engine.execute(Command::Random).unwrap();
    assert_eq!(reply, Reply::Character(character("1", "Solo", 1)));
}

#[test]
fn test_engine_execute_generate() {
    let (_temp, engine) = setup_temp_engine();

    let Reply::Created(generated) = engine.execute(Command::Generate).unwrap() else {
        panic!("expected a created character");
    };

    assert_eq!(engine.len(), 1);
    assert_eq!(engine.get(&generated.id).unwrap(), generated);
}

#[test]
fn test_engine_execute_query() {
    let (_temp, engine) = setup_temp_engine();
    engine.create(character("1", "Low", 10)).unwrap();
    engine.create(character("2", "High", 90)).unwrap();

    let reply = engine
        .execute(Command::Query {
            query: CharacterQuery::new().power_level_min(50),
        })
        .unwrap();

    assert_eq!(reply, Reply::Characters(vec![character("2", "High", 90)]));
}

#[test]
fn test_engine_execute_update() {
    let (_temp, engine) = setup_temp_engine();
    engine.create(character("1", "Ana", 10)).unwrap();

    let patch = CharacterPatch {
        power_level: Some(99),
        ..Default::default()
    };
    let Reply::Character(updated) = engine
        .execute(Command::Update {
            id: "1".to_string(),
            patch,
        })
        .unwrap()
    else {
        panic!("expected a character");
    };

    assert_eq!(updated.power_level, 99);
    assert_eq!(updated.name, "Ana");
    assert_eq!(engine.get("1").unwrap(), updated);
}

#[test]
fn test_engine_execute_delete() {
    let (_temp, engine) = setup_temp_engine();
    engine.create(character("1", "Ana", 10)).unwrap();

    let reply = engine.execute(Command::Delete { id: "1".to_string() }).unwrap();

    assert_eq!(
        reply,
        Reply::Deleted {
            message: DELETED_MESSAGE.to_string()
        }
    );
    assert!(engine.is_empty());
    assert!(engine
        .execute(Command::Delete { id: "1".to_string() })
        .unwrap_err()
        .is_not_found());
}

#[test]
fn test_engine_execute_stats() {
    let (_temp, engine) = setup_temp_engine();

    assert!(matches!(
        engine.execute(Command::Stats).unwrap_err(),
        MultiverseError::NoData
    ));

    engine.create(character("1", "A", 10)).unwrap();
    engine.create(character("2", "B", 21)).unwrap();

    let Reply::Stats(stats) = engine.execute(Command::Stats).unwrap() else {
        panic!("expected statistics");
    };
    assert_eq!(stats.total, 2);
    assert_eq!(stats.average_power_level, 16);
    assert_eq!(stats.distinct_planet_count, 1);
}

#[test]
fn test_engine_execute_battle() {
    let storage = MemoryStorage::with_characters(vec![
        character("1", "Strong", 80),
        character("2", "Weak", 20),
    ]);
    // rolls: 3 for fighter 1, 20 for fighter 2
    let engine = Engine::with_components(
        Config::default(),
        Box::new(storage),
        Arc::new(FixedRandom::new(vec![3, 20])),
        Arc::new(NameBank),
    )
    .unwrap();

    let Reply::Battle(result) = engine
        .execute(Command::Battle {
            id1: "1".to_string(),
            id2: "2".to_string(),
        })
        .unwrap()
    else {
        panic!("expected a battle result");
    };

    assert_eq!(result.winner.as_deref(), Some("Weak"));
    assert_eq!(result.character2.roll, 20);
}

#[test]
fn test_engine_battle_missing_fighter() {
    let (_temp, engine) = setup_temp_engine();
    engine.create(character("1", "Ana", 10)).unwrap();

    let err = engine
        .execute(Command::Battle {
            id1: "1".to_string(),
            id2: "404".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, MultiverseError::CharacterNotFound(ref id) if id == "404"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

fn assert_survives_reopen(format: StorageFormat) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_dir(temp_dir.path())
        .storage_format(format)
        .build();

    {
        let engine = Engine::open(config.clone()).unwrap();
        engine.create(character("1", "Ana", 10)).unwrap();
        engine.create(character("2", "Bo", 20)).unwrap();
        engine.generate().unwrap();
        engine
            .update(
                "1",
                CharacterPatch {
                    name: Some("Ana Prime".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        engine.delete("2").unwrap();
    }

    let engine = Engine::open(config).unwrap();
    assert_eq!(engine.len(), 2);
    assert_eq!(engine.get("1").unwrap().name, "Ana Prime");
    assert!(engine.get("2").is_err());
    assert!(temp_dir.path().join(format.file_name()).exists());
}

#[test]
fn test_engine_json_survives_reopen() {
    assert_survives_reopen(StorageFormat::Json);
}

#[test]
fn test_engine_snapshot_survives_reopen() {
    assert_survives_reopen(StorageFormat::Snapshot);
}

#[test]
fn test_engine_seeded_generation_is_reproducible() {
    let generate = || {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::builder()
            .data_dir(temp_dir.path())
            .random_seed(Some(2024))
            .build();
        let engine = Engine::open(config).unwrap();
        (engine.generate().unwrap(), engine.generate().unwrap())
    };

    assert_eq!(generate(), generate());
}

#[test]
fn test_engine_failed_write_rolls_back() {
    let storage = MemoryStorage::with_characters(vec![character("1", "Ana", 10)]);
    let engine = memory_engine(storage.clone());

    storage.fail_writes(true);

    assert!(matches!(
        engine.create(character("2", "Bo", 20)),
        Err(MultiverseError::Storage(_))
    ));
    assert!(engine.delete("1").is_err());
    assert!(engine
        .update(
            "1",
            CharacterPatch {
                power_level: Some(1000),
                ..Default::default()
            }
        )
        .is_err());

    assert_eq!(engine.list(), vec![character("1", "Ana", 10)]);
    assert_eq!(storage.save_count(), 0);

    storage.fail_writes(false);
    engine.create(character("2", "Bo", 20)).unwrap();
    assert_eq!(storage.saved().len(), 2);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_engine_concurrent_reads() {
    let storage = MemoryStorage::with_characters(
        (0..50)
            .map(|i| character(&i.to_string(), &format!("Hero {}", i), i))
            .collect(),
    );
    let engine = Arc::new(memory_engine(storage));

    let mut handles = vec![];
    for t in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                let id = ((i + t) % 50).to_string();
                assert_eq!(engine_clone.get(&id).unwrap().id, id);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_engine_concurrent_writes() {
    let storage = MemoryStorage::new();
    let engine = Arc::new(memory_engine(storage.clone()));

    let mut handles = vec![];
    for t in 0..4 {
        let engine_clone = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                let id = format!("{}-{}", t, i);
                engine_clone.create(character(&id, "Writer", i)).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(engine.len(), 100);
    assert_eq!(storage.save_count(), 100);
    assert_eq!(storage.saved().len(), 100);
}
