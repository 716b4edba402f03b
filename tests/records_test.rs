//! Integration test: game records persistence.

use std::fs;
use wargame::records::{GameRecords, RecordManager};

fn manager_in(dir: &tempfile::TempDir) -> RecordManager {
    RecordManager::at_path(dir.path().join("records.dat"))
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = manager_in(&dir);

    let mut records = GameRecords::default();
    records.record_game(true, 5);
    records.record_game(false, 2);

    manager.save(&records).expect("save records");
    let loaded = manager.load().expect("load records");
    assert_eq!(loaded, records);
    assert_eq!(loaded.games_played, 2);
    assert_eq!(loaded.games_won, 1);
    assert_eq!(loaded.huts_acquired, 7);
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = tempfile::tempdir().expect("temp dir");
    let manager = manager_in(&dir);

    assert!(manager.load().is_err());
    assert_eq!(manager.load_or_default(), GameRecords::default());
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("records.dat");
    let manager = RecordManager::at_path(path.clone());

    let mut records = GameRecords::default();
    records.record_game(true, 5);
    manager.save(&records).expect("save records");

    // Flip one byte inside the serialized payload.
    let mut bytes = fs::read(&path).expect("read saved file");
    let target = bytes.len() / 2;
    bytes[target] ^= 0xFF;
    fs::write(&path, bytes).expect("write corrupted file");

    assert!(manager.load().is_err(), "checksum should catch the flip");
    assert_eq!(manager.load_or_default(), GameRecords::default());
}

#[test]
fn test_wrong_magic_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("records.dat");
    let manager = RecordManager::at_path(path.clone());

    manager.save(&GameRecords::default()).expect("save records");

    let mut bytes = fs::read(&path).expect("read saved file");
    bytes[0] ^= 0xFF;
    fs::write(&path, bytes).expect("write corrupted file");

    assert!(manager.load().is_err());
}

#[test]
fn test_record_game_stamps_the_time() {
    let mut records = GameRecords::default();
    assert_eq!(records.last_played_epoch, 0);
    records.record_game(true, 5);
    assert!(records.last_played_epoch > 0);
    assert!(records.summary().contains("won: 1"));
}
