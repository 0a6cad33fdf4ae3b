//! Integration test: high score file persistence

use flappy::score_store::{FileScoreStore, ScoreStore};
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("flappy-it-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_high_score_never_decreases() {
    let store = FileScoreStore::at(temp_path("monotonic"));
    store.write(5).expect("write failed");
    store.write(3).expect("write failed");
    assert_eq!(store.read(), 5);
}

#[test]
fn test_missing_storage_reads_zero() {
    let store = FileScoreStore::at(temp_path("never-written"));
    assert_eq!(store.read(), 0);
}

#[test]
fn test_value_survives_new_store_instance() {
    let path = temp_path("reopen");
    FileScoreStore::at(&path).write(77).expect("write failed");
    assert_eq!(FileScoreStore::at(&path).read(), 77);
}

#[test]
fn test_write_creates_parent_directory() {
    let path = temp_path("nested").with_file_name("nested-dir").join("highscore");
    let _ = fs::remove_dir_all(path.parent().expect("has parent"));
    let store = FileScoreStore::at(&path);
    assert!(store.write(1).expect("write failed"));
    assert_eq!(store.read(), 1);
}

#[test]
fn test_trailing_newline_is_accepted() {
    let path = temp_path("newline");
    fs::write(&path, "1500\n").expect("Failed to write file");
    assert_eq!(FileScoreStore::at(&path).read(), 1500);
}
