use std::io::Write;

use rpm_get_cache::{CacheStore, Error};
use tempfile::tempdir;

fn staging_files(store: &CacheStore) -> Vec<String> {
    std::fs::read_dir(store.root())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with('.'))
        .collect()
}

#[test]
fn test_commit_places_entry() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path().join("rpm-get"));

    let staged = store.stage().unwrap();
    staged.reopen().unwrap().write_all(b"artifact").unwrap();
    let path = store.commit(staged, "pkg-1.0.rpm").unwrap();

    assert_eq!(path, store.path_for("pkg-1.0.rpm"));
    assert!(store.exists("pkg-1.0.rpm"));
    assert_eq!(std::fs::read(&path).unwrap(), b"artifact");
    assert!(staging_files(&store).is_empty());
}

#[test]
fn test_commit_replaces_existing_entry_whole() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    std::fs::write(store.path_for("release.json"), "old").unwrap();

    let staged = store.stage().unwrap();
    staged.reopen().unwrap().write_all(b"new content").unwrap();
    store.commit(staged, "release.json").unwrap();

    assert_eq!(std::fs::read(store.path_for("release.json")).unwrap(), b"new content");
}

#[test]
fn test_abandoned_stage_leaves_entry_untouched() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    std::fs::write(store.path_for("keep.rpm"), "original").unwrap();

    {
        let staged = store.stage().unwrap();
        staged.reopen().unwrap().write_all(b"half of a new").unwrap();
    }

    assert_eq!(std::fs::read(store.path_for("keep.rpm")).unwrap(), b"original");
    assert!(staging_files(&store).is_empty());
}

#[test]
fn test_abandoned_stage_fresh_key_stays_absent() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());

    {
        let staged = store.stage().unwrap();
        staged.reopen().unwrap().write_all(b"partial").unwrap();
    }

    assert!(!store.exists("fresh.rpm"));
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn test_stage_fails_when_root_is_file() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("rpm-get");
    std::fs::write(&root, "not a dir").unwrap();

    let err = CacheStore::new(&root).stage().unwrap_err();
    assert!(matches!(err, Error::NotADirectory { .. }));
    assert_eq!(err.path(), root.as_path());
}

#[test]
fn test_sha256_of_entry() {
    let dir = tempdir().unwrap();
    let store = CacheStore::new(dir.path());
    std::fs::write(store.path_for("hello"), "hello world").unwrap();

    assert_eq!(
        store.sha256("hello").unwrap(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}
