//! FileStore behavior against a real filesystem.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicU32, Ordering};

use tally_core::store::CounterStore;
use tally_server::storage::FileStore;

static NEXT_FILE: AtomicU32 = AtomicU32::new(0);

fn temp_path() -> PathBuf {
    let n = NEXT_FILE.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("tally-file-store-{}-{n}.txt", process::id()))
}

#[tokio::test]
async fn missing_file_is_a_storage_error() {
    let store = FileStore::new(temp_path());
    let err = store.load().await.expect_err("must fail");
    assert!(err.is_storage());
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let path = temp_path();
    let store = FileStore::new(&path);

    store.save(41).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(41));

    // Stored form is the bare decimal string, no trailing delimiter.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "41");

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn garbage_content_is_not_a_value() {
    let path = temp_path();
    std::fs::write(&path, "not-a-number").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.load().await.unwrap(), None);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn save_truncates_longer_values() {
    let path = temp_path();
    let store = FileStore::new(&path);

    // 100 then 7 must leave exactly "7", not "700".
    store.save(100).await.unwrap();
    store.save(7).await.unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "7");

    let _ = std::fs::remove_file(&path);
}

#[cfg(unix)]
#[tokio::test]
async fn created_file_mode_is_conservative() {
    use std::os::unix::fs::PermissionsExt;

    let path = temp_path();
    let store = FileStore::new(&path);
    store.save(1).await.unwrap();

    // Creation mode is 0644 before umask: owner rw, nobody else writable,
    // nothing executable.
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o700, 0o600);
    assert_eq!(mode & 0o022, 0);
    assert_eq!(mode & 0o111, 0);

    let _ = std::fs::remove_file(&path);
}
