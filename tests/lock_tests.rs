mod common;
use common::{pid, temp_store};
use statlog::errors::AppError;
use std::fs;

#[test]
fn test_lock_starts_unlocked() {
    let (_dir, store) = temp_store();
    assert_eq!(store.lock.read(), None);
}

#[test]
fn test_lock_is_exclusive() {
    let (_dir, store) = temp_store();
    let (a, b) = (pid("A"), pid("B"));

    store.lock.acquire(&a).unwrap();
    let err = store.lock.acquire(&b).unwrap_err();

    assert!(matches!(err, AppError::LockHeldByOther(ref holder) if holder == "A"));
    assert_eq!(store.lock.read().as_deref(), Some("A"));
}

#[test]
fn test_lock_reacquire_by_holder_succeeds() {
    let (_dir, store) = temp_store();
    let a = pid("A");

    store.lock.acquire(&a).unwrap();
    store.lock.acquire(&a).unwrap();
    assert!(store.lock.is_held_by(&a));
}

#[test]
fn test_release_is_idempotent() {
    let (_dir, store) = temp_store();

    store.lock.release().unwrap();
    assert_eq!(store.lock.read(), None);

    store.lock.acquire(&pid("A")).unwrap();
    store.lock.release().unwrap();
    store.lock.release().unwrap();
    assert_eq!(store.lock.read(), None);
    assert!(!store.layout.lock_file().exists());
}

#[test]
fn test_lock_file_is_one_line_with_holder() {
    let (_dir, store) = temp_store();
    store.lock.acquire(&pid("proj one")).unwrap();

    assert_eq!(fs::read_to_string(store.layout.lock_file()).unwrap(), "proj one\n");
}

#[test]
fn test_blank_lock_file_reads_unlocked() {
    let (_dir, store) = temp_store();
    fs::write(store.layout.lock_file(), "  \n").unwrap();

    assert_eq!(store.lock.read(), None);
    store.lock.acquire(&pid("B")).unwrap();
    assert_eq!(store.lock.read().as_deref(), Some("B"));
}

#[test]
fn test_lock_holder_read_back_verbatim() {
    let (_dir, store) = temp_store();
    let id = pid("two words");

    store.lock.acquire(&id).unwrap();
    assert!(store.lock.is_held_by(&id));
    assert_eq!(fs::read_to_string(store.layout.lock_file()).unwrap(), "two words\n");

    fs::write(store.layout.lock_file(), "two words\r\n").unwrap();
    assert!(store.lock.is_held_by(&id));
}

#[test]
fn test_pointer_forgets_vanished_project() {
    let (_dir, store) = temp_store();
    let id = pid("gone");

    fs::write(store.log.path(&id), "").unwrap();
    store.pointer.set(&id).unwrap();
    assert_eq!(store.pointer.read().unwrap(), Some(id.clone()));

    fs::remove_file(store.log.path(&id)).unwrap();
    assert_eq!(store.pointer.read().unwrap(), None);
    assert!(!store.layout.running_file().exists());
}

#[test]
fn test_pointer_is_independent_of_lock() {
    let (_dir, store) = temp_store();
    let (open, running) = (pid("open"), pid("running"));
    fs::write(store.log.path(&open), "").unwrap();

    store.pointer.set(&open).unwrap();
    store.lock.acquire(&running).unwrap();

    let status = store.status().unwrap();
    assert_eq!(status.active, Some(open));
    assert_eq!(status.checked_in.as_deref(), Some("running"));

    store.pointer.clear().unwrap();
    assert_eq!(store.lock.read().as_deref(), Some("running"));
}
