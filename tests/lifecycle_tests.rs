mod common;
use common::{pid, read_raw_log, temp_store};
use statlog::core::calculator::compute_total_minutes;
use statlog::core::comments::CommentLogic;
use statlog::core::lifecycle::LifecycleLogic;
use statlog::errors::AppError;
use statlog::models::event_kind::EventKind;

#[test]
fn test_end_to_end_session() {
    let (_dir, store) = temp_store();

    let p1 = LifecycleLogic::create(&store, "proj1").unwrap();
    let raw = read_raw_log(&store, &p1);
    assert_eq!(raw.lines().count(), 1);
    assert!(raw.contains("\tcreated\t"));
    assert_eq!(store.pointer.read().unwrap(), Some(p1.clone()));

    LifecycleLogic::check_in(&store, &p1).unwrap();
    assert_eq!(store.lock.read().as_deref(), Some("proj1"));

    let err = LifecycleLogic::create(&store, "proj2").unwrap_err();
    assert!(matches!(err, AppError::LockHeldByOther(ref h) if h == "proj1"));
    assert!(!store.log.exists(&pid("proj2")));

    let added = CommentLogic::add(&store, &p1, "  hello ").unwrap().unwrap();
    assert_eq!(added.payload, "hello");

    LifecycleLogic::check_out(&store, &p1).unwrap();
    assert_eq!(store.lock.read(), None);

    let events = store.log.read_all(&p1).unwrap();
    let kinds: Vec<EventKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Created,
            EventKind::CheckIn,
            EventKind::Comment,
            EventKind::CheckOut
        ]
    );

    let expected = (events[3].timestamp - events[1].timestamp).num_seconds() / 60;
    assert_eq!(compute_total_minutes(&events), expected);

    let view = LifecycleLogic::open(&store, &p1).unwrap();
    assert_eq!(view.total_minutes, expected);
    assert_eq!(view.status, EventKind::CheckOut);
    assert_eq!(view.current_comment().map(|c| c.payload.as_str()), Some("hello"));
}

#[test]
fn test_create_trims_padded_id() {
    let (_dir, store) = temp_store();

    let id = LifecycleLogic::create(&store, " padded ").unwrap();
    assert_eq!(id.as_str(), "padded");
    assert!(store.log.exists(&id));
    assert_eq!(store.pointer.read().unwrap(), Some(id.clone()));

    LifecycleLogic::check_in(&store, &id).unwrap();
    assert!(store.lock.is_held_by(&id));

    LifecycleLogic::check_out(&store, &id).unwrap();
    assert_eq!(store.lock.read(), None);
    assert_eq!(store.pointer.read().unwrap(), Some(id.clone()));

    // the lock is free again for the next project
    LifecycleLogic::create(&store, "next").unwrap();
}

#[test]
fn test_create_validates_id() {
    let (_dir, store) = temp_store();

    for bad in ["", "a/b", "tab\tid", "line\nbreak"] {
        let err = LifecycleLogic::create(&store, bad).unwrap_err();
        assert!(matches!(err, AppError::InvalidId(_)), "{bad:?} accepted");
    }
}

#[test]
fn test_create_rejects_existing_and_archived_ids() {
    let (_dir, store) = temp_store();

    let id = LifecycleLogic::create(&store, "dup").unwrap();
    assert!(matches!(
        LifecycleLogic::create(&store, "dup"),
        Err(AppError::AlreadyExists(_))
    ));

    LifecycleLogic::archive(&store, &id).unwrap();
    assert!(matches!(
        LifecycleLogic::create(&store, "dup"),
        Err(AppError::AlreadyExists(_))
    ));
}

#[test]
fn test_session_end_requires_the_lock() {
    let (_dir, store) = temp_store();
    let a = LifecycleLogic::create(&store, "a").unwrap();
    let b = LifecycleLogic::create(&store, "b").unwrap();

    LifecycleLogic::check_in(&store, &a).unwrap();

    for kind in [EventKind::CheckOut, EventKind::Finish, EventKind::Cancel] {
        let err = LifecycleLogic::apply(&store, &b, kind).unwrap_err();
        assert!(matches!(err, AppError::NotCheckedIn(_)));
    }
    assert!(matches!(
        LifecycleLogic::check_in(&store, &b),
        Err(AppError::LockHeldByOther(_))
    ));
    assert_eq!(store.log.read_all(&b).unwrap().len(), 1);

    LifecycleLogic::finish(&store, &a).unwrap();
    assert_eq!(store.lock.read(), None);
    assert_eq!(store.log.read_all(&a).unwrap().last().unwrap().kind, EventKind::Finish);
}

#[test]
fn test_lifecycle_on_unknown_project() {
    let (_dir, store) = temp_store();
    let ghost = pid("ghost");

    assert!(matches!(LifecycleLogic::check_in(&store, &ghost), Err(AppError::NotFound(_))));
    assert!(matches!(LifecycleLogic::archive(&store, &ghost), Err(AppError::NotFound(_))));
    assert!(matches!(LifecycleLogic::delete(&store, &ghost), Err(AppError::NotFound(_))));
    assert!(matches!(LifecycleLogic::open(&store, &ghost), Err(AppError::NotFound(_))));
    assert_eq!(store.lock.read(), None);
}

#[test]
fn test_archive_clears_lock_and_pointer() {
    let (_dir, store) = temp_store();
    let p1 = LifecycleLogic::create(&store, "proj1").unwrap();
    LifecycleLogic::check_in(&store, &p1).unwrap();

    LifecycleLogic::archive(&store, &p1).unwrap();

    assert_eq!(store.lock.read(), None);
    assert_eq!(store.pointer.read().unwrap(), None);
    assert!(!store.log.path(&p1).exists());
    assert!(store.layout.archived_log_file(&p1).exists());
}

#[test]
fn test_archive_keeps_other_holder() {
    let (_dir, store) = temp_store();
    let keep = LifecycleLogic::create(&store, "keep").unwrap();
    let old = LifecycleLogic::create(&store, "old").unwrap();
    LifecycleLogic::check_in(&store, &keep).unwrap();

    LifecycleLogic::archive(&store, &old).unwrap();

    assert_eq!(store.lock.read().as_deref(), Some("keep"));
}

#[test]
fn test_delete_removes_log_and_state() {
    let (_dir, store) = temp_store();
    let p = LifecycleLogic::create(&store, "temp").unwrap();
    LifecycleLogic::check_in(&store, &p).unwrap();

    LifecycleLogic::delete(&store, &p).unwrap();

    assert!(!store.log.exists(&p));
    assert!(!store.layout.archived_log_file(&p).exists());
    assert_eq!(store.lock.read(), None);
    assert_eq!(store.pointer.read().unwrap(), None);
}

#[test]
fn test_comments_need_the_lock() {
    let (_dir, store) = temp_store();
    let p = LifecycleLogic::create(&store, "p").unwrap();

    assert!(matches!(
        CommentLogic::add(&store, &p, "too early"),
        Err(AppError::NotCheckedIn(_))
    ));

    LifecycleLogic::check_in(&store, &p).unwrap();
    let c = CommentLogic::add(&store, &p, "ok now").unwrap().unwrap();
    LifecycleLogic::check_out(&store, &p).unwrap();

    assert!(matches!(
        CommentLogic::delete(&store, &p, &c),
        Err(AppError::NotCheckedIn(_))
    ));
    assert_eq!(CommentLogic::list(&store, &p).unwrap().len(), 1);
}

#[test]
fn test_blank_and_delimiter_comments() {
    let (_dir, store) = temp_store();
    let p = LifecycleLogic::create(&store, "p").unwrap();
    LifecycleLogic::check_in(&store, &p).unwrap();

    assert!(CommentLogic::add(&store, &p, "   ").unwrap().is_none());
    assert!(matches!(
        CommentLogic::add(&store, &p, "a\tb"),
        Err(AppError::InvalidComment(_))
    ));
    assert!(matches!(
        CommentLogic::add(&store, &p, "two\nlines"),
        Err(AppError::InvalidComment(_))
    ));
    assert!(CommentLogic::list(&store, &p).unwrap().is_empty());
}

#[test]
fn test_delete_chosen_comment() {
    let (_dir, store) = temp_store();
    let p = LifecycleLogic::create(&store, "p").unwrap();
    LifecycleLogic::check_in(&store, &p).unwrap();

    CommentLogic::add(&store, &p, "first").unwrap();
    CommentLogic::add(&store, &p, "second").unwrap();

    let comments = CommentLogic::list(&store, &p).unwrap();
    assert_eq!(comments.len(), 2);
    assert!(CommentLogic::delete(&store, &p, &comments[0]).unwrap());

    let left = CommentLogic::list(&store, &p).unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].payload, "second");
    assert_eq!(store.log.read_all(&p).unwrap().len(), 3);
}

#[test]
fn test_journal_records_operations() {
    let (_dir, store) = temp_store();
    let p = LifecycleLogic::create(&store, "p").unwrap();
    LifecycleLogic::check_in(&store, &p).unwrap();
    LifecycleLogic::cancel(&store, &p).unwrap();

    let ops: Vec<String> = store
        .journal
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert_eq!(ops, vec!["create", "checkin", "cancel"]);
}
