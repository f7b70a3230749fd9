//! Sessions backed by a data directory: every mutation must survive a
//! restart, in order, and a damaged store must not take the app down.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use todo_panel::bridge::LocalBridge;
use todo_panel::bridge::local::STORAGE_FILE;
use todo_panel::io::recovery::recovery_log_path;
use todo_panel::model::TodoDraft;
use todo_panel::session::{Session, SessionError};

fn open(dir: &Path) -> (Session, Vec<String>) {
    Session::load(Box::new(LocalBridge::open(dir).unwrap()))
}

fn titles(session: &Session) -> Vec<String> {
    session
        .todos()
        .as_slice()
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

#[test]
fn mutations_survive_reopen() {
    let tmp = TempDir::new().unwrap();

    let (mut session, notices) = open(tmp.path());
    assert!(notices.is_empty());
    assert!(session.todos().is_empty());

    let milk = session.add(&TodoDraft::new("Buy milk", "2%")).unwrap();
    let call = session.add(&TodoDraft::new("Call mom", "")).unwrap();
    session.add(&TodoDraft::new("Pay rent", "by Friday")).unwrap();
    assert!(
        session
            .update(&milk, &TodoDraft::new("Buy oat milk", "2%\nno sugar"))
            .unwrap()
    );
    assert!(session.delete(&call).unwrap());
    drop(session);

    let (session, notices) = open(tmp.path());
    assert!(notices.is_empty());
    assert_eq!(titles(&session), vec!["Buy oat milk", "Pay rent"]);

    let milk = session.todos().get(&milk).unwrap();
    assert_eq!(milk.text, "2%\nno sugar");
}

#[test]
fn ids_and_timestamps_are_stable_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let (mut session, _) = open(tmp.path());
    let id = session.add(&TodoDraft::new("Water plants", "")).unwrap();
    let created = session.todos().get(&id).unwrap().created_at;
    session
        .update(&id, &TodoDraft::new("Water the plants", ""))
        .unwrap();
    drop(session);

    let (session, _) = open(tmp.path());
    let todo = session.todos().get(&id).unwrap();
    assert_eq!(todo.created_at, created);
    assert_eq!(todo.title, "Water the plants");
}

#[test]
fn rejected_title_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let (mut session, _) = open(tmp.path());

    let err = session.add(&TodoDraft::new("   ", "body")).unwrap_err();
    assert!(matches!(err, SessionError::Invalid(_)));
    assert!(!tmp.path().join(STORAGE_FILE).exists());
}

#[test]
fn unreadable_list_starts_empty_and_is_kept() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(STORAGE_FILE),
        r#"{"todos": "[{\"id\": \"broken\""}"#,
    )
    .unwrap();

    let (mut session, notices) = open(tmp.path());
    assert!(session.todos().is_empty());
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("recovery.log"));

    let log = fs::read_to_string(recovery_log_path(tmp.path())).unwrap();
    assert!(log.contains("{\"id\": \"broken\""));

    // The app keeps working on top of the damaged store
    session.add(&TodoDraft::new("Start over", "")).unwrap();
    drop(session);
    let (session, notices) = open(tmp.path());
    assert!(notices.is_empty());
    assert_eq!(titles(&session), vec!["Start over"]);
}

#[test]
fn profile_comes_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("todo.toml"),
        r#"
[profile]
id = 7
first_name = "Anna"
last_name = "Smirnova"

[profile.city]
title = "Kazan"
"#,
    )
    .unwrap();

    let (session, notices) = open(tmp.path());
    assert!(notices.is_empty());
    let profile = session.profile().unwrap();
    assert_eq!(profile.full_name(), "Anna Smirnova");
    assert_eq!(profile.city_title(), Some("Kazan"));
}
