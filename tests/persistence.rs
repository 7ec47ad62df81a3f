mod common;

use addressbook::prelude::{ContactStore, ProtoStore};
use common::{Workspace, create_input};
use predicates::prelude::*;
use std::fs;

#[test]
fn first_run_creates_empty_database() {
    let ws = Workspace::new();
    assert!(!ws.db_path().exists());

    ws.addressbook()
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact yet"));

    assert!(ws.db_path().exists());
    assert_eq!(fs::read(ws.db_path()).unwrap().len(), 0);
}

#[test]
fn closing_input_without_quit_discards_changes() {
    let ws = Workspace::new();

    ws.addressbook()
        .write_stdin(create_input("Ada", "ada@x", "555-0100", 0))
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!").not());

    let store = ProtoStore::new(ws.db_path().to_str().unwrap()).unwrap();
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn saved_database_is_readable_protobuf() {
    let ws = Workspace::new();

    let mut input = create_input("Ada", "ada@x", "555-0100", 0);
    input.push_str(&create_input("Linus", "linus@kernel.org", "555-0102", 2));
    input.push_str("5\n");
    ws.addressbook().write_stdin(input).assert().success();

    let store = ProtoStore::new(ws.db_path().to_str().unwrap()).unwrap();
    let book = store.load().unwrap();

    assert_eq!(book.len(), 2);
    assert_eq!(book.get(1).unwrap().name, "Linus");
    assert_eq!(book.get(1).unwrap().phones[0].number, "555-0102");
}

#[test]
fn corrupt_database_is_fatal() {
    let ws = Workspace::new();
    fs::write(ws.db_path(), b"\x0a\xff\xff").unwrap();

    let assert = ws
        .addressbook()
        .write_stdin("5\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Welcome").not())
        .stderr(predicate::str::contains(
            "Error: failed to decode address book database",
        ));

    // The diagnostic is reported once
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert_eq!(stderr.matches("failed to decode address book database").count(), 1);
}

#[test]
fn db_path_flag_overrides_environment() {
    let ws = Workspace::new();
    let other = ws.path().join("nested").join("other.db");

    ws.addressbook()
        .args(["--db-path", other.to_str().unwrap()])
        .write_stdin("5\n")
        .assert()
        .success();

    assert!(other.exists());
    assert!(!ws.db_path().exists());
}

#[test]
fn mem_storage_never_touches_disk() {
    let ws = Workspace::new();

    let mut input = create_input("Ada", "ada@x", "555-0100", 0);
    input.push_str("5\n");

    ws.addressbook()
        .args(["--storage", "mem"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Goodbye!\n"));

    assert!(!ws.db_path().exists());
}
