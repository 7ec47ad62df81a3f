mod common;

use common::{Workspace, create_input};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn seed(ws: &Workspace) {
    let mut input = create_input("Ada", "ada@x", "555-0100", 0);
    input.push_str(&create_input("Grace", "grace@navy.mil", "555-0101", 2));
    input.push_str("5\n");
    ws.addressbook().write_stdin(input).assert().success();
}

#[test]
fn exports_contacts_to_json() {
    let ws = Workspace::new();
    seed(&ws);
    let target = ws.path().join("contacts.json");

    ws.addressbook()
        .args(["export", "--des", target.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully exported 2 contacts to"));

    let value: Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(value[1]["id"], 1);
    assert_eq!(value[1]["name"], "Grace");
    assert_eq!(value[1]["phones"][0]["type"], "Work");
}

#[test]
fn exports_contacts_to_csv_default_location() {
    let ws = Workspace::new();
    seed(&ws);

    ws.addressbook()
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully exported 2 contacts to"));

    let csv = fs::read_to_string(ws.path().join("export").join("addressbook.csv")).unwrap();
    assert_eq!(
        csv,
        "id,name,email,number,type\n\
         0,Ada,ada@x,555-0100,Mobile\n\
         1,Grace,grace@navy.mil,555-0101,Work\n"
    );
}

#[test]
fn export_rejects_wrong_extension() {
    let ws = Workspace::new();
    seed(&ws);

    ws.addressbook()
        .args(["export", "--format", "csv", "--des", "contacts.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Export file must be a .csv file"));
}
