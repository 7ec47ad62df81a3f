mod common;

use common::{Workspace, create_input};
use predicates::prelude::*;

#[test]
fn deleting_contacts() {
    let ws = Workspace::new();

    let mut input = String::new();
    input.push_str(&create_input("Patricia", "patricia@example.net", "08066809241", 0));
    input.push_str(&create_input("Diane", "diane@gmail.com", "08064879199", 1));
    input.push_str(&create_input("John", "john@turner.com", "08046516806", 2));
    input.push_str("3\n1\n4\n5\n");

    ws.addressbook()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 has been deleted"))
        .stdout(predicate::str::contains("0 - Patricia"))
        .stdout(predicate::str::contains("1 - John"));

    ws.addressbook()
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 - Patricia"))
        .stdout(predicate::str::contains("1 - John"))
        .stdout(predicate::str::contains("Diane").not())
        .stdout(predicate::str::contains("2 - ").not());
}

#[test]
fn deleting_missing_contacts_changes_nothing() {
    let ws = Workspace::new();

    let mut input = create_input("Alice", "alice@example.com", "08031234567", 0);
    input.push_str("3\n1\n3\nfirst\n3\n-2\n5\n");

    ws.addressbook()
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("couldn't find person with contact ID: 1"))
        .stdout(predicate::str::contains("couldn't delete person with contact ID first: "))
        .stdout(predicate::str::contains("couldn't find person with contact ID: -2"));

    ws.addressbook()
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 - Alice"));
}
