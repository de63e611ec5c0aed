use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::Path};
use tempfile::tempdir;

fn book(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_FILE", file);
    cmd
}

#[test]
fn menu_session_saves_on_exit() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    book(&file)
        .write_stdin("2\nJane Doe\n555-123-4567\njane@example.com\n1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Book - Terminal CLI"))
        .stdout(predicate::str::contains("Contact 'Jane Doe' added successfully!"))
        .stdout(predicate::str::contains("Total: 1 contacts"))
        .stdout(predicate::str::contains("Data saved. Goodbye!"));

    assert!(fs::read_to_string(&file)?.contains("\"name\": \"Jane Doe\""));

    Ok(())
}

#[test]
fn menu_subcommand_and_end_of_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    // Input running out behaves like choosing 0
    book(&file)
        .arg("menu")
        .write_stdin("9\n3\nnobody\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 0 and 5.",
        ))
        .stdout(predicate::str::contains("No contacts found matching 'nobody'."))
        .stdout(predicate::str::contains("Data saved. Goodbye!"));

    assert_eq!(fs::read_to_string(&file)?, "[]\n");

    Ok(())
}

#[test]
fn menu_edit_and_delete() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("contacts.json");

    book(&file)
        .args(["add", "--name", "Bob", "--phone", "1234567890", "--email", "bob@x.com"])
        .assert()
        .success();

    book(&file)
        .write_stdin("4\nbob\n\n0987654321\n\n5\nBob\nno\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Bob' updated successfully!"))
        .stdout(predicate::str::contains("Deletion cancelled."));

    book(&file)
        .args(["search", "0987654321"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bob@x.com"));

    book(&file)
        .write_stdin("5\nBOB\nyes\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Bob' deleted successfully!"));

    book(&file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));

    Ok(())
}
