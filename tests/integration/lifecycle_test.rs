//! Integration tests for a full guest session
//!
//! Tests the complete flow:
//! 1. Guest types their name (saved as a draft) and finds their table
//! 2. Guest picks a table using the saved name
//! 3. Guest sends feedback; drafts are cleared

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn seatfinder() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("seatfinder"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Initialize a venue with no simulated delays
fn setup_venue() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    seatfinder().arg("init").current_dir(temp_dir.path()).assert().success();

    let config_path = temp_dir.path().join(".seatfinder.toml");
    let config = fs::read_to_string(&config_path).unwrap();
    let config = config
        .replace("submit_delay_ms = 1500", "submit_delay_ms = 0")
        .replace("menu_close_after_success_ms = 2000", "menu_close_after_success_ms = 0");
    fs::write(&config_path, config).unwrap();

    temp_dir
}

fn drafts_file(venue: &Path) -> std::path::PathBuf {
    venue.join(".seatfinder/drafts.json")
}

#[test]
fn test_guest_session_lifecycle() {
    let venue = setup_venue();
    let path = venue.path();

    // Typing the name caches it
    seatfinder()
        .args(["draft", "set", "name", "Katarzyna Wójcik"])
        .current_dir(path)
        .assert()
        .success();
    assert!(drafts_file(path).exists());

    seatfinder()
        .args(["lookup", "katarzyna wójcik"])
        .current_dir(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: Katarzyna Wójcik"))
        .stdout(predicate::str::contains("Table no. 1"));

    // Picking reuses the cached name
    seatfinder()
        .args(["pick", "1"])
        .current_dir(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Katarzyna Wójcik - Table no. 1"));

    seatfinder()
        .args(["draft", "set", "opinion", "Wonderful evening"])
        .current_dir(path)
        .assert()
        .success();

    // Feedback falls back to both drafts
    let output = seatfinder()
        .args(["--json", "feedback", "--rating", "5"])
        .current_dir(path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["feedback"]["name"], "Katarzyna Wójcik");
    assert_eq!(json["feedback"]["opinion"], "Wonderful evening");
    assert_eq!(json["feedback"]["rating"], 5);

    assert!(!drafts_file(path).exists());
    seatfinder()
        .args(["pick", "1"])
        .current_dir(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter your name first!"));
}

#[test]
fn test_custom_guest_list_session() {
    let venue = setup_venue();
    let path = venue.path();

    // Export the built-in list, trim it to two guests, point config at it
    let export = seatfinder()
        .args(["guests", "--export"])
        .current_dir(path)
        .output()
        .unwrap();
    assert!(export.status.success());
    let exported = String::from_utf8(export.stdout).unwrap();
    assert!(exported.contains("Magdalena Jankowska"));

    fs::write(
        path.join("guests.toml"),
        "[[guest]]\nname = \"Ewa Maj\"\ntable = 10\n\n[[guest]]\nname = \"Adam Maj\"\ntable = 11\n",
    )
    .unwrap();
    let mut config = fs::read_to_string(path.join(".seatfinder.toml")).unwrap();
    config = config.replace("[storage]", "[storage]\nguests = \"guests.toml\"");
    fs::write(path.join(".seatfinder.toml"), config).unwrap();

    // "maj" is contained in the first guest's name
    let output = seatfinder()
        .args(["--json", "lookup", "maj"])
        .current_dir(path)
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"]["outcome"], "partial_match");
    assert_eq!(json["outcome"]["guest_name"], "Ewa Maj");
    assert_eq!(json["outcome"]["table_number"], 10);

    seatfinder()
        .args(["tables"])
        .current_dir(path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Table 10"))
        .stdout(predicate::str::contains("Adam Maj"));

    seatfinder()
        .args(["pick", "3", "--name", "Ewa"])
        .current_dir(path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("there is no table number 3"));
}
