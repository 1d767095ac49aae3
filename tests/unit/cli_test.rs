//! Integration tests for seatfinder CLI

use assert_cmd::cargo;
use predicates::prelude::*;

use crate::common::TestVenue;

fn seatfinder() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("seatfinder"));
    cmd.env("NO_COLOR", "1");
    cmd
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_version() {
    seatfinder()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("seatfinder"));
}

#[test]
fn test_version_command_json() {
    let output = seatfinder().args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(json_stdout(&output)["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help() {
    seatfinder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Look up which table a guest is seated at"));
}

#[test]
fn test_no_args_shows_info() {
    seatfinder()
        .assert()
        .success()
        .stdout(predicate::str::contains("seatfinder v"));
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn test_lookup_exact_name() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "Jan Kowalski"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found: Jan Kowalski"))
        .stdout(predicate::str::contains("Table no. 1"))
        .stdout(predicate::str::contains("closest match").not());
}

#[test]
fn test_lookup_partial_name_json() {
    let venue = TestVenue::new();
    let output = seatfinder()
        .args(["--json", "lookup", "nowak"])
        .current_dir(venue.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["action"], "resolved");
    assert_eq!(json["outcome"]["outcome"], "partial_match");
    assert_eq!(json["outcome"]["guest_name"], "Anna Nowak");
    assert_eq!(json["outcome"]["table_number"], 2);
    assert_eq!(json["view"]["highlighted"], 2);
}

#[test]
fn test_lookup_unknown_name() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "xyz"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No guest found for \"xyz\"."));
}

#[test]
fn test_lookup_while_typing_short_query_clears() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "an", "--on", "input"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("cleared the table map"));
}

#[test]
fn test_lookup_on_blur_resolves_two_characters() {
    let venue = TestVenue::new();
    let output = seatfinder()
        .args(["--json", "lookup", "an", "--on", "blur"])
        .current_dir(venue.path())
        .output()
        .unwrap();

    let json = json_stdout(&output);
    assert_eq!(json["trigger"], "blur");
    assert_eq!(json["outcome"]["guest_name"], "Jan Kowalski");
}

#[test]
fn test_lookup_on_blur_one_character_is_ignored() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "a", "--on", "blur"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Query too short to search."));
}

#[test]
fn test_lookup_invalid_trigger() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "Jan", "--on", "click"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid trigger: click"));
}

#[test]
fn test_lookup_does_not_touch_drafts() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["lookup", "Jan Kowalski"])
        .current_dir(venue.path())
        .assert()
        .success();
    assert!(!venue.path().join(".seatfinder/drafts.json").exists());
}

// =============================================================================
// GUESTS AND TABLES
// =============================================================================

#[test]
fn test_guests_lists_directory() {
    let venue = TestVenue::new();
    seatfinder()
        .arg("guests")
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jan Kowalski"))
        .stdout(predicate::str::contains("Magdalena Jankowska"));
}

#[test]
fn test_guests_export() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["guests", "--export"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[[guest]]"))
        .stdout(predicate::str::contains("name = \"Anna Nowak\""));
}

#[test]
fn test_tables_json() {
    let venue = TestVenue::new();
    let output = seatfinder()
        .args(["--json", "tables"])
        .current_dir(venue.path())
        .output()
        .unwrap();

    let json = json_stdout(&output);
    let tables = json["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 5);
    assert_eq!(tables[0]["table"], 1);
    assert_eq!(
        tables[0]["guests"],
        serde_json::json!(["Jan Kowalski", "Katarzyna Wójcik", "Marcin Kozłowski"])
    );
}

// =============================================================================
// PICK
// =============================================================================

#[test]
fn test_pick_without_name_fails() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["pick", "3"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter your name first!"));
}

#[test]
fn test_pick_with_name() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["pick", "3", "--name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ola - Table no. 3"));
}

#[test]
fn test_pick_uses_saved_name() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["draft", "set", "name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .success();

    seatfinder()
        .args(["pick", "5"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Ola - Table no. 5"));
}

#[test]
fn test_pick_reports_unusable_draft_file() {
    let venue = TestVenue::new();
    std::fs::create_dir_all(venue.path().join(".seatfinder/drafts.json")).unwrap();
    seatfinder()
        .args(["pick", "3", "--name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read drafts"))
        .stderr(predicate::str::contains("drafts.json"));
}

#[test]
fn test_pick_unknown_table() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["pick", "9", "--name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("there is no table number 9"));
}

#[test]
fn test_pick_invalid_table_number() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["pick", "0", "--name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tables start at 1"));
}

// =============================================================================
// FEEDBACK
// =============================================================================

#[test]
fn test_feedback_submission() {
    let venue = TestVenue::instant();
    seatfinder()
        .args(["feedback", "--name", "Ola", "--rating", "4", "--opinion", "Great dinner"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Thank you for your feedback!"))
        .stdout(predicate::str::contains("Opinion: Great dinner"));
}

#[test]
fn test_feedback_json_uses_drafts() {
    let venue = TestVenue::instant();
    seatfinder()
        .args(["draft", "set", "opinion", "Lovely music"])
        .current_dir(venue.path())
        .assert()
        .success();

    let output = seatfinder()
        .args(["--json", "feedback", "--name", "Ola", "--rating", "5"])
        .current_dir(venue.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["success"], true);
    assert_eq!(json["feedback"]["name"], "Ola");
    assert_eq!(json["feedback"]["rating"], 5);
    assert_eq!(json["feedback"]["opinion"], "Lovely music");

    // Sent feedback clears the drafts
    assert!(!venue.path().join(".seatfinder/drafts.json").exists());
}

#[test]
fn test_feedback_rating_out_of_range() {
    let venue = TestVenue::instant();
    seatfinder()
        .args(["feedback", "--name", "Ola", "--rating", "7"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating must be between 1 and 5, got 7"));
}

// =============================================================================
// DRAFTS
// =============================================================================

#[test]
fn test_draft_set_show_clear() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["draft", "set", "name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved draft for name"));

    seatfinder()
        .args(["draft", "show"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("guestForm_guestName"))
        .stdout(predicate::str::contains("\"Ola\""));

    seatfinder()
        .args(["draft", "clear"])
        .current_dir(venue.path())
        .assert()
        .success();

    seatfinder()
        .args(["draft", "show"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No drafts saved."));
}

#[test]
fn test_draft_invalid_field() {
    let venue = TestVenue::new();
    seatfinder()
        .args(["draft", "set", "email", "x@y.z"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid field: email"));
}

#[test]
fn test_drafts_stay_in_memory_when_not_persisted() {
    let venue = TestVenue::new();
    venue.write_config("[storage]\npersist_drafts = false\n");
    seatfinder()
        .args(["draft", "set", "name", "Ola"])
        .current_dir(venue.path())
        .assert()
        .success();
    assert!(!venue.path().join(".seatfinder/drafts.json").exists());
}

// =============================================================================
// INIT AND CONFIG
// =============================================================================

#[test]
fn test_init_creates_config() {
    let venue = TestVenue::new();
    seatfinder()
        .arg("init")
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .seatfinder.toml"));

    assert!(venue.path().join(".seatfinder.toml").exists());
    assert!(venue.path().join(".seatfinder/.gitignore").exists());

    seatfinder()
        .arg("init")
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));

    seatfinder()
        .args(["init", "--force"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}

#[test]
fn test_guest_file_replaces_builtin_directory() {
    let venue = TestVenue::new();
    venue.write_file(
        "guests.toml",
        concat!(
            "[[guest]]\nname = \"Ola Nowicka\"\ntable = 7\n\n",
            "[[guest]]\nname = \"Piotr Zając\"\ntable = 8\n",
        ),
    );
    venue.write_config("[storage]\nguests = \"guests.toml\"\n");

    let output = seatfinder()
        .args(["--json", "lookup", "ola nowicka"])
        .current_dir(venue.path())
        .output()
        .unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["outcome"]["outcome"], "exact_match");
    assert_eq!(json["outcome"]["table_number"], 7);

    seatfinder()
        .args(["lookup", "Jan Kowalski"])
        .current_dir(venue.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No guest found"));
}

#[test]
fn test_invalid_config_fails() {
    let venue = TestVenue::new();
    venue.write_config("[trigger\n");
    seatfinder()
        .args(["lookup", "Jan"])
        .current_dir(venue.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}
