//! Integration tests for the `tarot` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Name, "how are you", and the ready prompt.
const INTRO: &str = "alice\nfine thanks\n\n";

fn tarot() -> Command {
    Command::cargo_bin("tarot").unwrap()
}

fn read() -> Command {
    let mut cmd = tarot();
    cmd.args(["read", "--seed", "42", "--pace", "0", "--no-color"]);
    cmd
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_three_card_spread() {
    read()
        .write_stdin(format!("{INTRO}1\n1\n\n\n\n1\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome Alice. How are you?")
                .and(predicate::str::contains("PAST, PRESENT, FUTURE"))
                .and(predicate::str::contains("Hit enter to draw the final card."))
                .and(predicate::str::contains(
                    "The second position represents the present state of the situation.",
                ))
                .and(predicate::str::contains("You have drawn "))
                .and(predicate::str::contains("my terminal is always open"))
                .and(predicate::str::contains("GOODBYE")),
        );
}

#[test]
fn read_is_default_command() {
    tarot()
        .write_stdin("")
        .env("NO_COLOR", "1")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .failure()
        .stdout(predicate::str::contains("TAROT"))
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn read_same_seed_same_cards() {
    let input = format!("{INTRO}4\n1\n{}1\n", "\n".repeat(10));
    let first = read().write_stdin(input.clone()).output().unwrap();
    let second = read().write_stdin(input).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn read_reports_out_of_range_choice() {
    read()
        .write_stdin(format!("{INTRO}7\nzero\n2\n1\n\n\n\n1\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("That number is out of range.")
                .and(predicate::str::contains("Please enter a number."))
                .and(predicate::str::contains("RELATIONSHIP SPREAD")),
        );
}

#[test]
fn read_two_readings_with_recap() {
    read()
        .arg("--recap")
        .write_stdin(format!("{INTRO}1\n2\n1\n\n\n\n2\n3\n1\n\n\n\n\n1\n"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Readings for Alice")
                .and(predicate::str::contains("## Past, Present, Future"))
                .and(predicate::str::contains("## The Blindspot")),
        );
}

#[test]
fn read_input_closed_mid_reading() {
    read()
        .write_stdin(format!("{INTRO}1\n1\n\n"))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: input closed before the session finished",
        ));
}

#[test]
fn read_flags_without_subcommand() {
    let input = format!("{INTRO}1\n1\n\n\n\n1\n");
    let bare = tarot()
        .args(["--seed", "42", "--pace", "0", "--no-color"])
        .write_stdin(input.clone())
        .output()
        .unwrap();
    let explicit = read().write_stdin(input).output().unwrap();
    assert!(bare.status.success());
    assert_eq!(bare.stdout, explicit.stdout);
}

#[test]
fn read_uses_reader_name() {
    read()
        .args(["--reader", "Madame Zora"])
        .write_stdin(format!("{INTRO}1\n1\n\n\n\n1\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("My name is Madame Zora."));
}

#[test]
fn read_rejects_oversized_width() {
    read()
        .args(["--width", "18446744073709551615"])
        .write_stdin("alice\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn read_rejects_narrow_width() {
    read()
        .args(["--width", "5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn read_rejects_negative_pace() {
    tarot()
        .args(["read", "--pace=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pace"));
}

// ---------------------------------------------------------------------------
// cards
// ---------------------------------------------------------------------------

#[test]
fn cards_lists_whole_deck() {
    tarot()
        .arg("cards")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fool")
                .and(predicate::str::contains("King of Pentacles"))
                .and(predicate::str::contains("78 cards")),
        );
}

#[test]
fn cards_filters_by_suit() {
    tarot()
        .args(["cards", "--suit", "cups"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Ace of Cups")
                .and(predicate::str::contains("14 cards"))
                .and(predicate::str::contains("The Fool").not()),
        );
}

#[test]
fn cards_unknown_suit() {
    tarot()
        .args(["cards", "--suit", "hearts"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown suit"));
}

#[test]
fn cards_as_json() {
    let output = tarot().args(["cards", "--json"]).output().unwrap();
    assert!(output.status.success());
    let cards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = cards.as_array().unwrap();
    assert_eq!(cards.len(), 78);
    assert_eq!(cards[0]["title"], "The Fool");
    assert_eq!(cards[0]["suit"], "trump");
}

// ---------------------------------------------------------------------------
// spreads
// ---------------------------------------------------------------------------

#[test]
fn spreads_lists_positions() {
    tarot()
        .arg("spreads")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Celtic Cross (10 cards)")
                .and(predicate::str::contains("The Blindspot (4 cards)"))
                .and(predicate::str::contains("the long term outcome of the situation")),
        );
}
