#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("project")).unwrap();
        fs::create_dir_all(temp.path().join("global")).unwrap();
        Self { temp }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("quizbank").unwrap();
        cmd.env("QUIZBANK_GLOBAL_DATA", self.temp.path().join("global"))
            .env("NO_COLOR", "1")
            .current_dir(self.temp.path().join("project"));
        cmd
    }

    fn run(&self, args: &[&str]) {
        self.cmd().args(args).assert().success();
    }
}

#[test]
fn create_and_list() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["create", "My", "First", "Question"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question created (1): My First Question"));

    sb.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: My First Q"))
        .stdout(predicate::str::contains("Short Answer"));

    assert!(sb
        .temp
        .path()
        .join("project/.quizbank/questions.json")
        .exists());
}

#[test]
fn multiple_choice_options_show_in_view() {
    let sb = Sandbox::new();
    sb.run(&["create", "--type", "mc", "Colors"]);
    sb.run(&["set", "1", "--body", "Which of these is a color?", "--expected", "red"]);
    sb.run(&["option", "1", "red"]);
    sb.run(&["option", "1", "apple"]);

    sb.cmd()
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# Colors\nWhich of these is a color?\n- red\n- apple",
        ));

    let output = sb.cmd().args(["check", "1", "red"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Correct!").count(), 1);

    let output = sb.cmd().args(["check", "1", "Red"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("Invalid answer"));
}

#[test]
fn max_id_bank_requires_explicit_id() {
    let sb = Sandbox::new();
    sb.run(&["create", "--id", "9223372036854775807", "Max"]);

    sb.cmd()
        .args(["create", "Next"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pass an explicit --id"));

    sb.run(&["create", "--id", "5", "Five"]);
}

#[test]
fn csv_after_rename_duplicate_and_publish() {
    let sb = Sandbox::new();
    sb.run(&["create", "Addition"]);
    sb.run(&["rename", "1", "Sum"]);
    sb.run(&["publish", "1"]);
    sb.run(&["duplicate", "1", "--id", "7"]);

    sb.cmd()
        .args(["csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,Sum,0,1,true"))
        .stdout(predicate::str::contains("7,Copy of Sum,0,1,false"));
}

#[test]
fn missing_question_is_reported() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["rename", "42", "Nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 42 not found"));
}

#[test]
fn global_scope_is_separate() {
    let sb = Sandbox::new();
    sb.run(&["-g", "create", "Shared"]);

    sb.cmd()
        .args(["list", "--names"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found."));

    sb.cmd()
        .args(["list", "--names", "--global"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared"));
}

#[test]
fn import_markdown_directory() {
    let sb = Sandbox::new();
    let notes = sb.temp.path().join("notes");
    fs::create_dir_all(&notes).unwrap();
    fs::write(notes.join("shapes.md"), "# Shapes\nHow many sides?\n- three\n- four\n").unwrap();
    fs::write(notes.join("loose.md"), "no heading").unwrap();

    sb.cmd()
        .arg("import")
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported (1): Shapes"))
        .stdout(predicate::str::contains("Skipped"));

    sb.cmd()
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Questions:        1"));
}

#[test]
fn widget_replays_actions() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["widget", "counter", "add", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Add One to 2."));

    sb.cmd()
        .args(["widget", "holiday", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Halloween"));

    sb.cmd()
        .args(["widget", "counter", "explode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no action 'explode'"));
}

#[test]
fn widget_page_renders_everything() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reveal Answer"))
        .stdout(predicate::str::contains("Current Type: Short Answer"))
        .stdout(predicate::str::contains("Attempts: 0"))
        .stdout(predicate::str::contains("Die 1"));
}

#[test]
fn config_default_type_applies_to_create() {
    let sb = Sandbox::new();
    sb.run(&["config", "default-type", "multiple-choice"]);
    sb.run(&["create", "Colors"]);

    sb.cmd()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Multiple Choice"));
}

#[test]
fn grouped_help() {
    let sb = Sandbox::new();
    sb.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Per-Question Commands:"))
        .stdout(predicate::str::contains("widget"));
}
