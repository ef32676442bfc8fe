//! CLI integration tests using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizbook(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quizbook").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn exit_choice_succeeds() {
    let dir = TempDir::new().unwrap();

    quizbook(&dir)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Play Quiz"))
        .stdout(predicate::str::contains("2. Add Question"))
        .stdout(predicate::str::contains("3. Exit"));

    assert!(!dir.path().join("questions.json").exists());
}

#[test]
fn invalid_choice_reprompts() {
    let dir = TempDir::new().unwrap();

    quizbook(&dir)
        .write_stdin("5\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Enter your choice: ").count(2));
}

#[test]
fn play_default_questions() {
    let dir = TempDir::new().unwrap();

    quizbook(&dir)
        .write_stdin("1\nA\nA\nA\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the capital of France?"))
        .stdout(predicate::str::contains("Who painted the Mona Lisa?"))
        .stdout(predicate::str::contains("Quiz finished. Your score is 2/3"));
}

#[test]
fn added_question_is_saved_to_default_path() {
    let dir = TempDir::new().unwrap();

    quizbook(&dir)
        .write_stdin("2\n2+2=?\n3\n4\n5\n6\nB\n3\n")
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("questions.json")).unwrap())
            .unwrap();
    assert_eq!(saved["2+2=?"]["answer"], "B");
    assert_eq!(saved["2+2=?"]["B"], "4");
    assert_eq!(saved["What is the capital of France?"]["A"], "Paris");
}

#[test]
fn custom_questions_path() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.json"),
        r#"{"Is water wet?": {"A": "Yes", "B": "No", "C": "Sometimes", "D": "Never", "answer": "A"}}"#,
    )
    .unwrap();

    quizbook(&dir)
        .arg("--questions")
        .arg("mine.json")
        .write_stdin("1\na\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Is water wet?"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Your score is 1/1"))
        .stdout(predicate::str::contains("capital of France").not());
}

#[test]
fn empty_question_file_scores_zero_of_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("questions.json"), "{}").unwrap();

    quizbook(&dir)
        .write_stdin("1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz finished. Your score is 0/0"));
}

#[test]
fn malformed_question_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("questions.json"), "not json").unwrap();

    quizbook(&dir)
        .write_stdin("3\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("1. Play Quiz").not())
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn closed_input_fails() {
    let dir = TempDir::new().unwrap();

    quizbook(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}

#[test]
fn short_questions_flag_without_color() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("mine.json"),
        r#"{"Is water wet?": {"A": "Yes", "B": "No", "C": "Sometimes", "D": "Never", "answer": "A"}}"#,
    )
    .unwrap();

    quizbook(&dir)
        .arg("-q")
        .arg("mine.json")
        .arg("--no-color")
        .write_stdin("1\nB\n5\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect. The correct answer is A."))
        .stdout(predicate::str::contains("Your score is 0/1"))
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn unreadable_question_path_fails() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("questions.json")).unwrap();

    quizbook(&dir)
        .write_stdin("3\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read questions.json"));
}
