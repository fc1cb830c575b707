use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn temp_workspace() -> TempDir {
    tempfile::tempdir().expect("create tempdir")
}

#[test]
fn stem_splits_word_list() {
    let workspace = temp_workspace();
    let words_path = workspace.path().join("nouns.txt");
    fs::write(&words_path, "walked talked walks\n").expect("write word list");

    let mut cmd = Command::cargo_bin("stemtok").expect("binary exists");
    let output = cmd
        .current_dir(workspace.path())
        .args(["stem", "--words", "nouns.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    assert!(stdout.contains("--- Prefix Trie Stemming ---"));
    assert!(stdout.contains("walks=walk+s"));
    assert!(stdout.contains("--- Suffix Trie Stemming ---"));
    assert!(stdout.contains("walked=w+alked"));
}

#[test]
fn stem_missing_word_file_is_not_fatal() {
    let workspace = temp_workspace();
    let mut cmd = Command::cargo_bin("stemtok").expect("binary exists");
    let output = cmd
        .current_dir(workspace.path())
        .args(["stem", "--words", "absent.txt"])
        .assert()
        .success()
        .get_output()
        .clone();

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(!stdout.contains('='), "no segmentation lines expected");
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("absent.txt"), "error names the missing file");
}

#[test]
fn merge_emits_final_tokens() {
    let mut cmd = Command::cargo_bin("stemtok").expect("binary exists");
    let output = cmd
        .args(["merge", "--text", "aab", "--rounds", "1", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    let tokens: Vec<&str> = stdout.lines().collect();
    assert_eq!(tokens, vec!["aa", "b"]);
}

#[test]
fn merge_reads_corpus_from_file() {
    let workspace = temp_workspace();
    let corpus_path = workspace.path().join("corpus.txt");
    fs::write(&corpus_path, "aab").expect("write corpus");

    let mut cmd = Command::cargo_bin("stemtok").expect("binary exists");
    let output = cmd
        .current_dir(workspace.path())
        .args(["merge", "--file", "corpus.txt", "--rounds", "1", "--no-progress"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["aa", "b"]);
}

#[test]
fn merge_default_corpus_is_deterministic() {
    let run = || {
        let mut cmd = Command::cargo_bin("stemtok").expect("binary exists");
        cmd.args(["merge", "--no-progress"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}
