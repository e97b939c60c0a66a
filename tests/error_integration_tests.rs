use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn clip_chunks() -> Command {
    let mut cmd = Command::cargo_bin("clip-chunks").unwrap();
    cmd.args(["--print", "--delay=0", "--quiet"]);
    cmd
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.txt");

    let assert = clip_chunks().arg(&path).assert();
    assert
        .failure()
        .code(66)
        .stderr(predicate::str::starts_with("Error: no such file: "));
}

#[test]
fn test_invalid_utf8_input() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.bin");
    fs::write(&path, b"ok\n\xFF\xFE").unwrap();

    let assert = clip_chunks().arg("-s3").arg(&path).assert();
    assert
        .failure()
        .code(65)
        .stdout("")
        .stderr(predicate::str::contains("invalid UTF-8 at byte 3"));
}

#[test]
fn test_zero_chunk_size() {
    let assert = clip_chunks().arg("--chunk-size=0").write_stdin("a").assert();
    assert
        .failure()
        .code(64)
        .stderr(predicate::str::contains("chunk size must be at least 1"));
}

#[test]
fn test_decoration_exceeds_limit() {
    let assert = clip_chunks().arg("--limit=11").write_stdin("a").assert();
    assert
        .failure()
        .code(64)
        .stderr(predicate::str::contains("leaves no room within the 11 char limit"));
}

#[test]
fn test_invalid_delay() {
    let assert = Command::cargo_bin("clip-chunks")
        .unwrap()
        .args(["--print", "--delay=soon"])
        .write_stdin("a")
        .assert();
    assert
        .failure()
        .code(64)
        .stderr(predicate::str::contains("invalid delay"));
}

#[test]
fn test_output_in_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist").join("chunks.txt");

    let assert = clip_chunks()
        .arg(format!("--output={}", path.display()))
        .write_stdin("a")
        .assert();
    assert
        .failure()
        .code(66)
        .stderr(predicate::str::contains("Error: failed to create output file:"));
}
