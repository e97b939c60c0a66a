use assert_cmd::Command;
use predicates::prelude::*;

fn clip_chunks() -> Command {
    let mut cmd = Command::cargo_bin("clip-chunks").unwrap();
    cmd.args(["--print", "--delay=0", "--quiet", "--verbose"]);
    cmd
}

#[test]
fn verbose_text() {
    let assert = clip_chunks()
        .arg("-s4")
        .write_stdin("a\nb\nc\n")
        .assert();
    assert
        .success()
        .stderr("source -\nsink stdout\nchunk-size 4\nlimit 2000\ndelay 0s\nprefix \"```ansi \"\nsuffix \"```\"\nchunks 2\nchars 6\n")
        .stdout("```ansi a\nb\n```\n```ansi c\n```\n");
}

#[test]
fn verbose_without_input() {
    let assert = clip_chunks().write_stdin("").assert();
    assert
        .success()
        .stderr("source -\nsink stdout\nchunk-size 1989\nlimit 2000\ndelay 0s\nprefix \"```ansi \"\nsuffix \"```\"\nchunks 0\nchars 0\n")
        .stdout("");
}

#[test]
fn verbose_json() {
    let assert = clip_chunks()
        .args(["-s4", "--format=json"])
        .write_stdin("a\nb\nc\n")
        .assert();
    assert
        .success()
        .stderr(predicate::str::contains(
            r#"{"source":"-","sink":"stdout","chunkSize":4,"limit":2000,"#,
        ))
        .stderr(predicate::str::contains(r#""prefix":"```ansi ","suffix":"```"}"#))
        .stderr(predicate::str::ends_with("{\"chunks\":2,\"chars\":6}\n"));
}

#[test]
fn verbose_respects_environment() {
    let assert = clip_chunks()
        .env("CLIP_CHUNKS_LIMIT", "100")
        .write_stdin("")
        .assert();
    assert
        .success()
        .stderr(predicate::str::contains("chunk-size 89\nlimit 100\n"));
}
