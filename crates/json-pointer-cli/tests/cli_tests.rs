//! Integration tests for the `jsonpointer` binary.

// `Command::cargo_bin` is deprecated in newer assert_cmd releases.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn jsonpointer() -> Command {
    Command::cargo_bin("jsonpointer").unwrap()
}

#[test]
fn resolves_inline_pointer() {
    jsonpointer()
        .args(["/foo/0", fixture("rfc6901.json").as_str()])
        .assert()
        .success()
        .stdout("\"bar\"\n");
}

#[test]
fn resolves_escaped_tokens() {
    jsonpointer()
        .args(["/m~0n", fixture("rfc6901.json").as_str()])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn prints_one_line_per_document() {
    let doc = fixture("rfc6901.json");
    jsonpointer()
        .args(["/a~1b", doc.as_str(), doc.as_str()])
        .assert()
        .success()
        .stdout("1\n1\n");
}

#[test]
fn reads_pointer_from_file() {
    jsonpointer()
        .args(["-f", fixture("pointer.txt").as_str(), fixture("rfc6901.json").as_str()])
        .assert()
        .success()
        .stdout("\"baz\"\n");
}

#[test]
fn indents_output() {
    jsonpointer()
        .args(["--indent", "2", "/foo", fixture("rfc6901.json").as_str()])
        .assert()
        .success()
        .stdout("[\n  \"bar\",\n  \"baz\"\n]\n");
}

#[test]
fn legacy_mode_percent_decodes() {
    jsonpointer()
        .args(["--legacy", "/foo/another%20prop/baz", fixture("nested.json").as_str()])
        .assert()
        .success()
        .stdout("\"A string\"\n");
}

#[test]
fn missing_member_fails() {
    jsonpointer()
        .args(["/nope", fixture("rfc6901.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("member 'nope' not found"));
}

#[test]
fn end_of_list_fails() {
    jsonpointer()
        .args(["/foo/-", fixture("rfc6901.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end of a list"));
}

#[test]
fn invalid_pointer_fails() {
    jsonpointer()
        .args(["foo", fixture("rfc6901.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pointer"));
}

#[test]
fn missing_document_fails() {
    jsonpointer()
        .args(["/foo"])
        .assert()
        .failure();
}
