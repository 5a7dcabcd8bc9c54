// Dweve PropTree - Ordered Property Trees and Text Encodings
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for the `proptree` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

/// Test helper to create a proptree command
fn proptree_cmd() -> Command {
    Command::cargo_bin("proptree").expect("Failed to find proptree binary")
}

/// Write `content` to a temp file with the given suffix
fn temp_input(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_help_lists_convert() {
    proptree_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_convert_requires_target_format() {
    proptree_cmd()
        .args(["convert"])
        .write_stdin("a=1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_json_file_to_path_value() {
    let file = temp_input(r#"{"server":{"host":"localhost","port":8080}}"#, ".json");
    proptree_cmd()
        .args(["convert", "--to", "path-value"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(r#"server/host="localhost",server/port="8080""#.to_string() + "\n");
}

#[test]
fn test_stdin_is_guessed() {
    proptree_cmd()
        .args(["convert", "--to", "json"])
        .write_stdin("<doc><a>1</a></doc>")
        .assert()
        .success()
        .stdout("{\"doc\":{\"a\":\"1\"}}\n");

    proptree_cmd()
        .args(["convert", "--to", "name-value"])
        .write_stdin("a/b=1")
        .assert()
        .success()
        .stdout("a={b=\"1\"}\n");
}

#[test]
fn test_stdin_path_value_lines_are_guessed() {
    proptree_cmd()
        .args(["convert", "--to", "xml", "--no-declaration"])
        .write_stdin("doc/a=1\n")
        .assert()
        .success()
        .stdout("<doc><a>1</a></doc>\n");

    proptree_cmd()
        .args(["convert", "--to", "json"])
        .write_stdin("# listing\nserver/host=localhost\n\nserver/port=8080\n")
        .assert()
        .success()
        .stdout("{\"server\":{\"host\":\"localhost\",\"port\":\"8080\"}}\n");
}

#[test]
fn test_path_value_file_is_guessed() {
    let file = temp_input("# flat listing\na/b=1\na/c=2\n", ".conf");
    proptree_cmd()
        .args(["convert", "--to", "name-value"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("a={b=\"1\",c=\"2\"}\n");
}

#[test]
fn test_indices_with_brackets() {
    proptree_cmd()
        .args([
            "convert",
            "--from",
            "json",
            "--to",
            "path-value",
            "--indices",
            "with-brackets",
        ])
        .write_stdin(r#"{"x":["first","second"]}"#)
        .assert()
        .success()
        .stdout("x[0]=\"first\",x[1]=\"second\"\n");
}

#[test]
fn test_policy_violation_fails() {
    proptree_cmd()
        .args([
            "convert",
            "--from",
            "path-value",
            "--to",
            "json",
            "--policy",
            "unique-input",
        ])
        .write_stdin("a=1,a=2")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: ConflictViolation"));
}

#[test]
fn test_take_last_policy() {
    proptree_cmd()
        .args([
            "convert",
            "--from",
            "path-value",
            "--to",
            "json",
            "--policy",
            "take-last",
        ])
        .write_stdin("a=1,a=2")
        .assert()
        .success()
        .stdout("{\"a\":\"2\"}\n");
}

#[test]
fn test_output_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("out.xml");
    proptree_cmd()
        .args(["convert", "--to", "xml", "--no-declaration", "--output"])
        .arg(&out)
        .write_stdin("doc/a=1")
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&out).unwrap(), "<doc><a>1</a></doc>");
}

#[test]
fn test_missing_file() {
    proptree_cmd()
        .args(["convert", "--to", "json", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error for '/nonexistent/input.json'"));
}

#[test]
fn test_undetermined_input() {
    proptree_cmd()
        .args(["convert", "--to", "json"])
        .write_stdin("just some words")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FormatUndetermined"));
}

#[test]
fn test_unrepresentable_xml() {
    proptree_cmd()
        .args(["convert", "--to", "xml"])
        .write_stdin("a=1,b=2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrepresentable"));
}

#[test]
fn test_pretty_xml() {
    proptree_cmd()
        .args(["convert", "--to", "xml", "--pretty"])
        .write_stdin(r#"{"doc":{"a":"1","b":"2"}}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"))
        .stdout(predicate::str::contains("\n  <a>1</a>\n  <b>2</b>\n"));
}

#[test]
fn test_name_value_file_with_comments() {
    let file = temp_input(
        "# service settings\nserver {\n  host localhost\n  port 8080\n}\n",
        ".info",
    );
    proptree_cmd()
        .args(["convert", "--from", "name-value", "--to", "path-value"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("server/host=\"localhost\",server/port=\"8080\"\n");
}

#[test]
fn test_newline_delimiter_and_root() {
    proptree_cmd()
        .args([
            "convert",
            "--from",
            "json",
            "--to",
            "path-value",
            "--delimiter",
            "\\n",
            "--root",
            "cfg",
        ])
        .write_stdin(r#"{"a":"1","b":"2"}"#)
        .assert()
        .success()
        .stdout("cfg/a=\"1\"\ncfg/b=\"2\"\n");
}

#[test]
fn test_path_value_file_one_per_line() {
    let file = temp_input("# flat listing\na/b=1\n\na/c=2\n", ".txt");
    proptree_cmd()
        .args(["convert", "--from", "path-value", "--to", "name-value"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("a={b=\"1\",c=\"2\"}\n");
}

#[test]
fn test_bad_separator_argument() {
    proptree_cmd()
        .args(["convert", "--to", "json", "--delimiter", "ab"])
        .write_stdin("a=1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("single character"));
}
