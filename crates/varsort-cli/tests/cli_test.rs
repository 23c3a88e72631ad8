//! Integration tests for the varsort CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use varsort_format::{Record, read_records, write_records};

fn varsort() -> Command {
    Command::cargo_bin("varsort").unwrap()
}

#[test]
fn test_help_flag_is_rejected() {
    varsort()
        .arg("--help")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: varsort -i inputfile -o outputfile",
        ));
}

#[test]
fn test_version_flag_is_rejected() {
    varsort()
        .arg("--version")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: varsort"));
}

#[test]
fn test_no_arguments_prints_usage() {
    varsort()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: varsort -i inputfile -o outputfile",
        ));
}

#[test]
fn test_missing_output_flag_prints_usage() {
    varsort()
        .args(["-i", "input.bin"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: varsort"));
}

#[test]
fn test_unknown_flag_prints_usage() {
    varsort()
        .args(["-i", "a", "-o", "b", "-x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: varsort"));
}

#[test]
fn test_extra_argument_prints_usage() {
    varsort()
        .args(["-i", "a", "-o", "b", "extra"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: varsort"));
}

#[test]
fn test_sorts_records_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    let records = vec![
        Record::new(5, vec![]).unwrap(),
        Record::new(2, vec![7]).unwrap(),
        Record::new(9, vec![1, 2]).unwrap(),
    ];
    write_records(&input, &records).unwrap();

    varsort()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let sorted = read_records(&output).unwrap();
    assert_eq!(sorted[0], Record::new(2, vec![7]).unwrap());
    assert_eq!(sorted[1], Record::new(5, vec![]).unwrap());
    assert_eq!(sorted[2], Record::new(9, vec![1, 2]).unwrap());
}

#[test]
fn test_output_bytes_for_known_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    // N=3: (5, []), (2, [7]), (9, [1, 2])
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&3u32.to_le_bytes());
    bytes.extend_from_slice(&5i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&2i32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&7u32.to_le_bytes());
    bytes.extend_from_slice(&9i32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes());
    fs::write(&input, bytes).unwrap();

    varsort()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    let mut expected = Vec::new();
    expected.extend_from_slice(&3u32.to_le_bytes());
    expected.extend_from_slice(&2i32.to_le_bytes());
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.extend_from_slice(&7u32.to_le_bytes());
    expected.extend_from_slice(&5i32.to_le_bytes());
    expected.extend_from_slice(&0u32.to_le_bytes());
    expected.extend_from_slice(&9i32.to_le_bytes());
    expected.extend_from_slice(&2u32.to_le_bytes());
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.extend_from_slice(&2u32.to_le_bytes());
    assert_eq!(fs::read(&output).unwrap(), expected);
}

#[test]
fn test_empty_input_produces_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.bin");
    let output = dir.path().join("output.bin");

    write_records(&input, &[]).unwrap();

    varsort()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(fs::read(&output).unwrap(), [0, 0, 0, 0]);
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("absent.bin");
    let output = dir.path().join("output.bin");

    varsort()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot open input file"));
}

#[test]
fn test_truncated_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("truncated.bin");
    let output = dir.path().join("output.bin");

    // Declares one record, carries none
    fs::write(&input, 1u32.to_le_bytes()).unwrap();

    varsort()
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("truncated input"));
}
