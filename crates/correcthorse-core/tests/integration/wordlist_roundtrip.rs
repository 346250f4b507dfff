//! Integration tests for loading word lists from files.

use std::fs;

use correcthorse_core::wordlist::{self, Word, MAX_LINE_BYTES};
use correcthorse_core::PassphraseError;
use tempfile::TempDir;

fn words(list: &correcthorse_core::WordList) -> Vec<String> {
    list.iter().map(Word::to_string).collect()
}

/// Mixed indentation and newline styles load into the trimmed words.
#[test]
fn trims_mixed_whitespace_and_newlines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "  correct  \r\nhorse\n\tbattery\n\nstaple").unwrap();

    let list = wordlist::read(&path).unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(words(&list), ["correct", "horse", "battery", "staple"]);
}

/// A file holding only blank lines loads as an empty list, not an error.
#[test]
fn blank_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.txt");
    fs::write(&path, "\n\n   \n\t\r\n").unwrap();

    let list = wordlist::read(&path).unwrap();
    assert!(list.is_empty());
}

/// An empty file loads as an empty list.
#[test]
fn zero_byte_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    assert!(wordlist::read(&path).unwrap().is_empty());
}

/// A missing file is an open error naming the path.
#[test]
fn missing_file_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    let err = wordlist::read(&path).unwrap_err();
    match &err {
        PassphraseError::Open { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Open, got {other:?}"),
    }
    assert!(err.to_string().contains("does-not-exist"));
}

/// Reading a directory fails instead of yielding a list.
#[cfg(unix)]
#[test]
fn directory_is_not_a_word_list() {
    let dir = TempDir::new().unwrap();
    let err = wordlist::read(dir.path()).unwrap_err();
    assert!(
        matches!(err, PassphraseError::Open { .. } | PassphraseError::Read { .. }),
        "unexpected error: {err:?}"
    );
}

/// A large list keeps every entry in order.
#[test]
fn large_list_keeps_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.txt");
    let content: String = (0..200_000).map(|i| format!("w{i}\n")).collect();
    fs::write(&path, content).unwrap();

    let list = wordlist::read(&path).unwrap();
    assert_eq!(list.len(), 200_000);
    assert_eq!(list[0].to_string(), "w0");
    assert_eq!(list[123_456].to_string(), "w123456");
    assert_eq!(list[199_999].to_string(), "w199999");
}

/// An over-long line rejects the whole file.
#[test]
fn over_long_line_rejects_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("long.txt");
    let mut content = b"one\ntwo\n".to_vec();
    content.extend(std::iter::repeat(b'x').take(MAX_LINE_BYTES + 10));
    fs::write(&path, content).unwrap();

    let err = wordlist::read(&path).unwrap_err();
    assert!(matches!(err, PassphraseError::LineTooLong { line: 3, .. }));
}

/// Several files concatenate in argument order, blank lines dropped.
#[test]
fn read_many_merges_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let empty = dir.path().join("empty.txt");
    fs::write(&first, "correct\nhorse\n").unwrap();
    fs::write(&empty, "\n").unwrap();
    fs::write(&second, "battery\r\nstaple\r\n").unwrap();

    let list = wordlist::read_many(&[first, empty, second]).unwrap();
    assert_eq!(words(&list), ["correct", "horse", "battery", "staple"]);
}
