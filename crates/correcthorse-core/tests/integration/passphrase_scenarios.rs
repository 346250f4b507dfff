//! Integration tests for passphrase generation from word-list files.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use correcthorse_core::{
    generate, generate_with, wordlist, IndexSource, PassphraseError, PassphraseOptions,
    RejectionSampler, Result,
};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

/// Index source returning a fixed sequence.
struct Replay(VecDeque<usize>);

impl IndexSource for Replay {
    fn uniform_index(&mut self, n: usize) -> Result<usize> {
        let i = self.0.pop_front().expect("replay exhausted");
        assert!(i < n);
        Ok(i)
    }
}

fn write_list(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn generate_line(path: &Path, count: usize, separator: &str) -> String {
    let list = wordlist::read(path).unwrap();
    let mut out = Vec::new();
    generate(&list, count, separator, &mut RejectionSampler::os(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// One-word list, one word: the word and a newline.
#[test]
fn minimal_list_single_word() {
    let dir = TempDir::new().unwrap();
    let path = write_list(&dir, "alpha.txt", "alpha\n");
    assert_eq!(generate_line(&path, 1, " "), "alpha\n");
}

/// A list of blank lines cannot produce a passphrase.
#[test]
fn blank_list_is_empty_list_error() {
    let dir = TempDir::new().unwrap();
    let path = write_list(&dir, "blank.txt", "\n \n\t\n");
    let list = wordlist::read(&path).unwrap();

    let mut out = Vec::new();
    let err = generate(&list, 4, " ", &mut RejectionSampler::os(), &mut out).unwrap_err();
    assert!(matches!(err, PassphraseError::EmptyList));
    assert!(out.is_empty());
}

/// Four words from a 1000-word list: three spaces, four tokens, one newline.
#[test]
fn count_parity_on_large_list() {
    let dir = TempDir::new().unwrap();
    let content: String = (0..1000).map(|i| format!("word{i:04}\n")).collect();
    let path = write_list(&dir, "thousand.txt", &content);

    for _ in 0..100 {
        let line = generate_line(&path, 4, " ");
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);
        assert_eq!(line.matches(' ').count(), 3);
        assert_eq!(line.trim_end().split(' ').count(), 4);
    }
}

/// Injected indices 3, 1, 4, 1 over a..e with "-".
#[test]
fn injected_indices_determine_output() {
    let dir = TempDir::new().unwrap();
    let path = write_list(&dir, "letters.txt", "a\nb\nc\nd\ne\n");
    let list = wordlist::read(&path).unwrap();

    let mut source = Replay(VecDeque::from([3, 1, 4, 1]));
    let mut out = Vec::new();
    generate(&list, 4, "-", &mut source, &mut out).unwrap();
    assert_eq!(out, b"d-b-e-b\n");
}

/// Every emitted word belongs to the list, across many runs.
#[test]
fn emitted_words_are_members() {
    let dir = TempDir::new().unwrap();
    let path = write_list(&dir, "xkcd.txt", "correct\nhorse\nbattery\nstaple\n");
    let members: HashSet<&str> = ["correct", "horse", "battery", "staple"].into();

    for _ in 0..200 {
        let line = generate_line(&path, 6, "_");
        for word in line.trim_end().split('_') {
            assert!(members.contains(word), "'{word}' is not in the list");
        }
    }
}

/// All words of a small list show up eventually (draws are not stuck).
#[test]
fn every_word_reachable() {
    let dir = TempDir::new().unwrap();
    let path = write_list(&dir, "xkcd.txt", "correct\nhorse\nbattery\nstaple\n");

    let mut seen = HashSet::new();
    for _ in 0..200 {
        let line = generate_line(&path, 4, " ");
        seen.extend(line.trim_end().split(' ').map(str::to_owned));
    }
    assert_eq!(seen.len(), 4);
}

/// Merged lists with included words, minimum length and camel case.
#[test]
fn extended_options_from_merged_lists() {
    let dir = TempDir::new().unwrap();
    let first = write_list(&dir, "first.txt", "ox\n");
    let second = write_list(&dir, "second.txt", "yak\n");
    let list = wordlist::read_many(&[first, second]).unwrap();

    let mut options = PassphraseOptions {
        words: 3,
        min_chars: 20,
        capitalize: true,
        separator: String::new(),
        ..PassphraseOptions::default()
    };
    options.include_word(b"zebra").unwrap();

    let mut out = Vec::new();
    generate_with(&list, &options, &mut RejectionSampler::os(), &mut out).unwrap();
    let line = String::from_utf8(out).unwrap();
    let body = line.trim_end();

    assert!(body.len() >= 20, "too short: {body}");
    assert!(body.contains("Zebra"));
    assert!(body
        .split(|c: char| c.is_ascii_uppercase())
        .filter(|s| !s.is_empty())
        .all(|s| ["x", "ak", "ebra"].contains(&s)));
}
