//! `correcthorse-core`: word-list loading and uniform passphrase selection.
//!
//! No network, no async, no persisted state. The only I/O is reading the
//! word-list file and writing to a caller-supplied sink.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod wordlist;

pub mod random;

pub mod passphrase;

pub use error::{PassphraseError, Result};
pub use passphrase::{
    generate, generate_with, IncludedWords, PassphraseOptions, DEFAULT_SEPARATOR,
    DEFAULT_WORD_COUNT, MAX_MIN_CHARS,
};
pub use random::{IndexSource, RejectionSampler};
pub use wordlist::{read, read_many, trim, Word, WordList, MAX_LINE_BYTES};
