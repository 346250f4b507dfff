//! Error types for `correcthorse-core`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = PassphraseError> = std::result::Result<T, E>;

/// Errors produced while loading word lists or generating passphrases.
#[derive(Debug, Error)]
pub enum PassphraseError {
    /// The word-list file could not be opened (missing, unreadable).
    #[error("cannot open word list {}: {source}", .path.display())]
    Open {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while reading the word list.
    #[error("cannot read word list {}: {source}", .path.display())]
    Read {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line exceeded [`MAX_LINE_BYTES`](crate::wordlist::MAX_LINE_BYTES).
    #[error("word list {}: line {line} is longer than {limit} bytes", .path.display())]
    LineTooLong {
        /// Path being read.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// The configured limit.
        limit: usize,
    },

    /// The backing store could not grow.
    #[error("out of memory while growing the word list")]
    Allocation,

    /// No words available to draw from.
    #[error("word list is empty")]
    EmptyList,

    /// Requested word count is zero.
    #[error("word count must be at least 1, got {0}")]
    InvalidCount(usize),

    /// Requested minimum length is above the maximum.
    #[error(
        "minimum length must be at most {max} bytes, got {0}",
        max = crate::passphrase::MAX_MIN_CHARS
    )]
    InvalidMinChars(usize),

    /// An included word is empty after trimming.
    #[error("included words must not be blank")]
    InvalidWord,

    /// The output sink rejected the passphrase.
    #[error("cannot write passphrase: {0}")]
    Write(#[source] io::Error),

    /// The operating-system entropy source is unavailable.
    #[error("random source unavailable: {0}")]
    RandomSource(String),
}

impl From<std::collections::TryReserveError> for PassphraseError {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::Allocation
    }
}
