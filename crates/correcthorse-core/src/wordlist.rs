//! Word-list storage and loading.
//!
//! A word list is a plain text file with one candidate word per line.
//! Lines are trimmed of ASCII whitespace and blank lines are skipped.
//! Words are kept as raw bytes: the loader does not interpret encodings.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;
use std::path::Path;

use zeroize::Zeroize;

use crate::error::{PassphraseError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Longest accepted line, in bytes, not counting the `\n` terminator.
///
/// A carriage return before the `\n` counts toward the limit. Longer lines
/// are rejected with [`PassphraseError::LineTooLong`], never truncated.
pub const MAX_LINE_BYTES: usize = 4096;

/// Bytes read per line before giving up: the limit plus the terminator.
const LINE_READ_LIMIT: u64 = (MAX_LINE_BYTES as u64).saturating_add(1);

/// Trimmable bytes: space, tab, LF, VT, FF, CR.
///
/// `u8::is_ascii_whitespace` leaves out vertical tab, so the set is spelled
/// out here.
const fn is_trimmable(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Strip leading and trailing ASCII whitespace from `bytes`.
#[must_use]
pub fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_trimmable(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_trimmable(b))
        .map_or(start, |i| i.saturating_add(1));
    bytes.get(start..end).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Word
// ---------------------------------------------------------------------------

/// A single non-empty dictionary word.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word(Box<[u8]>);

impl Word {
    /// Build a word from a raw line, trimming surrounding whitespace.
    ///
    /// Returns `None` when nothing is left after trimming.
    #[must_use]
    pub fn from_line(line: &[u8]) -> Option<Self> {
        let trimmed = trim(line);
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.into()))
        }
    }

    /// The raw bytes of the word.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Overwrite the bytes with zeros. The length is kept.
    pub(crate) fn wipe(&mut self) {
        self.0.zeroize();
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

// ---------------------------------------------------------------------------
// WordList
// ---------------------------------------------------------------------------

/// An ordered, indexable collection of words.
///
/// Backed by a contiguous vector: O(1) indexed reads and amortized O(1)
/// appends. The list owns every word it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Append `word` to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::Allocation`] if the list cannot grow. The
    /// list is left unchanged in that case.
    pub fn push(&mut self, word: Word) -> Result<()> {
        self.words.try_reserve(1)?;
        self.words.push(word);
        Ok(())
    }

    /// Move every word of `other` to the end of this list.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::Allocation`] if the list cannot grow. The
    /// list is left unchanged in that case.
    pub fn extend_from(&mut self, other: Self) -> Result<()> {
        self.words.try_reserve(other.words.len())?;
        self.words.extend(other.words);
        Ok(())
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Iterate over the words in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Load a word list from any buffered reader.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// - [`PassphraseError::Read`] on an I/O error mid-stream.
    /// - [`PassphraseError::LineTooLong`] if a line exceeds [`MAX_LINE_BYTES`].
    /// - [`PassphraseError::Allocation`] if the list cannot grow.
    pub fn from_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<Self> {
        let mut list = Self::new();
        let mut buf = Vec::with_capacity(64);
        let mut line = 0usize;

        loop {
            buf.clear();
            let read = reader
                .by_ref()
                .take(LINE_READ_LIMIT)
                .read_until(b'\n', &mut buf)
                .map_err(|source| PassphraseError::Read {
                    path: origin.to_path_buf(),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line = line.saturating_add(1);

            if buf.last() != Some(&b'\n') && buf.len() > MAX_LINE_BYTES {
                return Err(PassphraseError::LineTooLong {
                    path: origin.to_path_buf(),
                    line,
                    limit: MAX_LINE_BYTES,
                });
            }

            if let Some(word) = Word::from_line(&buf) {
                list.push(word)?;
            }
        }

        Ok(list)
    }
}

impl Index<usize> for WordList {
    type Output = Word;

    /// Panics when `index >= len()`; callers range-check first.
    fn index(&self, index: usize) -> &Word {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

// ---------------------------------------------------------------------------
// Loading from files
// ---------------------------------------------------------------------------

/// Load the word list stored at `path`.
///
/// The file is closed before this function returns, whatever the outcome.
///
/// # Errors
///
/// - [`PassphraseError::Open`] if the file cannot be opened.
/// - Any error of [`WordList::from_reader`].
pub fn read(path: impl AsRef<Path>) -> Result<WordList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PassphraseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let list = WordList::from_reader(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), words = list.len(), "word list loaded");
    Ok(list)
}

/// Load several word lists and concatenate them in the given order.
///
/// # Errors
///
/// Fails with the first error of [`read`]; no partial list is returned.
pub fn read_many<P: AsRef<Path>>(paths: &[P]) -> Result<WordList> {
    let mut merged = WordList::new();
    for path in paths {
        merged.extend_from(read(path)?)?;
    }
    Ok(merged)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
