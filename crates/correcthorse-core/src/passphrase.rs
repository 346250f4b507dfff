//! Passphrase selection and formatting.
//!
//! Provides two entry points:
//! - [`generate`]: `count` words drawn with replacement, in draw order
//! - [`generate_with`]: the same draw extended with included words, a
//!   minimum length and capitalization ([`PassphraseOptions`])
//!
//! The line is assembled in a zeroize-on-drop buffer and handed to the sink
//! in one `write_all`, so a failed draw never leaves partial output behind.

use std::fmt;
use std::io::Write;

use zeroize::Zeroizing;

use crate::error::{PassphraseError, Result};
use crate::random::IndexSource;
use crate::wordlist::{Word, WordList};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default number of words per passphrase.
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Largest accepted minimum length, in bytes.
///
/// Every word is at least one byte, so reaching it never takes more than
/// this many draws.
pub const MAX_MIN_CHARS: usize = 4096;

/// Default separator between words.
pub const DEFAULT_SEPARATOR: &str = " ";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Words the passphrase must contain, wiped when dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct IncludedWords(Vec<Word>);

impl IncludedWords {
    /// An empty set of included words.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.0.iter()
    }

    fn push(&mut self, word: Word) {
        self.0.push(word);
    }
}

impl<'a> IntoIterator for &'a IncludedWords {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Drop for IncludedWords {
    fn drop(&mut self) {
        for word in &mut self.0 {
            word.wipe();
        }
    }
}

/// How a passphrase is put together.
#[derive(Clone, PartialEq, Eq)]
pub struct PassphraseOptions {
    /// Minimum number of words, included words counted.
    pub words: usize,
    /// Minimum total length in bytes, separators not counted.
    pub min_chars: usize,
    /// Words the passphrase must contain. Their position is shuffled.
    pub include: IncludedWords,
    /// Uppercase the first ASCII byte of every word.
    pub capitalize: bool,
    /// Inserted between consecutive words.
    pub separator: String,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORD_COUNT,
            min_chars: 0,
            include: IncludedWords::new(),
            capitalize: false,
            separator: DEFAULT_SEPARATOR.to_owned(),
        }
    }
}

/// Included words are user secrets; only their number is shown.
impl fmt::Debug for PassphraseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PassphraseOptions")
            .field("words", &self.words)
            .field("min_chars", &self.min_chars)
            .field("include", &format_args!("[{} hidden]", self.include.len()))
            .field("capitalize", &self.capitalize)
            .field("separator", &self.separator)
            .finish()
    }
}

impl PassphraseOptions {
    /// Add a word the passphrase must contain.
    ///
    /// # Errors
    ///
    /// Returns [`PassphraseError::InvalidWord`] if `raw` is blank after
    /// trimming.
    pub fn include_word(&mut self, raw: &[u8]) -> Result<()> {
        let word = Word::from_line(raw).ok_or(PassphraseError::InvalidWord)?;
        self.include.push(word);
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.words == 0 {
            return Err(PassphraseError::InvalidCount(self.words));
        }
        if self.min_chars > MAX_MIN_CHARS {
            return Err(PassphraseError::InvalidMinChars(self.min_chars));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Write `count` words drawn from `list`, joined by `separator` and
/// terminated by `\n`, to `out`.
///
/// Words are drawn with replacement: each position takes
/// `list[source.uniform_index(list.len())]`, in draw order.
///
/// # Errors
///
/// - [`PassphraseError::InvalidCount`] if `count` is 0.
/// - [`PassphraseError::EmptyList`] if `list` is empty.
/// - [`PassphraseError::RandomSource`] if a draw fails; nothing is written.
/// - [`PassphraseError::Write`] if the sink fails; output may be partial.
pub fn generate<S, W>(
    list: &WordList,
    count: usize,
    separator: &str,
    source: &mut S,
    out: &mut W,
) -> Result<()>
where
    S: IndexSource + ?Sized,
    W: Write + ?Sized,
{
    let options = PassphraseOptions {
        words: count,
        separator: separator.to_owned(),
        ..PassphraseOptions::default()
    };
    generate_with(list, &options, source, out)
}

/// Write one passphrase built according to `options` to `out`.
///
/// Words are drawn until there are at least `options.words` of them and
/// their combined length reaches `options.min_chars`. Included words count
/// toward both. When words are included the final order is shuffled with
/// `source`; otherwise it is the draw order.
///
/// # Errors
///
/// - [`PassphraseError::InvalidCount`] if the word count is 0.
/// - [`PassphraseError::InvalidMinChars`] if `min_chars` exceeds [`MAX_MIN_CHARS`].
/// - [`PassphraseError::EmptyList`] if `list` is empty.
/// - [`PassphraseError::Allocation`] if the output buffer cannot be reserved.
/// - [`PassphraseError::RandomSource`] if a draw fails; nothing is written.
/// - [`PassphraseError::Write`] if the sink fails; output may be partial.
pub fn generate_with<S, W>(
    list: &WordList,
    options: &PassphraseOptions,
    source: &mut S,
    out: &mut W,
) -> Result<()>
where
    S: IndexSource + ?Sized,
    W: Write + ?Sized,
{
    options.validate()?;
    if list.is_empty() {
        return Err(PassphraseError::EmptyList);
    }

    let picked = pick(list, options, source)?;
    let line = render(&picked, options)?;

    out.write_all(&line).map_err(PassphraseError::Write)?;
    out.flush().map_err(PassphraseError::Write)
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn pick<'a, S>(
    list: &'a WordList,
    options: &'a PassphraseOptions,
    source: &mut S,
) -> Result<Vec<&'a Word>>
where
    S: IndexSource + ?Sized,
{
    let mut picked: Vec<&Word> = options.include.iter().collect();
    let mut chars = picked
        .iter()
        .map(|w| w.len())
        .fold(0usize, usize::saturating_add);

    while picked.len() < options.words || chars < options.min_chars {
        let index = source.uniform_index(list.len())?;
        let word = list.get(index).ok_or_else(|| {
            PassphraseError::RandomSource(format!(
                "index {index} out of range for {} words",
                list.len()
            ))
        })?;
        chars = chars.saturating_add(word.len());
        picked.push(word);
    }

    if !options.include.is_empty() {
        shuffle(&mut picked, source)?;
    }

    Ok(picked)
}

/// Fisher-Yates shuffle driven by `source`.
fn shuffle<T, S>(items: &mut [T], source: &mut S) -> Result<()>
where
    S: IndexSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = source.uniform_index(i.saturating_add(1))?;
        if j > i {
            return Err(PassphraseError::RandomSource(format!(
                "index {j} out of range for {} items",
                i.saturating_add(1)
            )));
        }
        items.swap(i, j);
    }
    Ok(())
}

fn render(words: &[&Word], options: &PassphraseOptions) -> Result<Zeroizing<Vec<u8>>> {
    let separator = options.separator.as_bytes();
    let capacity = words
        .iter()
        .map(|w| w.len())
        .fold(0usize, usize::saturating_add)
        .saturating_add(separator.len().saturating_mul(words.len()))
        .saturating_add(1);

    // Reserved up front: a reallocation would leave an unzeroed copy behind.
    let mut line = Zeroizing::new(Vec::new());
    line.try_reserve_exact(capacity)?;

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            line.extend_from_slice(separator);
        }
        let start = line.len();
        line.extend_from_slice(word.as_bytes());
        if options.capitalize {
            if let Some(first) = line.get_mut(start) {
                first.make_ascii_uppercase();
            }
        }
    }
    line.push(b'\n');

    Ok(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
