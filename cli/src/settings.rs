//! Optional settings file.
//!
//! A JSON document given with `--config`. Every field is optional and
//! command-line flags take precedence over it. Settings are only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use correcthorse_core::{DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT};

use crate::error::CliError;

/// Directory searched for word lists given by name.
pub const DEFAULT_WORDLIST_DIR: &str = "/usr/share/correcthorse";

/// Word list used when none is named.
pub const DEFAULT_WORDLIST: &str = "english";

// ── Settings ───────────────────────────────────────────────────────

/// Defaults for a run, overridable per invocation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Word lists used when none is given on the command line.
    #[serde(default = "default_wordlists")]
    pub wordlists: Vec<String>,

    /// Directory searched for word lists given by name.
    #[serde(default = "default_wordlist_dir")]
    pub wordlist_dir: PathBuf,

    /// Minimum number of words.
    #[serde(default = "default_words")]
    pub words: usize,

    /// Separator between words.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Minimum passphrase length in bytes.
    #[serde(default)]
    pub min_chars: usize,

    /// Capitalize every word.
    #[serde(default)]
    pub camelcase: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wordlists: default_wordlists(),
            wordlist_dir: default_wordlist_dir(),
            words: default_words(),
            separator: default_separator(),
            min_chars: 0,
            camelcase: false,
        }
    }
}

fn default_wordlists() -> Vec<String> {
    vec![DEFAULT_WORDLIST.into()]
}
fn default_wordlist_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WORDLIST_DIR)
}
const fn default_words() -> usize {
    DEFAULT_WORD_COUNT
}
fn default_separator() -> String {
    DEFAULT_SEPARATOR.into()
}

// ── File I/O ───────────────────────────────────────────────────────

impl Settings {
    /// Load settings from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CliError::SettingsRead`] if the file cannot be read.
    /// - [`CliError::SettingsParse`] if it is not a valid settings object.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&contents).map_err(|source| {
            CliError::SettingsParse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Where the word list `name` lives.
    ///
    /// An existing file is used as is; anything else is looked up in
    /// [`wordlist_dir`](Self::wordlist_dir). Absolute names stay absolute.
    #[must_use]
    pub fn resolve_wordlist(&self, name: &Path) -> PathBuf {
        if name.is_file() {
            name.to_path_buf()
        } else {
            self.wordlist_dir.join(name)
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────
