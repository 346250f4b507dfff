//! `correcthorse`: thin command-line shell around `correcthorse-core`.
//!
//! Resolves word lists and options from the command line and the optional
//! settings file, then prints the requested passphrases.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod args;
pub mod error;
pub mod logging;
pub mod settings;

use std::io::Write;
use std::path::PathBuf;

use zeroize::Zeroize;

use correcthorse_core::{
    generate_with, wordlist, IncludedWords, PassphraseOptions, RejectionSampler,
};

pub use args::Cli;
pub use error::CliError;
pub use settings::Settings;

/// Load the settings named on the command line, or the defaults.
///
/// # Errors
///
/// Returns the [`Settings::load`] error for an explicit `--config` file.
pub fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    cli.config
        .as_deref()
        .map_or_else(|| Ok(Settings::default()), Settings::load)
}

/// Word-list paths for this run: positional arguments first, then the
/// settings file, each resolved against the word-list directory.
#[must_use]
pub fn wordlist_paths(cli: &Cli, settings: &Settings) -> Vec<PathBuf> {
    let names: Vec<PathBuf> = if cli.wordlists.is_empty() {
        settings.wordlists.iter().map(PathBuf::from).collect()
    } else {
        cli.wordlists.clone()
    };
    names
        .iter()
        .map(|name| settings.resolve_wordlist(name))
        .collect()
}

/// Merge command-line flags over settings into generation options.
///
/// # Errors
///
/// Returns [`CliError::Core`] if an included word is blank.
pub fn passphrase_options(cli: &Cli, settings: &Settings) -> Result<PassphraseOptions, CliError> {
    let mut options = PassphraseOptions {
        words: cli.words.unwrap_or(settings.words),
        min_chars: cli.min_chars.unwrap_or(settings.min_chars),
        include: IncludedWords::new(),
        capitalize: cli.camelcase || settings.camelcase,
        separator: cli
            .separator
            .clone()
            .unwrap_or_else(|| settings.separator.clone()),
    };
    for word in &cli.include {
        options.include_word(word.as_bytes())?;
    }
    Ok(options)
}

/// Execute one invocation, writing passphrases to `out`.
///
/// Included words are wiped from `cli` once they have been copied into the
/// generation options, which wipe their own copies when dropped.
///
/// # Errors
///
/// Any settings, loading or generation failure. Nothing is written to `out`
/// unless the word lists loaded and the options are valid.
pub fn run<W: Write + ?Sized>(mut cli: Cli, out: &mut W) -> Result<(), CliError> {
    let settings = load_settings(&cli)?;
    let paths = wordlist_paths(&cli, &settings);
    tracing::debug!(?paths, "resolved word lists");

    let options = passphrase_options(&cli, &settings);
    for word in &mut cli.include {
        word.zeroize();
    }
    let options = options?;

    let list = wordlist::read_many(&paths)?;
    tracing::info!(words = list.len(), lists = paths.len(), "word lists loaded");

    let mut source = RejectionSampler::os();
    for _ in 0..cli.count {
        generate_with(&list, &options, &mut source, out)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
