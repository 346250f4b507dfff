//! Error types for the `correcthorse` binary.

use std::io;
use std::path::PathBuf;

use correcthorse_core::PassphraseError;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or generation failed (delegated from the core crate).
    #[error(transparent)]
    Core(#[from] PassphraseError),

    /// The settings file could not be read.
    #[error("cannot read settings {}: {source}", .path.display())]
    SettingsRead {
        /// Path given with `--config`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The settings file is not valid settings JSON.
    #[error("invalid settings {}: {source}", .path.display())]
    SettingsParse {
        /// Path given with `--config`.
        path: PathBuf,
        /// Parser failure, with line and column.
        #[source]
        source: serde_json::Error,
    },
}
