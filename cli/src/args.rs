//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Generate passphrases made of random dictionary words.
///
/// Words are drawn uniformly, with replacement, using the operating-system
/// random source. Word lists are plain text files with one word per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Word list files, or names looked up in the word-list directory
    /// [default: english]
    #[arg(value_name = "WORDLIST")]
    pub wordlists: Vec<PathBuf>,

    /// Minimum number of words [default: 4]
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Separator between words [default: " "]
    #[arg(short, long = "sep", value_name = "SEP", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Minimum passphrase length in bytes [default: 0]
    #[arg(short = 'c', long = "chars", value_name = "N")]
    pub min_chars: Option<usize>,

    /// Word(s) to include; repeat the flag or separate with commas
    #[arg(short, long, value_name = "WORD", value_delimiter = ',')]
    pub include: Vec<String>,

    /// Capitalize every word (CamelCase with an empty separator)
    #[arg(short = 'u', long)]
    pub camelcase: bool,

    /// Number of passphrases to print, one per line
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// JSON settings file supplying defaults
    #[arg(long, value_name = "PATH", env = "CORRECTHORSE_CONFIG")]
    pub config: Option<PathBuf>,
}
