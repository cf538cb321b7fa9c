//! Command line argument parsing for the wordrank CLI using clap.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{WordRankConfig, resolve_limit};
use crate::error::Result;
use crate::frequency::ranker::TieBreak;
use crate::report::reporter::OutputFormat;

/// wordrank - print the most frequent words in a text file
#[derive(Parser, Debug, Clone)]
#[command(name = "wordrank")]
#[command(about = "Print the most frequent words in a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordRankArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Number of words to display [default: 20]
    #[arg(short = 'w', long = "words", value_name = "NUM", allow_hyphen_values = true)]
    pub words: Option<String>,

    /// Show relative frequency instead of counts
    #[arg(short, long)]
    pub relative: bool,

    /// Order of words with the same frequency [default: lexicographic]
    #[arg(short = 't', long, value_enum)]
    pub tie_break: Option<TieBreak>,

    /// Longest word kept; longer words are truncated [default: 511]
    #[arg(long, value_name = "NUM")]
    pub max_word_len: Option<usize>,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Text file to read; "-" or nothing reads standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Where the text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Stdin,
    File(&'a Path),
}

impl WordRankArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Get the input source.
    pub fn input(&self) -> Input<'_> {
        match &self.file {
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        }
    }

    /// Merge the configuration file (if any) with command line overrides.
    pub fn build_config(&self) -> Result<WordRankConfig> {
        let mut config = match &self.config {
            Some(path) => WordRankConfig::from_file(path)?,
            None => WordRankConfig::default(),
        };

        if let Some(raw) = &self.words {
            config.limit = resolve_limit(raw);
        }
        if self.relative {
            config.relative = true;
        }
        if let Some(tie_break) = self.tie_break {
            config.tie_break = tie_break;
        }
        if let Some(max_word_len) = self.max_word_len {
            config.max_word_len = max_word_len;
        }

        Ok(config)
    }
}
