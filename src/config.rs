//! Configuration for a word counting run.
//!
//! A [`WordRankConfig`] can be built in code, loaded from a JSON file, or
//! assembled by the command line layer. Missing fields take their defaults.
//!
//! ```json
//! {
//!   "limit": 10,
//!   "relative": true,
//!   "tie_break": "first-seen",
//!   "max_word_len": 64
//! }
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::ascii_alphabetic::{AsciiAlphabeticTokenizer, DEFAULT_MAX_WORD_LEN};
use crate::error::{Result, WordRankError};
use crate::frequency::ranker::{Ranker, TieBreak};
use crate::report::reporter::{DEFAULT_LIMIT, ReportMode, ReportOptions};

/// Settings for tokenizing, ranking and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordRankConfig {
    /// Number of ranked entries to display; 0 means the default.
    pub limit: usize,

    /// Print relative frequencies instead of counts.
    pub relative: bool,

    /// Order of words with equal frequency.
    pub tie_break: TieBreak,

    /// Longest word kept by the tokenizer; 0 means the default.
    pub max_word_len: usize,
}

impl Default for WordRankConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            relative: false,
            tie_break: TieBreak::Lexicographic,
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl WordRankConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| {
            WordRankError::config(format!("{}: {e}", path.display()))
        })
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the display limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enable or disable relative frequencies.
    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Set the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Set the tokenizer word bound.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Build the tokenizer described by this configuration.
    pub fn tokenizer(&self) -> AsciiAlphabeticTokenizer {
        match AsciiAlphabeticTokenizer::with_max_word_len(self.max_word_len) {
            Ok(tokenizer) => tokenizer,
            Err(_) => {
                warn!(
                    "max_word_len must be positive, using {}",
                    DEFAULT_MAX_WORD_LEN
                );
                AsciiAlphabeticTokenizer::new()
            }
        }
    }

    /// Build the ranker described by this configuration.
    pub fn ranker(&self) -> Ranker {
        Ranker::new(self.tie_break)
    }

    /// Build report options from this configuration.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions::new(self.limit)
            .with_mode(ReportMode::from_relative(self.relative))
    }
}

/// Interpret a user-supplied limit.
///
/// Non-numeric and non-positive values fall back to the default limit with
/// a warning instead of failing.
pub fn resolve_limit(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        Ok(n) => {
            warn!("limit {n} is not positive, using {DEFAULT_LIMIT}");
            DEFAULT_LIMIT
        }
        Err(_) => {
            warn!("limit '{raw}' is not a number, using {DEFAULT_LIMIT}");
            DEFAULT_LIMIT
        }
    }
}
