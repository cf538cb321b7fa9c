//! Word frequency table.
//!
//! The table owns one [`WordEntry`] per distinct word. Entries live in a
//! vector in order of first appearance and are located through a hash index,
//! so recording a word is O(1) amortized regardless of vocabulary size.

use ahash::AHashMap;
use log::debug;

use crate::analysis::token::Token;
use crate::error::{Result, WordRankError};

/// A distinct word and the number of times it was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences, always at least 1.
    pub frequency: u64,
    /// Ordinal of the token that first produced this word.
    pub first_seen: u64,
}

/// Accumulates tokens into word counts.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Entries in order of first appearance.
    entries: Vec<WordEntry>,
    /// Word to position in `entries`.
    index: AHashMap<String, usize>,
    /// Number of recorded tokens, duplicates included.
    total_words: u64,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: AHashMap::new(),
            total_words: 0,
        }
    }

    /// Build a table from a token stream, stopping at the first error.
    pub fn from_tokens<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Token>>,
    {
        let mut table = FrequencyTable::new();
        for token in tokens {
            table.record(&token?.text)?;
        }

        debug!(
            "aggregated {} tokens into {} distinct words",
            table.total_words,
            table.entries.len()
        );
        Ok(table)
    }

    /// Count one occurrence of `word`.
    ///
    /// The only failure is running out of memory while adding a new word.
    pub fn record(&mut self, word: &str) -> Result<()> {
        if let Some(&slot) = self.index.get(word) {
            self.entries[slot].frequency += 1;
        } else {
            self.entries.try_reserve(1).map_err(|e| {
                WordRankError::resource_exhausted(format!(
                    "cannot grow word table past {} entries: {e}",
                    self.entries.len()
                ))
            })?;
            self.index.try_reserve(1).map_err(|e| {
                WordRankError::resource_exhausted(format!(
                    "cannot grow word index past {} entries: {e}",
                    self.entries.len()
                ))
            })?;

            self.index.insert(word.to_string(), self.entries.len());
            self.entries.push(WordEntry {
                word: word.to_string(),
                frequency: 1,
                first_seen: self.total_words,
            });
        }

        self.total_words += 1;
        Ok(())
    }

    /// Look up the entry for `word`.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&slot| &self.entries[slot])
    }

    /// Get the frequency of `word`, 0 if it was never recorded.
    pub fn frequency(&self, word: &str) -> u64 {
        self.get(word).map_or(0, |entry| entry.frequency)
    }

    /// Total number of recorded tokens.
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Number of distinct words.
    pub fn distinct_words(&self) -> usize {
        self.entries.len()
    }

    /// Check if no token has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in order of first appearance.
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Iterate over entries in order of first appearance.
    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
