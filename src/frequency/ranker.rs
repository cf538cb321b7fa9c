//! Ranking of word entries by frequency.
//!
//! Entries are ordered by descending frequency. Ties are broken by a
//! [`TieBreak`] policy so the order is identical on every run over the same
//! input. This matters when a truncated top-N cuts through a group of words
//! sharing the same count.
//!
//! # Examples
//!
//! ```
//! use wordrank::frequency::{FrequencyTable, Ranker, TieBreak};
//!
//! let mut table = FrequencyTable::new();
//! for word in ["b", "a", "b", "c", "a", "b"] {
//!     table.record(word).unwrap();
//! }
//!
//! let ranked = Ranker::new(TieBreak::Lexicographic).rank(&table);
//! let order: Vec<_> = ranked.iter().map(|e| (e.word.as_str(), e.frequency)).collect();
//! assert_eq!(order, vec![("b", 3), ("a", 2), ("c", 1)]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::WordRankError;
use crate::frequency::table::{FrequencyTable, WordEntry};

/// Order applied to entries with equal frequency.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Alphabetical order of the words.
    #[default]
    Lexicographic,
    /// Order in which the words first appeared in the input.
    FirstSeen,
}

impl TieBreak {
    fn compare(self, a: &WordEntry, b: &WordEntry) -> Ordering {
        match self {
            TieBreak::Lexicographic => a.word.cmp(&b.word),
            TieBreak::FirstSeen => a.first_seen.cmp(&b.first_seen),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::Lexicographic => write!(f, "lexicographic"),
            TieBreak::FirstSeen => write!(f, "first-seen"),
        }
    }
}

impl FromStr for TieBreak {
    type Err = WordRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexicographic" => Ok(TieBreak::Lexicographic),
            "first-seen" => Ok(TieBreak::FirstSeen),
            other => Err(WordRankError::invalid_argument(format!(
                "unknown tie-break policy '{other}'"
            ))),
        }
    }
}

/// Sorts the entries of a completed [`FrequencyTable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    tie_break: TieBreak,
}

impl Ranker {
    /// Create a ranker with the given tie-break policy.
    pub fn new(tie_break: TieBreak) -> Self {
        Ranker { tie_break }
    }

    /// Order every entry of `table` by descending frequency.
    pub fn rank<'a>(&self, table: &'a FrequencyTable) -> RankedList<'a> {
        let mut entries: Vec<&'a WordEntry> = table.iter().collect();
        let tie_break = self.tie_break;
        entries.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| tie_break.compare(a, b))
        });

        RankedList { entries }
    }
}

/// Entries borrowed from a [`FrequencyTable`] in rank order.
#[derive(Debug, Clone)]
pub struct RankedList<'a> {
    entries: Vec<&'a WordEntry>,
}

impl<'a> RankedList<'a> {
    /// Number of ranked entries (distinct words).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there is nothing to rank.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at 0-based `rank`.
    pub fn get(&self, rank: usize) -> Option<&'a WordEntry> {
        self.entries.get(rank).copied()
    }

    /// The first `n` entries, or all of them if there are fewer.
    pub fn top(&self, n: usize) -> &[&'a WordEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Iterate over entries in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &'a WordEntry> + '_ {
        self.entries.iter().copied()
    }
}
