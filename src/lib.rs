//! # wordrank
//!
//! Count the words of a text and rank them by frequency.
//!
//! ## Features
//!
//! - Lazy, streaming tokenization of ASCII alphabetic words
//! - O(1) amortized counting with a hash-indexed frequency table
//! - Deterministic ranking with a selectable tie-break policy
//! - Absolute or relative frequency output, as text columns or JSON
//!
//! ## Example
//!
//! ```
//! use wordrank::config::WordRankConfig;
//! use wordrank::pipeline;
//!
//! let config = WordRankConfig::default().with_limit(2);
//! let mut out = Vec::new();
//! let mut diag = Vec::new();
//! pipeline::run(
//!     "the cat and the hat".as_bytes(),
//!     &config,
//!     &config.report_options(),
//!     &mut out,
//!     &mut diag,
//! )
//! .unwrap();
//!
//! let first = String::from_utf8(out).unwrap();
//! assert!(first.starts_with("the "));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod frequency;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::analysis::token::Token;
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::ascii_alphabetic::AsciiAlphabeticTokenizer;
    pub use crate::config::WordRankConfig;
    pub use crate::error::{Result, WordRankError};
    pub use crate::frequency::{FrequencyTable, RankedList, Ranker, TieBreak, WordEntry};
    pub use crate::report::{OutputFormat, ReportMode, ReportOptions, Reporter};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
