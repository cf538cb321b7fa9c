//! Token types for text analysis.
//!
//! A [`Token`] is one normalized word produced by a tokenizer. Tokens are
//! transient: the frequency table consumes them one by one and keeps only
//! the word text.
//!
//! # Examples
//!
//! ```
//! use wordrank::analysis::token::Token;
//!
//! let token = Token::with_offsets("hello", 0, 6, 11);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert_eq!(token.end_offset - token.start_offset, 5);
//! assert!(!token.is_truncated());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single normalized word extracted from the input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The normalized (lowercase ASCII) text of the token
    pub text: String,

    /// Ordinal of the token in the stream (0-based)
    pub position: usize,

    /// Byte offset where the alphabetic run starts in the input
    pub start_offset: usize,

    /// Byte offset one past the end of the alphabetic run in the input.
    ///
    /// For truncated tokens this still covers the whole run, so
    /// `end_offset - start_offset` can exceed `text.len()`.
    pub end_offset: usize,

    /// Whether letters beyond the tokenizer's word bound were dropped
    pub truncated: bool,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            truncated: false,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            truncated: false,
        }
    }

    /// Mark this token as truncated.
    pub fn truncate(mut self) -> Self {
        self.truncated = true;
        self
    }

    /// Check if this token lost letters to the word bound.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Get the length of the token text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A lazy stream of tokens. Items are fallible because the input is read
/// while the stream is consumed.
pub type TokenStream<'a> = Box<dyn Iterator<Item = Result<Token>> + 'a>;
