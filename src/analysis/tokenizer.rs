//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first stage of the counting pipeline: they read the
//! input sequentially and split it into normalized word tokens.
//!
//! # Available Tokenizers
//!
//! - [`ascii_alphabetic::AsciiAlphabeticTokenizer`] - Maximal runs of ASCII
//!   letters, folded to lowercase
//!
//! # Examples
//!
//! ```
//! use wordrank::analysis::tokenizer::Tokenizer;
//! use wordrank::analysis::tokenizer::ascii_alphabetic::AsciiAlphabeticTokenizer;
//!
//! let tokenizer = AsciiAlphabeticTokenizer::new();
//! let words: Vec<String> = tokenizer
//!     .tokenize_str("Hello, world!")
//!     .map(|token| token.unwrap().text)
//!     .collect();
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

use std::io::Read;

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert a byte stream into tokens.
///
/// Implementations hold configuration only, so calling [`Tokenizer::tokenize`]
/// twice on equal inputs yields equal token sequences.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given input into a lazy stream of tokens.
    ///
    /// The input is read sequentially, only as far as the consumer pulls
    /// tokens. Read failures surface as `Err` items and end the stream.
    fn tokenize<'a>(&self, input: Box<dyn Read + 'a>) -> TokenStream<'a>;

    /// Tokenize an in-memory string.
    fn tokenize_str<'a>(&self, text: &'a str) -> TokenStream<'a> {
        self.tokenize(Box::new(text.as_bytes()))
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod ascii_alphabetic;
