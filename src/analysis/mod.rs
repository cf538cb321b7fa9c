//! Text analysis module for wordrank.
//!
//! This module turns raw input bytes into normalized word tokens.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::*;
pub use tokenizer::*;
