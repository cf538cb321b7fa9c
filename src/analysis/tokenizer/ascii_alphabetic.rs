//! ASCII alphabetic tokenizer implementation.

use std::io::{self, BufRead, BufReader, Read};

use log::debug;

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, WordRankError};

/// Longest word kept by default; letters past this bound are dropped.
pub const DEFAULT_MAX_WORD_LEN: usize = 511;

/// A tokenizer that emits maximal runs of ASCII letters, lowercased.
///
/// Every other byte (digits, punctuation, whitespace and any non-ASCII byte)
/// separates words and never becomes part of one. Runs longer than
/// `max_word_len` are cut to their first `max_word_len` letters and the
/// resulting token is flagged as truncated.
#[derive(Clone, Debug)]
pub struct AsciiAlphabeticTokenizer {
    max_word_len: usize,
}

impl AsciiAlphabeticTokenizer {
    /// Create a new tokenizer with the default word bound.
    pub fn new() -> Self {
        AsciiAlphabeticTokenizer {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }

    /// Create a tokenizer with a custom word bound.
    pub fn with_max_word_len(max_word_len: usize) -> Result<Self> {
        if max_word_len == 0 {
            return Err(WordRankError::invalid_argument(
                "max_word_len must be at least 1",
            ));
        }

        Ok(AsciiAlphabeticTokenizer { max_word_len })
    }

    /// Get the word bound.
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Start a token stream over `reader`.
    ///
    /// Unlike [`Tokenizer::tokenize`] this keeps the concrete stream type,
    /// which exposes [`AlphabeticTokens::emitted`].
    pub fn stream<R: Read>(&self, reader: R) -> AlphabeticTokens<R> {
        AlphabeticTokens {
            reader: BufReader::new(reader),
            max_word_len: self.max_word_len,
            buffer: Vec::with_capacity(32),
            word_start: 0,
            offset: 0,
            truncated: false,
            emitted: 0,
            finished: false,
        }
    }
}

impl Default for AsciiAlphabeticTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for AsciiAlphabeticTokenizer {
    fn tokenize<'a>(&self, input: Box<dyn Read + 'a>) -> TokenStream<'a> {
        Box::new(self.stream(input))
    }

    fn name(&self) -> &'static str {
        "ascii_alphabetic"
    }
}

/// Lazy token stream produced by [`AsciiAlphabeticTokenizer::stream`].
pub struct AlphabeticTokens<R> {
    reader: BufReader<R>,
    max_word_len: usize,
    /// Lowercased letters of the word being built
    buffer: Vec<u8>,
    word_start: usize,
    /// Bytes consumed from the reader so far
    offset: usize,
    truncated: bool,
    emitted: usize,
    finished: bool,
}

impl<R> AlphabeticTokens<R> {
    /// Number of tokens emitted so far, duplicates included.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn take_word(&mut self, end_offset: usize) -> Option<Token> {
        if self.buffer.is_empty() {
            return None;
        }

        let text: String = self.buffer.iter().map(|&b| b as char).collect();
        self.buffer.clear();

        let mut token = Token::with_offsets(text, self.emitted, self.word_start, end_offset);
        if self.truncated {
            debug!(
                "word at byte {} truncated from {} to {} letters",
                self.word_start,
                end_offset - self.word_start,
                self.max_word_len
            );
            token = token.truncate();
            self.truncated = false;
        }

        self.emitted += 1;
        Some(token)
    }
}

impl<R: Read> Iterator for AlphabeticTokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let chunk = match self.reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };

            if chunk.is_empty() {
                self.finished = true;
                let end = self.offset;
                return self.take_word(end).map(Ok);
            }

            let mut used = 0;
            let mut terminated = false;
            for (i, &byte) in chunk.iter().enumerate() {
                used = i + 1;
                if byte.is_ascii_alphabetic() {
                    if self.buffer.is_empty() {
                        self.word_start = self.offset + i;
                    }
                    if self.buffer.len() < self.max_word_len {
                        self.buffer.push(byte.to_ascii_lowercase());
                    } else {
                        self.truncated = true;
                    }
                } else if !self.buffer.is_empty() {
                    terminated = true;
                    break;
                }
            }

            self.reader.consume(used);
            self.offset += used;

            if terminated {
                // the terminator byte itself was consumed
                let end = self.offset - 1;
                return self.take_word(end).map(Ok);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out one byte per call, so every byte lands in its
    /// own buffer chunk.
    struct OneByteReader<'a> {
        data: &'a [u8],
    }

    impl Read for OneByteReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.split_first() {
                Some((&first, rest)) if !buf.is_empty() => {
                    buf[0] = first;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn words(text: &str) -> Vec<String> {
        AsciiAlphabeticTokenizer::new()
            .tokenize_str(text)
            .map(|token| token.unwrap().text)
            .collect()
    }

    #[test]
    fn test_non_alphabetic_bytes_separate_words() {
        assert_eq!(words("foo123bar, foo-bar!"), vec!["foo", "bar", "foo", "bar"]);
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(words("Cat cat CAT"), vec!["cat", "cat", "cat"]);
    }

    #[test]
    fn test_last_word_without_terminator() {
        assert_eq!(words("alpha beta"), vec!["alpha", "beta"]);
        assert_eq!(words("single"), vec!["single"]);
    }

    #[test]
    fn test_no_empty_tokens() {
        assert!(words("").is_empty());
        assert!(words("  \n\t 42 ... !!").is_empty());
        assert_eq!(words("...a...."), vec!["a"]);
    }

    #[test]
    fn test_non_ascii_bytes_are_separators() {
        // 'é' is two non-ASCII bytes in UTF-8
        assert_eq!(words("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens: Vec<Token> = AsciiAlphabeticTokenizer::new()
            .tokenize_str("  ab, cd")
            .map(|token| token.unwrap())
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].position, 0);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (2, 4));
        assert_eq!(tokens[1].position, 1);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (6, 8));
    }

    #[test]
    fn test_words_spanning_buffer_chunks() {
        let tokenizer = AsciiAlphabeticTokenizer::new();
        let reader = OneByteReader {
            data: b"Hello, World 99 again",
        };
        let tokens: Vec<Token> = tokenizer.stream(reader).map(|t| t.unwrap()).collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "world", "again"]);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (7, 12));
    }

    #[test]
    fn test_long_word_is_truncated() {
        let tokenizer = AsciiAlphabeticTokenizer::with_max_word_len(4).unwrap();
        let tokens: Vec<Token> = tokenizer
            .tokenize_str("abcdefgh ij ABCDE")
            .map(|t| t.unwrap())
            .collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "abcd");
        assert!(tokens[0].is_truncated());
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 8));
        assert_eq!(tokens[1].text, "ij");
        assert!(!tokens[1].is_truncated());
        assert_eq!(tokens[2].text, "abcd");
        assert!(tokens[2].is_truncated());
    }

    #[test]
    fn test_default_bound_truncates_at_511() {
        let long = "x".repeat(2000);
        let text = format!("{long} tail");
        let tokens: Vec<Token> = AsciiAlphabeticTokenizer::new()
            .tokenize_str(&text)
            .map(|t| t.unwrap())
            .collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].len(), DEFAULT_MAX_WORD_LEN);
        assert!(tokens[0].is_truncated());
        assert_eq!(tokens[1].text, "tail");
    }

    #[test]
    fn test_zero_word_len_is_rejected() {
        assert!(AsciiAlphabeticTokenizer::with_max_word_len(0).is_err());
    }

    #[test]
    fn test_tokenizing_twice_is_identical() {
        let tokenizer = AsciiAlphabeticTokenizer::new();
        let text = "The quick brown fox; the LAZY dog... 2x fox";

        let first: Vec<Token> = tokenizer.tokenize_str(text).map(|t| t.unwrap()).collect();
        let second: Vec<Token> = tokenizer.tokenize_str(text).map(|t| t.unwrap()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emitted_counts_duplicates() {
        let tokenizer = AsciiAlphabeticTokenizer::new();
        let mut stream = tokenizer.stream("a a b, a".as_bytes());
        assert_eq!(stream.emitted(), 0);

        let count = stream.by_ref().count();
        assert_eq!(count, 4);
        assert_eq!(stream.emitted(), 4);
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_read_error_ends_stream() {
        let tokenizer = AsciiAlphabeticTokenizer::new();
        let mut stream = tokenizer.stream(FailingReader);

        match stream.next() {
            Some(Err(WordRankError::Io(e))) => {
                assert_eq!(e.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("Expected I/O error, got {other:?}"),
        }
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(AsciiAlphabeticTokenizer::new().name(), "ascii_alphabetic");
    }
}
