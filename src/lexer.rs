//! Tokenizer for the D# music notation language.
//!
//! The scan is table-driven: an ordered list of anchored rules is tried at
//! the cursor and the first match wins (see [rules]). Declaration order is
//! part of the language contract — every keyword literal is also a valid
//! IDENTIFIER prefix, so keyword rules must be tried first or keywords are
//! never recognized as such.
//!
//! Whitespace is consumed but elided from the output, and the unconditional
//! OTHER fallback makes every character consumable, so tokenization never
//! fails: malformed input degrades to OTHER tokens for the downstream
//! parser to reject. Grammar construction and interpretation of the token
//! stream are out of scope for this crate.

pub mod detokenizer;
pub mod lexer_impl;
pub mod rules;
pub mod tokens;
pub mod trace;

pub use detokenizer::detokenize;
pub use lexer_impl::Tokenizer;
pub use tokens::{Token, TokenKind};
pub use trace::{NullSink, RecordingSink, TokenSink, TracingSink};

/// Convenience function to tokenize a string and collect all tokens.
///
/// Whitespace tokens are dropped from the returned sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::new(source).tokenize()
}

/// Convenience function to tokenize a string and collect tokens with their
/// byte ranges. Unlike [tokenize], whitespace tokens are kept, so the
/// returned stream covers the entire source.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    Tokenizer::new(source).tokenize_with_spans()
}
