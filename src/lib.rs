//! # dsharp-lex
//!
//! A tokenizer for the D# music notation language.
//!
//! D# is a small DSL for declaring notes, chords and melodies and playing
//! them back:
//!
//! ```text
//! note n = "C#"
//! melody tune = [n, n]
//! play tune
//! ```
//!
//! This crate turns D# source text into a flat, ordered sequence of
//! classified tokens for a downstream parser. See the [lexer] module for
//! the scan rules and their precedence contract.

pub mod lexer;

pub use lexer::{tokenize, tokenize_with_spans, Token, TokenKind, Tokenizer};
