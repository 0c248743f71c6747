//! Token definitions for the D# language
//!
//! This module defines the tokens produced by the D# tokenizer. The kind
//! set is closed: it is never extended at runtime, and the pattern for each
//! kind lives in the ordered rule table (see [rules](crate::lexer::rules)).

use serde::{Deserialize, Serialize};
use std::fmt;

/// All token categories in the D# language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Keywords
    Note,
    Play,
    Repeat,
    Melody,
    Chord,

    // Symbols
    /// `//`
    Sharp,
    /// `--`
    Flat,
    /// `=`
    Assign,
    /// `{`
    OpenBlock,
    /// `}`
    CloseBlock,

    // Literals
    /// A double-quoted run of note letters A-G (either case) or `#`.
    String,
    /// A `[...]` literal, kept as one raw lexeme; its contents are not
    /// tokenized further.
    List,
    Number,

    Identifier,

    /// Consumed during the scan but never emitted.
    Whitespace,
    /// Single-character fallback for anything no other rule matches.
    Other,
}

impl TokenKind {
    /// The conventional name of this kind, as used in trace output and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Note => "NOTE",
            TokenKind::Play => "PLAY",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Melody => "MELODY",
            TokenKind::Chord => "CHORD",
            TokenKind::Sharp => "SHARP",
            TokenKind::Flat => "FLAT",
            TokenKind::Assign => "ASSIGN",
            TokenKind::OpenBlock => "OPEN_BLOCK",
            TokenKind::CloseBlock => "CLOSE_BLOCK",
            TokenKind::String => "STRING",
            TokenKind::List => "LIST",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Other => "OTHER",
        }
    }

    /// Check if this kind is one of the five keywords
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Note
                | TokenKind::Play
                | TokenKind::Repeat
                | TokenKind::Melody
                | TokenKind::Chord
        )
    }

    /// Check if this kind is an operator or delimiter symbol
    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            TokenKind::Sharp
                | TokenKind::Flat
                | TokenKind::Assign
                | TokenKind::OpenBlock
                | TokenKind::CloseBlock
        )
    }

    /// Check if this kind is a literal value
    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::String | TokenKind::List | TokenKind::Number)
    }

    /// Check if this kind is consumed but elided from the token stream
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit: a kind plus the exact source substring it
/// covers.
///
/// Tokens own their lexeme, so they outlive the source buffer they were
/// scanned from. The lexeme is never normalized or case-folded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}
