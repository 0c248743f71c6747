//! Implementation of the D# tokenizer
//!
//! The tokenizer owns its source text and a single cursor. Each step tries
//! the ordered rule table at the cursor and consumes the first anchored
//! match; the OTHER fallback guarantees at least one character is consumed
//! per step, so the scan always terminates and never fails.

use std::ops::Range;

use crate::lexer::rules::rules;
use crate::lexer::tokens::{Token, TokenKind};
use crate::lexer::trace::{NullSink, TokenSink};

/// Scans one source buffer left to right, classifying one token at a time.
///
/// A `Tokenizer` is constructed from a source string, driven once to
/// completion and then discarded. It is also an [Iterator]: the lazy,
/// single-pass, forward-only variant of [tokenize](Self::tokenize), with
/// identical output.
pub struct Tokenizer {
    source: String,
    cursor: usize,
}

impl Tokenizer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            cursor: 0,
        }
    }

    fn is_at_end(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Matches one token at the cursor and advances past it.
    ///
    /// Rules are tried in table order and the first anchored match wins.
    /// When no rule matches, exactly one character is consumed as OTHER.
    /// Either way the cursor advances, so every call makes progress.
    ///
    /// The cursor must not be at the end of input.
    fn match_token(&mut self, sink: &mut dyn TokenSink) -> Token {
        debug_assert!(!self.is_at_end(), "match_token called at end of input");
        let rest = &self.source[self.cursor..];
        let matched = rules()
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule.kind, len)));
        let token = match matched {
            Some((kind, len)) => Token::new(kind, &rest[..len]),
            // Unreachable while the table ends in the unconditional OTHER
            // rule; kept so the scan still makes progress if it ever stops.
            None => {
                let ch = rest.chars().next().expect("cursor is inside the source");
                Token::new(TokenKind::Other, ch.to_string())
            }
        };
        self.cursor += token.lexeme.len();
        sink.record(token.kind, &token.lexeme);
        token
    }

    /// Tokenizes the full source, dropping whitespace tokens.
    ///
    /// Never fails: malformed input (an unterminated STRING or LIST, stray
    /// symbols) degrades to shorter matches or single-character OTHER
    /// tokens. Rejecting such programs is the downstream parser's job.
    pub fn tokenize(self) -> Vec<Token> {
        self.tokenize_traced(&mut NullSink)
    }

    /// Like [tokenize](Self::tokenize), reporting every consumed token to
    /// `sink` — whitespace included, even though it is elided from the
    /// returned sequence.
    pub fn tokenize_traced(mut self, sink: &mut dyn TokenSink) -> Vec<Token> {
        let mut tokens = Vec::new();
        while !self.is_at_end() {
            let token = self.match_token(sink);
            if !token.kind.is_trivia() {
                tokens.push(token);
            }
        }
        tokens
    }

    /// Tokenizes the full source, keeping every consumed token together
    /// with its byte range. Whitespace is kept, so the spans tile the
    /// source exactly and concatenating the lexemes reconstructs it.
    pub fn tokenize_with_spans(mut self) -> Vec<(Token, Range<usize>)> {
        let mut tokens = Vec::new();
        while !self.is_at_end() {
            let start = self.cursor;
            let token = self.match_token(&mut NullSink);
            tokens.push((token, start..self.cursor));
        }
        tokens
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.is_at_end() {
            let token = self.match_token(&mut NullSink);
            if !token.kind.is_trivia() {
                return Some(token);
            }
        }
        None
    }
}
