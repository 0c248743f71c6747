//! The ordered rule table for the D# tokenizer.
//!
//! Evaluation order is part of the language contract: every keyword literal
//! ("note", "play", ...) is also a valid IDENTIFIER, so keyword rules must
//! be tried before the IDENTIFIER rule or keywords are never recognized as
//! such. The table is therefore an explicitly ordered slice, never a
//! hash-keyed structure with unspecified iteration order.
//!
//! All matchers are anchored (`\A`): a rule only matches if it matches
//! starting exactly at the cursor, and each matcher is compiled once when
//! the table is first used.

use crate::lexer::tokens::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// A single tokenization rule: a kind and the anchored matcher that
/// recognizes it.
pub struct Rule {
    pub kind: TokenKind,
    matcher: Regex,
}

impl Rule {
    fn new(kind: TokenKind, pattern: &str) -> Self {
        let matcher = Regex::new(&format!(r"\A(?:{pattern})"))
            .expect("rule patterns are static and must compile");
        Self { kind, matcher }
    }

    /// Byte length of the match at the start of `input`, if this rule
    /// matches there.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.matcher.find(input).map(|m| m.end())
    }
}

/// Rules in priority order: keywords, then symbols, then STRING and LIST,
/// then NUMBER, IDENTIFIER, WHITESPACE, with OTHER as the unconditional
/// single-character fallback.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(TokenKind::Note, "note"),
        Rule::new(TokenKind::Play, "play"),
        Rule::new(TokenKind::Repeat, "repeat"),
        Rule::new(TokenKind::Melody, "melody"),
        Rule::new(TokenKind::Chord, "chord"),
        Rule::new(TokenKind::Sharp, "//"),
        Rule::new(TokenKind::Flat, "--"),
        Rule::new(TokenKind::Assign, "="),
        Rule::new(TokenKind::OpenBlock, r"\{"),
        Rule::new(TokenKind::CloseBlock, r"\}"),
        Rule::new(TokenKind::String, r#""[A-Ga-g#]+""#),
        // Non-greedy: a list ends at the first `]`, not the last.
        Rule::new(TokenKind::List, r"\[.*?\]"),
        Rule::new(TokenKind::Number, r"\d+"),
        Rule::new(TokenKind::Identifier, r"[a-zA-Z_]\w*"),
        Rule::new(TokenKind::Whitespace, r"\s+"),
        Rule::new(TokenKind::Other, "."),
    ]
});

/// The rule table, in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}
