//! Reconstructs source text from a spanned token stream.

use std::ops::Range;

use crate::lexer::tokens::Token;

/// Concatenates the lexemes of a spanned token stream.
///
/// Over the output of
/// [tokenize_with_spans](crate::lexer::tokenize_with_spans) this reproduces
/// the original source exactly, whitespace included: the consumed spans
/// tile the whole input even though whitespace is dropped from the plain
/// token sequence.
pub fn detokenize(tokens: &[(Token, Range<usize>)]) -> String {
    tokens
        .iter()
        .map(|(token, _)| token.lexeme.as_str())
        .collect()
}
