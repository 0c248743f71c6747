//! Trace sinks for tokenizer diagnostics.
//!
//! The tokenizer can report every consumed token, whitespace included, to
//! an injectable sink. This is observability only: token output is
//! identical with or without a sink, and no consumer may rely on the trace.

use crate::lexer::tokens::TokenKind;

/// Receives one notification per consumed token.
pub trait TokenSink {
    fn record(&mut self, kind: TokenKind, lexeme: &str);
}

/// Discards every record. Used when no trace is wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TokenSink for NullSink {
    fn record(&mut self, _kind: TokenKind, _lexeme: &str) {}
}

/// Forwards each consumed token to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TokenSink for TracingSink {
    fn record(&mut self, kind: TokenKind, lexeme: &str) {
        tracing::debug!(kind = %kind, lexeme, "matched token");
    }
}

/// Collects consumed tokens, so tests can assert on the trace.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub records: Vec<(TokenKind, String)>,
}

impl TokenSink for RecordingSink {
    fn record(&mut self, kind: TokenKind, lexeme: &str) {
        self.records.push((kind, lexeme.to_string()));
    }
}
