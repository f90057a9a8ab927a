//! # Scanner
//!
//! Drives trivia skipping and classification over one input until end of input.
//! Every malformed construct turns into an error token and/or a recorded
//! [`ScanError`]; a scan always runs to the end of its input.

use serde::Serialize;
use tracing::debug;

use super::{
    classifier::{classify, Classified, IdentifierPolicy},
    cursor::Cursor,
    error::ScanError,
    token::{Token, TokenKind},
    trivia::skip_trivia,
};
use crate::config::ScanConfig;

/// Finished scan: the stored tokens (end of input excluded) and the errors, in
/// source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl Analysis {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn error_token_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.kind.is_error()).count()
    }

    pub fn success_count(&self) -> usize {
        self.token_count() - self.error_token_count()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Single-use scanner over one input. [`Scanner::analyze`] consumes it.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    policy: IdentifierPolicy,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, &ScanConfig::default())
    }

    pub fn with_config(input: &'a str, config: &ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            policy: config.identifiers,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Skips trivia and classifies the next token. Returns an end-of-input token
    /// once the input is exhausted, and keeps returning it afterwards.
    pub fn next_token(&mut self) -> Token {
        if let Some(error) = skip_trivia(&mut self.cursor) {
            self.errors.push(error);
        }

        let Classified { token, error } = classify(&mut self.cursor, self.policy);
        if let Some(error) = error {
            self.errors.push(error);
        }
        token
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn analyze(mut self) -> Analysis {
        loop {
            let token = self.next_token();
            if token.kind == TokenKind::EndOfInput {
                break;
            }
            debug!(%token, "token");
            self.tokens.push(token);
        }

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "scan finished"
        );

        Analysis {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}
