//! Caller-facing analysis result.
//!
//! [`analyze`] is the single entry point for presentation layers: it scans the
//! text with a fresh [`Scanner`] and returns everything needed for display,
//! with labels and error messages already rendered in the configured locale.

use serde::Serialize;
use tracing::info;

use crate::{
    config::Config,
    tokenizer::{
        scanner::{Analysis, Scanner},
        token::{Locale, Token, TokenKind},
    },
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedToken {
    pub kind: TokenKind,
    pub label: &'static str,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl ReportedToken {
    fn new(token: Token, locale: Locale) -> Self {
        Self {
            kind: token.kind,
            label: token.kind.label(locale),
            text: token.text,
            line: token.line,
            column: token.column,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The analyzed text, echoed back for display next to the tokens.
    pub input_text: String,
    pub tokens: Vec<ReportedToken>,
    pub errors: Vec<String>,
    pub has_errors: bool,
    pub token_count: usize,
    pub success_count: usize,
    pub error_count: usize,
}

impl AnalysisResult {
    pub fn from_analysis(input: &str, analysis: Analysis, locale: Locale) -> Self {
        let token_count = analysis.token_count();
        let success_count = analysis.success_count();
        let error_count = analysis.error_token_count();
        let has_errors = analysis.has_errors();

        Self {
            input_text: input.to_string(),
            errors: analysis.errors.iter().map(|e| e.message(locale)).collect(),
            tokens: analysis
                .tokens
                .into_iter()
                .map(|t| ReportedToken::new(t, locale))
                .collect(),
            has_errors,
            token_count,
            success_count,
            error_count,
        }
    }
}

pub fn analyze(input: &str) -> AnalysisResult {
    analyze_with(input, &Config::default())
}

#[tracing::instrument(level = "debug", skip(input, config), fields(len = input.len()))]
pub fn analyze_with(input: &str, config: &Config) -> AnalysisResult {
    let analysis = Scanner::with_config(input, &config.scan).analyze();
    let result = AnalysisResult::from_analysis(input, analysis, config.report.locale);
    info!(
        tokens = result.token_count,
        errors = result.errors.len(),
        "analysis complete"
    );
    result
}
