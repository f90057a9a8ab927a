//! # Tokens
//!
//! Token values produced by the scanner and their human-readable labels.
//!
//! Comments and whitespace are trivia and never become tokens. The end-of-input
//! token only signals the driver to stop; it is never stored in a token sequence.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use super::keyword::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Identifier,
    /// `0` or `1`
    Constant,
    /// `:=`
    Assignment,
    Keyword(Keyword),
    LeftParen,
    RightParen,
    Semicolon,
    Error,
    EndOfInput,
}

impl TokenKind {
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Error)
    }

    /// Display label shown to users next to each token.
    pub fn label(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => match self {
                TokenKind::Identifier => "Identifier",
                TokenKind::Constant => "Constant",
                TokenKind::Assignment => "Assignment",
                TokenKind::Keyword(Keyword::Or) => "Keyword (OR)",
                TokenKind::Keyword(Keyword::Xor) => "Keyword (XOR)",
                TokenKind::Keyword(Keyword::And) => "Keyword (AND)",
                TokenKind::Keyword(Keyword::Not) => "Keyword (NOT)",
                TokenKind::LeftParen => "Left parenthesis",
                TokenKind::RightParen => "Right parenthesis",
                TokenKind::Semicolon => "Semicolon",
                TokenKind::Error => "ERROR",
                TokenKind::EndOfInput => "End of file",
            },
            Locale::Ru => match self {
                TokenKind::Identifier => "Идентификатор",
                TokenKind::Constant => "Константа",
                TokenKind::Assignment => "Присваивание",
                TokenKind::Keyword(Keyword::Or) => "Ключевое слово (OR)",
                TokenKind::Keyword(Keyword::Xor) => "Ключевое слово (XOR)",
                TokenKind::Keyword(Keyword::And) => "Ключевое слово (AND)",
                TokenKind::Keyword(Keyword::Not) => "Ключевое слово (NOT)",
                TokenKind::LeftParen => "Левая скобка",
                TokenKind::RightParen => "Правая скобка",
                TokenKind::Semicolon => "Точка с запятой",
                TokenKind::Error => "ОШИБКА",
                TokenKind::EndOfInput => "Конец файла",
            },
        }
    }
}

/// Language used for token labels and error messages.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Byte range of a token in the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact matched text; empty for end of input.
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    pub fn label(&self, locale: Locale) -> &'static str {
        self.kind.label(locale)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({:?}) at {}:{}",
            self.kind.label(Locale::En),
            self.text,
            self.line,
            self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    fn all_kinds() -> Vec<TokenKind> {
        let mut kinds = vec![
            TokenKind::Identifier,
            TokenKind::Constant,
            TokenKind::Assignment,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::Error,
            TokenKind::EndOfInput,
        ];
        kinds.extend(Keyword::iter().map(TokenKind::Keyword));
        kinds
    }

    #[test]
    fn test_labels_are_distinct_per_locale() {
        for locale in Locale::iter() {
            let labels: HashSet<_> = all_kinds().iter().map(|k| k.label(locale)).collect();
            assert_eq!(labels.len(), all_kinds().len(), "{locale}");
            assert!(labels.iter().all(|l| !l.is_empty()));
        }
    }

    #[test]
    fn test_fixed_labels() {
        assert_eq!(TokenKind::Identifier.label(Locale::En), "Identifier");
        assert_eq!(
            TokenKind::Keyword(Keyword::Xor).label(Locale::En),
            "Keyword (XOR)"
        );
        assert_eq!(TokenKind::Error.label(Locale::Ru), "ОШИБКА");
        assert_eq!(TokenKind::Semicolon.label(Locale::Ru), "Точка с запятой");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }
}
