//! # Scan Errors
//!
//! Malformed input never stops a scan. Each problem is recorded as a
//! [`ScanError`] next to the token stream and scanning carries on.

use serde::Serialize;
use thiserror::Error;

use super::{cursor::Position, token::Locale};

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScanErrorKind {
    /// A character no token rule accepts, including a `:` without `=`.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    /// `/*` reached end of input before `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind} (line {line}, column {column})")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ScanError {
    pub fn unexpected_character(ch: char, at: Position) -> Self {
        Self {
            kind: ScanErrorKind::UnexpectedCharacter(ch),
            line: at.line,
            column: at.column,
        }
    }

    pub fn unterminated_comment(at: Position) -> Self {
        Self {
            kind: ScanErrorKind::UnterminatedComment,
            line: at.line,
            column: at.column,
        }
    }

    /// Message text with the position embedded, in the requested locale.
    pub fn message(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Ru => {
                let what = match &self.kind {
                    ScanErrorKind::UnexpectedCharacter(ch) => {
                        format!("Неожиданный символ '{}'", ch)
                    }
                    ScanErrorKind::UnterminatedComment => "Незакрытый комментарий".to_string(),
                };
                format!("{} (строка {}, столбец {})", what, self.line, self.column)
            }
        }
    }
}
