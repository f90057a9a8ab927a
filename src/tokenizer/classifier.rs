//! # Token Classification
//!
//! Decides from the character under the cursor which token rule applies and
//! consumes exactly that token. Rules, in priority order:
//!
//! 1. `:=` is an assignment; a `:` followed by anything else is an error
//! 2. `(`, `)` and `;`
//! 3. `0` and `1` are constants (there are no multi-digit numerals)
//! 4. end of input
//! 5. identifiers, reclassified as keywords on an exact spelling match
//! 6. any other character is an error token covering that single character
//!
//! Malformed input still yields a token, so the stream has no gaps. The
//! matching [`ScanError`] travels next to it in [`Classified`].

use nom::{
    bytes::complete::{take_while, take_while1},
    combinator::recognize,
    error::context,
    sequence::pair,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    cursor::{Cursor, Position},
    error::ScanError,
    keyword::Keyword,
    token::{Span, Token, TokenKind},
    ParserResult,
};

/// Which characters may form identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierPolicy {
    /// Any alphabetic character or `_` starts an identifier; any alphanumeric
    /// character or `_` continues it. Combining marks are neither, so a
    /// decomposed letter splits at the mark.
    #[default]
    Unicode,
    /// ASCII letters, digits and `_` only.
    Ascii,
}

impl IdentifierPolicy {
    pub fn is_start(self, c: char) -> bool {
        match self {
            IdentifierPolicy::Unicode => c.is_alphabetic() || c == '_',
            IdentifierPolicy::Ascii => c.is_ascii_alphabetic() || c == '_',
        }
    }

    pub fn is_continue(self, c: char) -> bool {
        match self {
            IdentifierPolicy::Unicode => c.is_alphanumeric() || c == '_',
            IdentifierPolicy::Ascii => c.is_ascii_alphanumeric() || c == '_',
        }
    }
}

/// One classified token plus the error recorded for it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified {
    pub token: Token,
    pub error: Option<ScanError>,
}

impl Classified {
    fn ok(token: Token) -> Self {
        Self { token, error: None }
    }
}

pub fn parse_identifier(input: &str, policy: IdentifierPolicy) -> ParserResult<&str> {
    context(
        "identifier",
        recognize(pair(
            take_while1(|c: char| policy.is_start(c)),
            take_while(|c: char| policy.is_continue(c)),
        )),
    )(input)
}

fn token_at(kind: TokenKind, text: &str, start: Position) -> Token {
    Token {
        kind,
        text: text.to_string(),
        line: start.line,
        column: start.column,
        span: Span {
            start: start.offset,
            end: start.offset + text.len(),
        },
    }
}

/// Produces one token at the cursor, which must already be past any trivia.
pub fn classify(cursor: &mut Cursor<'_>, policy: IdentifierPolicy) -> Classified {
    let start = cursor.position();
    let Some(ch) = cursor.current() else {
        return Classified::ok(token_at(TokenKind::EndOfInput, "", start));
    };

    let kind = match ch {
        ':' if cursor.peek() == Some('=') => {
            cursor.advance_by(2);
            TokenKind::Assignment
        }
        '(' => {
            cursor.advance();
            TokenKind::LeftParen
        }
        ')' => {
            cursor.advance();
            TokenKind::RightParen
        }
        ';' => {
            cursor.advance();
            TokenKind::Semicolon
        }
        '0' | '1' => {
            cursor.advance();
            TokenKind::Constant
        }
        _ => match parse_identifier(cursor.rest(), policy) {
            Ok((_, ident)) => {
                cursor.advance_by(ident.len());
                Keyword::lookup(ident).map_or(TokenKind::Identifier, TokenKind::Keyword)
            }
            Err(_) => {
                cursor.advance();
                let error = ScanError::unexpected_character(ch, start);
                warn!(%error, "scan error");
                return Classified {
                    token: token_at(TokenKind::Error, cursor.slice_from(start.offset), start),
                    error: Some(error),
                };
            }
        },
    };

    Classified::ok(token_at(kind, cursor.slice_from(start.offset), start))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokenizer::error::ScanErrorKind;

    fn classify_one(input: &str) -> Classified {
        classify(&mut Cursor::new(input), IdentifierPolicy::default())
    }

    #[test]
    fn test_assignment() {
        let mut cursor = Cursor::new(":=1");
        let classified = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(classified.token.kind, TokenKind::Assignment);
        assert_eq!(classified.token.text, ":=");
        assert_eq!(classified.error, None);
        assert_eq!(cursor.current(), Some('1'));
    }

    #[test]
    fn test_lone_colon_consumes_one_character() {
        let mut cursor = Cursor::new("::");
        let classified = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(classified.token.kind, TokenKind::Error);
        assert_eq!(classified.token.text, ":");
        assert_eq!(
            classified.error.map(|e| e.kind),
            Some(ScanErrorKind::UnexpectedCharacter(':'))
        );
        assert_eq!(cursor.current(), Some(':'));
    }

    #[test]
    fn test_single_character_tokens() {
        let test_cases = [
            ("(", TokenKind::LeftParen),
            (")", TokenKind::RightParen),
            (";", TokenKind::Semicolon),
            ("0", TokenKind::Constant),
            ("1", TokenKind::Constant),
        ];

        for (input, expected) in test_cases {
            let classified = classify_one(input);
            assert_eq!(classified.token.kind, expected);
            assert_eq!(classified.token.text, input);
        }
    }

    #[test]
    fn test_constant_is_one_digit() {
        let mut cursor = Cursor::new("10");
        let first = classify(&mut cursor, IdentifierPolicy::Unicode);
        let second = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(first.token.text, "1");
        assert_eq!(second.token.text, "0");
        assert_eq!(second.token.column, 2);
    }

    #[test]
    fn test_other_digits_are_errors() {
        let classified = classify_one("2");
        assert_eq!(classified.token.kind, TokenKind::Error);
        assert!(classified.error.is_some());
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let test_cases = [
            ("or", TokenKind::Keyword(Keyword::Or)),
            ("xor", TokenKind::Keyword(Keyword::Xor)),
            ("and", TokenKind::Keyword(Keyword::And)),
            ("not", TokenKind::Keyword(Keyword::Not)),
            ("or2", TokenKind::Identifier),
            ("AND", TokenKind::Identifier),
            ("_tmp_1", TokenKind::Identifier),
        ];

        for (input, expected) in test_cases {
            let classified = classify_one(input);
            assert_eq!(classified.token.kind, expected, "{input}");
            assert_eq!(classified.token.text, input);
        }
    }

    #[test]
    fn test_end_of_input() {
        let mut cursor = Cursor::new("");
        let classified = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(classified.token.kind, TokenKind::EndOfInput);
        assert_eq!(classified.token.text, "");
        assert_eq!(classified.error, None);
    }

    #[test]
    fn test_unicode_identifier_policy() {
        let classified = classify_one("переменная1 x");
        assert_eq!(classified.token.kind, TokenKind::Identifier);
        assert_eq!(classified.token.text, "переменная1");
        assert_eq!(classified.token.span.end, "переменная1".len());
    }

    #[test]
    fn test_combining_mark_is_not_an_identifier_character() {
        let mut cursor = Cursor::new("e\u{301}x");
        let letter = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(letter.token.kind, TokenKind::Identifier);
        assert_eq!(letter.token.text, "e");

        let mark = classify(&mut cursor, IdentifierPolicy::Unicode);
        assert_eq!(mark.token.kind, TokenKind::Error);
        assert_eq!(mark.token.text, "\u{301}");
        assert_eq!(mark.token.column, 2);
        assert_eq!(
            mark.error.map(|e| e.kind),
            Some(ScanErrorKind::UnexpectedCharacter('\u{301}'))
        );

        let precomposed = classify_one("\u{e9}x");
        assert_eq!(precomposed.token.text, "\u{e9}x");
    }

    #[test]
    fn test_ascii_identifier_policy() {
        let mut cursor = Cursor::new("éa");
        let classified = classify(&mut cursor, IdentifierPolicy::Ascii);
        assert_eq!(classified.token.kind, TokenKind::Error);
        assert_eq!(classified.token.text, "é");
        assert_eq!(
            classified.error.map(|e| e.kind),
            Some(ScanErrorKind::UnexpectedCharacter('é'))
        );

        let classified = classify(&mut cursor, IdentifierPolicy::Ascii);
        assert_eq!(classified.token.text, "a");
        assert_eq!(classified.token.column, 2);
    }
}
