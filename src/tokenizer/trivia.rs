//! # Trivia Handling
//!
//! Whitespace and comments separate tokens but are never emitted as tokens.
//!
//! ## Recognized Trivia
//!
//! * **Whitespace**: space, tab, carriage return, newline
//! * **Line Comments**: `// text`, up to but not including the newline
//! * **Block Comments**: `/* text */`, not nested
//!
//! A block comment that is still open at end of input is consumed to the end and
//! reported as [`ScanErrorKind::UnterminatedComment`](super::error::ScanErrorKind).
//! A lone `/` is not trivia; the classifier rejects it.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_until, take_while1},
    combinator::recognize,
    error::context,
    sequence::{delimited, preceded},
};
use tracing::{trace, warn};

use super::{cursor::Cursor, error::ScanError, ParserResult};

const BLOCK_COMMENT_OPEN: &str = "/*";

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub fn parse_whitespace(input: &str) -> ParserResult<&str> {
    context("whitespace", take_while1(is_whitespace))(input)
}

pub fn parse_line_comment(input: &str) -> ParserResult<&str> {
    context(
        "line comment",
        recognize(preceded(tag("//"), take_till(|c: char| c == '\n'))),
    )(input)
}

pub fn parse_block_comment(input: &str) -> ParserResult<&str> {
    context(
        "block comment",
        recognize(delimited(
            tag(BLOCK_COMMENT_OPEN),
            take_until("*/"),
            tag("*/"),
        )),
    )(input)
}

/// Recognizes one trivia region: a whitespace run or a complete comment.
pub fn parse_trivia(input: &str) -> ParserResult<&str> {
    alt((parse_whitespace, parse_line_comment, parse_block_comment))(input)
}

/// Moves the cursor past all trivia in front of the next token.
///
/// Returns the error for an unterminated block comment, in which case the cursor
/// is left at end of input.
pub fn skip_trivia(cursor: &mut Cursor<'_>) -> Option<ScanError> {
    loop {
        let rest = cursor.rest();
        match parse_trivia(rest) {
            Ok((_, trivia)) => {
                trace!(len = trivia.len(), line = cursor.position().line, "skip trivia");
                cursor.advance_by(trivia.len());
            }
            Err(_) if rest.starts_with(BLOCK_COMMENT_OPEN) => {
                cursor.advance_by(rest.len());
                let error = ScanError::unterminated_comment(cursor.position());
                warn!(%error, "scan error");
                return Some(error);
            }
            Err(_) => return None,
        }
    }
}
