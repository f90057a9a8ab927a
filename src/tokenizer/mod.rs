//! # Tokenizer Component
//!
//! Lexical analysis of boolean-algebra programs such as
//!
//! ```text
//! // toggle the flag
//! flag := not (a and b) xor 1;
//! ```
//!
//! The tokenizer turns raw text into an ordered list of positioned tokens and
//! keeps going past malformed input, recording what it could not accept.
//!
//! ## Component Structure
//!
//! * [`cursor`]: read position, current character, one character of look-ahead
//! * [`trivia`]: whitespace and comment skipping
//! * [`classifier`]: token rules, identifier policy
//! * [`scanner`]: the driver that runs the above until end of input
//! * [`keyword`]: the closed keyword table
//! * [`token`]: token types and display labels
//! * [`error`]: scan errors
//!
//! ## Usage Example
//!
//! ```rust
//! use boolex::tokenizer::{scanner::Scanner, token::TokenKind};
//!
//! let analysis = Scanner::new("x := 1;").analyze();
//! assert_eq!(analysis.tokens.len(), 4);
//! assert_eq!(analysis.tokens[3].kind, TokenKind::Semicolon);
//! assert_eq!(analysis.tokens[1].kind, TokenKind::Assignment);
//! assert!(!analysis.has_errors());
//! ```

use nom::{error::VerboseError, IResult};

pub mod classifier;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod scanner;
pub mod token;
pub mod trivia;


pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
