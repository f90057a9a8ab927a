//! # boolex: lexical analysis for a small boolean-algebra language
//!
//! Programs are sequences of assignments over the constants `0` and `1`:
//!
//! ```text
//! /* half adder */
//! sum   := a xor b;
//! carry := a and b;
//! ```
//!
//! The crate turns such text into positioned tokens. Malformed input never
//! aborts a scan; it becomes error tokens and error messages so callers always
//! get a complete result.
//!
//! ## Pipeline
//!
//! ```text
//! Source Text → Trivia Skipper → Classifier → Token Stream → AnalysisResult
//! ```
//!
//! * [`tokenizer`]: cursor, trivia, classification and the scanning driver
//! * [`analysis`]: the caller-facing result with counts and rendered messages
//! * [`report`]: table and JSON output
//! * [`config`]: scan and presentation options
//!
//! ```rust
//! let result = boolex::analyze("x := 1 and y;");
//! assert_eq!(result.token_count, 6);
//! assert!(!result.has_errors);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;
pub mod tokenizer;

// Re-exports
pub use analysis::{analyze, analyze_with, AnalysisResult};
pub use error::*;
