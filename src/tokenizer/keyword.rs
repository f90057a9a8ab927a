//! # Keyword Table
//!
//! The language reserves exactly four spellings: `or`, `xor`, `and`, `not`.
//! Matching is exact and case-sensitive; `Or`, `AND` or `or2` are identifiers.
//!
//! The [`Keyword`] enum derives its lookup from `strum`, so the table is a
//! generated `match` with no runtime initialization.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, AsRefStr, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Keyword {
    Or,
    Xor,
    And,
    Not,
}

impl Keyword {
    /// Returns the keyword spelled exactly as `ident`, if any.
    pub fn lookup(ident: &str) -> Option<Self> {
        ident.parse().ok()
    }
}
