//! Compiled message representation.
//!
//! A [`CompiledMessage`] is the lowered, cacheable form of a parsed pattern.
//! Pure-text patterns collapse to a plain string; everything else becomes an
//! ordered token sequence. Compiled messages are immutable, structurally
//! comparable, and serializable so catalogs can ship them precompiled and
//! skip parsing at runtime.

use serde::{Deserialize, Serialize};

/// A message lowered from its pattern, ready for repeated interpolation.
///
/// The common case of a pattern with no arguments compiles to
/// [`CompiledMessage::Literal`], which interpolates without any token walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompiledMessage {
    /// A pure-text message. Returned verbatim at interpolation time.
    Literal(String),
    /// A message with interpolated parts.
    Tokens(Vec<Token>),
}

impl CompiledMessage {
    /// True if this message carries no interpolation tokens.
    pub fn is_literal(&self) -> bool {
        matches!(self, CompiledMessage::Literal(_))
    }
}

impl From<&str> for CompiledMessage {
    fn from(s: &str) -> Self {
        CompiledMessage::Literal(s.to_string())
    }
}

impl From<String> for CompiledMessage {
    fn from(s: String) -> Self {
        CompiledMessage::Literal(s)
    }
}

/// One element of a compiled token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Literal text, appended verbatim.
    Literal(String),
    /// The `#` placeholder. Substituted with the offset-adjusted value while
    /// interpolating a plural or selectordinal case body; inert elsewhere.
    Octothorpe,
    /// Simple argument interpolation: `{name}`.
    Arg(String),
    /// Argument with a named formatter: `{name, number, percent}`.
    FormattedArg {
        name: String,
        key: String,
        style: Option<String>,
    },
    /// A plural, selectordinal, or select block with compiled case bodies.
    ///
    /// Case order matches the source pattern. Exact-match keys are stored
    /// with their `=` prefix stripped.
    CaseBlock {
        name: String,
        kind: CaseKind,
        offset: i64,
        cases: Vec<(String, CompiledMessage)>,
    },
}

/// The selection rule used by a [`Token::CaseBlock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseKind {
    /// Cardinal plural selection (`one`, `few`, `other`, ...).
    Plural,
    /// Ordinal plural selection (`1st`, `2nd`, ...).
    SelectOrdinal,
    /// Selection on arbitrary string keys.
    Select,
}
