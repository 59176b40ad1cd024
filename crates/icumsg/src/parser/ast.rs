//! AST types for parsed message patterns.
//!
//! Nodes are produced by the parser and consumed immediately by the
//! compiler; they are not part of the cached message representation.

use crate::types::CaseKind;

/// A node of a parsed message pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Literal text, with escape sequences already resolved.
    Content(String),
    /// A simple argument: `{name}`.
    Argument(String),
    /// An argument with a named formatter: `{name, number, percent}`.
    ///
    /// The style text is kept verbatim; the compiler trims it.
    Function {
        name: String,
        key: String,
        style: Option<String>,
    },
    /// The `#` placeholder inside a plural or selectordinal case body.
    Octothorpe,
    /// A plural, selectordinal, or select block.
    ///
    /// Case keys are kept verbatim, including the `=` prefix of exact
    /// matches. Case order matches the source pattern.
    CaseBlock {
        name: String,
        kind: CaseKind,
        offset: i64,
        cases: Vec<(String, Vec<Node>)>,
    },
}
