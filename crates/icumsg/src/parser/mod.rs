//! ICU MessageFormat pattern parser.
//!
//! This module parses message patterns into a transient AST consumed by the
//! compiler. The AST is public to enable external tooling (linters,
//! extractors, etc.).

pub mod ast;
pub mod error;
mod pattern;

pub use ast::Node;
pub use error::ParseError;
pub use pattern::parse_pattern;
