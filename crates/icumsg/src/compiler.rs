//! Lowers parsed patterns into [`CompiledMessage`] values.
//!
//! Compilation happens once per distinct pattern, typically at catalog load
//! time; the result is cached by the caller and interpolated many times. A
//! malformed pattern never aborts catalog loading: it is logged and degraded
//! to a literal message carrying the raw pattern text.

use crate::parser::{Node, parse_pattern};
use crate::types::{CompiledMessage, Token};

/// Compile a message pattern.
///
/// Compilation is referentially transparent: the same pattern always yields
/// a structurally equal [`CompiledMessage`].
///
/// # Example
///
/// ```
/// use icumsg::{CompiledMessage, compile};
///
/// // Pure-text patterns collapse to a plain string.
/// assert_eq!(compile("Hello!"), CompiledMessage::Literal("Hello!".into()));
/// ```
pub fn compile(pattern: &str) -> CompiledMessage {
    compile_with(pattern, |text| text.to_string())
}

/// Compile a message pattern, transforming literal text through `map_text`.
///
/// `map_text` sees every literal chunk, including those inside case bodies,
/// and never touches argument or case semantics. Development-mode
/// instrumentation uses this to mark translated text; production callers use
/// [`compile`].
///
/// A pattern that fails to parse is logged once here and returned unchanged
/// as a literal message, so a single malformed catalog entry degrades to
/// showing its raw pattern instead of failing the render.
pub fn compile_with(pattern: &str, map_text: impl Fn(&str) -> String) -> CompiledMessage {
    match parse_pattern(pattern) {
        Ok(nodes) => lower(nodes, &map_text),
        Err(error) => {
            tracing::error!(%error, pattern, "failed to compile message pattern");
            CompiledMessage::Literal(pattern.to_string())
        }
    }
}

/// Lower a node list, collapsing pure text to a literal message.
fn lower(nodes: Vec<Node>, map_text: &dyn Fn(&str) -> String) -> CompiledMessage {
    if nodes.iter().all(|node| matches!(node, Node::Content(_))) {
        let mut text = String::new();
        for node in nodes {
            if let Node::Content(chunk) = node {
                text.push_str(&map_text(&chunk));
            }
        }
        return CompiledMessage::Literal(text);
    }

    let tokens = nodes
        .into_iter()
        .map(|node| lower_node(node, map_text))
        .collect();
    CompiledMessage::Tokens(tokens)
}

fn lower_node(node: Node, map_text: &dyn Fn(&str) -> String) -> Token {
    match node {
        Node::Content(text) => Token::Literal(map_text(&text)),
        Node::Argument(name) => Token::Arg(name),
        Node::Octothorpe => Token::Octothorpe,
        Node::Function { name, key, style } => Token::FormattedArg {
            name,
            key,
            style: style
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        },
        Node::CaseBlock {
            name,
            kind,
            offset,
            cases,
        } => Token::CaseBlock {
            name,
            kind,
            offset,
            cases: cases
                .into_iter()
                .map(|(key, body)| {
                    let key = key.strip_prefix('=').unwrap_or(&key).to_string();
                    (key, lower(body, map_text))
                })
                .collect(),
        },
    }
}
