//! Message pattern parser using winnow.
//!
//! Parses ICU MessageFormat patterns into an AST. Handles:
//! - Literal text segments
//! - Simple arguments: {name}
//! - Formatted arguments: {name, number, style}
//! - plural / selectordinal / select blocks with offset and exact cases
//! - Octothorpe (#) inside plural case bodies
//! - Apostrophe escaping: '' and quoted runs before syntax characters

use winnow::ascii::dec_int;
use winnow::combinator::{cut_err, opt};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::Node;
use super::error::ParseError;
use crate::types::CaseKind;

/// Parse a message pattern into an AST.
pub fn parse_pattern(input: &str) -> Result<Vec<Node>, ParseError> {
    let mut remaining = input;
    match pattern(&mut remaining, false) {
        Ok(nodes) => {
            if remaining.is_empty() {
                Ok(nodes)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            if remaining.is_empty() {
                Err(ParseError::UnexpectedEof { line, column })
            } else {
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!("parse error: {}", e),
                })
            }
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a node sequence until an unmatched `}` or end of input.
///
/// `in_plural` marks plural/selectordinal case bodies, where `#` becomes an
/// octothorpe node instead of literal text. The flag propagates through
/// nested select bodies.
fn pattern(input: &mut &str, in_plural: bool) -> ModalResult<Vec<Node>> {
    let mut nodes = Vec::new();
    loop {
        match node(input, in_plural) {
            Ok(n) => nodes.push(n),
            Err(ErrMode::Backtrack(_)) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(merge_content(nodes))
}

/// Merge adjacent Content nodes into single nodes.
fn merge_content(nodes: Vec<Node>) -> Vec<Node> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Content(text) => {
                if let Some(Node::Content(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Node::Content(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single node, dispatching on the first character.
fn node(input: &mut &str, in_plural: bool) -> ModalResult<Node> {
    match input.chars().next() {
        Some('\'') => apostrophe(input, in_plural),
        Some('#') if in_plural => '#'.value(Node::Octothorpe).parse_next(input),
        Some('{') => expression(input, in_plural),
        Some('}') | None => Err(ErrMode::Backtrack(ContextError::new())),
        Some(_) => literal_char(input),
    }
}

/// Parse a single literal character. Syntax characters are dispatched before
/// this parser runs, so any remaining character is content.
fn literal_char(input: &mut &str) -> ModalResult<Node> {
    any.map(|c: char| Node::Content(c.to_string()))
        .parse_next(input)
}

/// Parse an apostrophe escape.
///
/// `''` is a literal apostrophe. An apostrophe immediately followed by a
/// syntax character (`{`, `}`, or `#` inside plural context) opens a quoted
/// run that extends to the next lone apostrophe, or to end of input when
/// unterminated. Any other apostrophe is plain text.
fn apostrophe(input: &mut &str, in_plural: bool) -> ModalResult<Node> {
    '\''.parse_next(input)?;

    if opt('\'').parse_next(input)?.is_some() {
        return Ok(Node::Content("'".to_string()));
    }

    let quotable = |c: char| c == '{' || c == '}' || (in_plural && c == '#');
    match input.chars().next() {
        Some(c) if quotable(c) => {
            let mut text = String::new();
            loop {
                match input.chars().next() {
                    None => break,
                    Some('\'') => {
                        *input = &input[1..];
                        if input.starts_with('\'') {
                            *input = &input[1..];
                            text.push('\'');
                        } else {
                            break;
                        }
                    }
                    Some(c) => {
                        *input = &input[c.len_utf8()..];
                        text.push(c);
                    }
                }
            }
            Ok(Node::Content(text))
        }
        _ => Ok(Node::Content("'".to_string())),
    }
}

/// Parse a `{...}` expression: argument, formatted argument, or case block.
fn expression(input: &mut &str, in_plural: bool) -> ModalResult<Node> {
    '{'.parse_next(input)?;
    ws(input)?;
    let name = cut_err(identifier).parse_next(input)?.to_string();
    ws(input)?;

    if opt('}').parse_next(input)?.is_some() {
        return Ok(Node::Argument(name));
    }

    cut_err(',').parse_next(input)?;
    ws(input)?;
    let key = cut_err(identifier).parse_next(input)?.to_string();
    ws(input)?;

    match key.as_str() {
        "plural" => case_block(input, name, CaseKind::Plural, true),
        "selectordinal" => case_block(input, name, CaseKind::SelectOrdinal, true),
        // Octothorpe context carries through nested select bodies.
        "select" => case_block(input, name, CaseKind::Select, in_plural),
        _ => function(input, name, key),
    }
}

/// Parse the tail of a formatted argument: an optional `, style` then `}`.
fn function(input: &mut &str, name: String, key: String) -> ModalResult<Node> {
    let style = if opt(',').parse_next(input)?.is_some() {
        let text: &str =
            take_while(0.., |c: char| c != '{' && c != '}').parse_next(input)?;
        Some(text.to_string())
    } else {
        None
    };
    cut_err('}').parse_next(input)?;
    Ok(Node::Function { name, key, style })
}

/// Parse the tail of a case block: the comma after the keyword, an optional
/// offset, then one or more `key {body}` cases, then the closing brace.
fn case_block(
    input: &mut &str,
    name: String,
    kind: CaseKind,
    body_in_plural: bool,
) -> ModalResult<Node> {
    cut_err(',').parse_next(input)?;
    ws(input)?;
    let offset = if kind == CaseKind::Select {
        0
    } else {
        opt(offset_clause).parse_next(input)?.unwrap_or(0)
    };

    let mut cases = Vec::new();
    loop {
        ws(input)?;
        if opt('}').parse_next(input)?.is_some() {
            break;
        }
        let key = cut_err(case_key).parse_next(input)?;
        ws(input)?;
        cut_err('{').parse_next(input)?;
        let body = pattern(input, body_in_plural)?;
        cut_err('}').parse_next(input)?;
        cases.push((key, body));
    }

    if cases.is_empty() {
        return Err(ErrMode::Cut(ContextError::new()));
    }

    Ok(Node::CaseBlock {
        name,
        kind,
        offset,
        cases,
    })
}

/// Parse `offset: N`.
fn offset_clause(input: &mut &str) -> ModalResult<i64> {
    "offset".parse_next(input)?;
    ws(input)?;
    ':'.parse_next(input)?;
    ws(input)?;
    dec_int.parse_next(input)
}

/// Parse a case key: an identifier or an exact match like `=4`.
///
/// Exact keys keep their `=` prefix; the compiler strips it.
fn case_key(input: &mut &str) -> ModalResult<String> {
    if opt('=').parse_next(input)?.is_some() {
        let sign = opt('-').parse_next(input)?;
        let digits: &str =
            take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)?;
        let mut key = String::with_capacity(2 + digits.len());
        key.push('=');
        if sign.is_some() {
            key.push('-');
        }
        key.push_str(digits);
        Ok(key)
    } else {
        identifier.parse_next(input).map(|s| s.to_string())
    }
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an identifier: argument names, formatter keys, and case keys.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_').parse_next(input)
}
