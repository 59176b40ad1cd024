//! Integration tests for message pattern parsing.
//!
//! These tests validate the public parser API against the ICU MessageFormat
//! grammar: literal text, arguments, formatted arguments, case blocks,
//! octothorpe context, and apostrophe escaping.

use icumsg::CaseKind;
use icumsg::parser::{Node, parse_pattern};

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_pure_literal() {
    let nodes = parse_pattern("Hello, world!").unwrap();
    assert_eq!(nodes, vec![Node::Content("Hello, world!".into())]);
}

#[test]
fn test_empty_string() {
    let nodes = parse_pattern("").unwrap();
    assert_eq!(nodes, vec![]);
}

#[test]
fn test_multiline_literal() {
    let nodes = parse_pattern("Line 1\nLine 2\nLine 3").unwrap();
    assert_eq!(nodes, vec![Node::Content("Line 1\nLine 2\nLine 3".into())]);
}

#[test]
fn test_adjacent_text_merges() {
    // '#' outside plural context is plain text and merges with neighbors
    let nodes = parse_pattern("#1 seller").unwrap();
    assert_eq!(nodes, vec![Node::Content("#1 seller".into())]);
}

// =============================================================================
// Arguments
// =============================================================================

#[test]
fn test_simple_argument() {
    let nodes = parse_pattern("Hey {name}!").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::Content("Hey ".into()),
            Node::Argument("name".into()),
            Node::Content("!".into()),
        ]
    );
}

#[test]
fn test_positional_argument() {
    let nodes = parse_pattern("{0} results").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Argument("0".into()), Node::Content(" results".into())]
    );
}

#[test]
fn test_whitespace_inside_argument() {
    let nodes = parse_pattern("{ name }").unwrap();
    assert_eq!(nodes, vec![Node::Argument("name".into())]);
}

#[test]
fn test_adjacent_arguments() {
    let nodes = parse_pattern("{a}{b}{c}").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::Argument("a".into()),
            Node::Argument("b".into()),
            Node::Argument("c".into()),
        ]
    );
}

// =============================================================================
// Formatted arguments
// =============================================================================

#[test]
fn test_function_without_style() {
    let nodes = parse_pattern("{value, number}").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Function {
            name: "value".into(),
            key: "number".into(),
            style: None,
        }]
    );
}

#[test]
fn test_function_with_style() {
    let nodes = parse_pattern("{value, number, percent}").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Function {
            name: "value".into(),
            key: "number".into(),
            style: Some(" percent".into()),
        }]
    );
}

#[test]
fn test_unknown_function_key() {
    let nodes = parse_pattern("{x, customstuff}").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Function {
            name: "x".into(),
            key: "customstuff".into(),
            style: None,
        }]
    );
}

// =============================================================================
// Plural blocks
// =============================================================================

#[test]
fn test_plural_block() {
    let nodes = parse_pattern("{count, plural, one {# book} other {# books}}").unwrap();
    assert_eq!(
        nodes,
        vec![Node::CaseBlock {
            name: "count".into(),
            kind: CaseKind::Plural,
            offset: 0,
            cases: vec![
                (
                    "one".into(),
                    vec![Node::Octothorpe, Node::Content(" book".into())]
                ),
                (
                    "other".into(),
                    vec![Node::Octothorpe, Node::Content(" books".into())]
                ),
            ],
        }]
    );
}

#[test]
fn test_plural_offset_and_exact_cases() {
    let nodes =
        parse_pattern("{value, plural, offset:1 =0 {No Books} one {# Book} other {# Books}}")
            .unwrap();
    match &nodes[0] {
        Node::CaseBlock { kind, offset, cases, .. } => {
            assert_eq!(*kind, CaseKind::Plural);
            assert_eq!(*offset, 1);
            // exact keys keep their '=' prefix at parse level
            assert_eq!(cases[0].0, "=0");
            assert_eq!(cases[1].0, "one");
            assert_eq!(cases[2].0, "other");
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_offset_as_case_key_is_not_an_offset() {
    let nodes = parse_pattern("{n, plural, offset {x} other {y}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { offset, cases, .. } => {
            assert_eq!(*offset, 0);
            assert_eq!(cases[0].0, "offset");
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_selectordinal_block() {
    let nodes = parse_pattern("{value, selectordinal, one {#st} other {#th}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { kind, .. } => assert_eq!(*kind, CaseKind::SelectOrdinal),
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_nested_argument_in_case_body() {
    let nodes = parse_pattern("{value, plural, one {{value} Book} other {# Books}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => {
            assert_eq!(
                cases[0].1,
                vec![
                    Node::Argument("value".into()),
                    Node::Content(" Book".into())
                ]
            );
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

// =============================================================================
// Select blocks
// =============================================================================

#[test]
fn test_select_block() {
    let nodes = parse_pattern("{gender, select, female {She} other {They}}").unwrap();
    assert_eq!(
        nodes,
        vec![Node::CaseBlock {
            name: "gender".into(),
            kind: CaseKind::Select,
            offset: 0,
            cases: vec![
                ("female".into(), vec![Node::Content("She".into())]),
                ("other".into(), vec![Node::Content("They".into())]),
            ],
        }]
    );
}

#[test]
fn test_select_with_empty_case_body() {
    let nodes = parse_pattern("{v, select, female {} other {They}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => {
            assert_eq!(cases[0].1, vec![]);
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_nested_select_and_plural() {
    let nodes = parse_pattern(
        "{gender, select, male {{n, plural, one {He has # item} other {He has # items}}} \
         other {They}}",
    )
    .unwrap();
    match &nodes[0] {
        Node::CaseBlock { kind, cases, .. } => {
            assert_eq!(*kind, CaseKind::Select);
            match &cases[0].1[0] {
                Node::CaseBlock { kind, .. } => assert_eq!(*kind, CaseKind::Plural),
                other => panic!("expected nested case block, got {other:?}"),
            }
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

// =============================================================================
// Octothorpe context
// =============================================================================

#[test]
fn test_octothorpe_outside_plural_is_text() {
    let nodes = parse_pattern("#{place} in best seller list").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::Content("#".into()),
            Node::Argument("place".into()),
            Node::Content(" in best seller list".into()),
        ]
    );
}

#[test]
fn test_octothorpe_inside_plural_case() {
    let nodes = parse_pattern("{n, plural, other {# and #}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => {
            assert_eq!(
                cases[0].1,
                vec![
                    Node::Octothorpe,
                    Node::Content(" and ".into()),
                    Node::Octothorpe,
                ]
            );
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_octothorpe_context_propagates_through_select() {
    let nodes =
        parse_pattern("{n, plural, other {{g, select, other {#}}}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => match &cases[0].1[0] {
            Node::CaseBlock { cases, .. } => {
                assert_eq!(cases[0].1, vec![Node::Octothorpe]);
            }
            other => panic!("expected nested case block, got {other:?}"),
        },
        other => panic!("expected case block, got {other:?}"),
    }
}

#[test]
fn test_octothorpe_in_top_level_select_is_text() {
    let nodes = parse_pattern("{g, select, other {#}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => {
            assert_eq!(cases[0].1, vec![Node::Content("#".into())]);
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

// =============================================================================
// Apostrophe escaping
// =============================================================================

#[test]
fn test_doubled_apostrophe() {
    let nodes = parse_pattern("It''s here").unwrap();
    assert_eq!(nodes, vec![Node::Content("It's here".into())]);
}

#[test]
fn test_quoted_braces() {
    let nodes = parse_pattern("Hey '{name}'!").unwrap();
    assert_eq!(nodes, vec![Node::Content("Hey {name}!".into())]);
}

#[test]
fn test_quoted_run_swallows_syntax() {
    let nodes = parse_pattern("literal '{count, plural}' done").unwrap();
    assert_eq!(
        nodes,
        vec![Node::Content("literal {count, plural} done".into())]
    );
}

#[test]
fn test_lone_apostrophe_is_text() {
    let nodes = parse_pattern("l'hiver").unwrap();
    assert_eq!(nodes, vec![Node::Content("l'hiver".into())]);
}

#[test]
fn test_unterminated_quoted_run() {
    let nodes = parse_pattern("before '{rest of it").unwrap();
    assert_eq!(nodes, vec![Node::Content("before {rest of it".into())]);
}

#[test]
fn test_doubled_apostrophe_inside_quoted_run() {
    let nodes = parse_pattern("'{it''s}'").unwrap();
    assert_eq!(nodes, vec![Node::Content("{it's}".into())]);
}

#[test]
fn test_quoted_octothorpe_in_plural_case() {
    let nodes = parse_pattern("{n, plural, other {'#' of #}}").unwrap();
    match &nodes[0] {
        Node::CaseBlock { cases, .. } => {
            assert_eq!(
                cases[0].1,
                vec![Node::Content("# of ".into()), Node::Octothorpe]
            );
        }
        other => panic!("expected case block, got {other:?}"),
    }
}

// =============================================================================
// Unicode
// =============================================================================

#[test]
fn test_unicode_literal() {
    let nodes = parse_pattern("Возьмите {n} карт").unwrap();
    assert_eq!(
        nodes,
        vec![
            Node::Content("Возьмите ".into()),
            Node::Argument("n".into()),
            Node::Content(" карт".into()),
        ]
    );
}

#[test]
fn test_unicode_argument_name() {
    let nodes = parse_pattern("{имя}").unwrap();
    assert_eq!(nodes, vec![Node::Argument("имя".into())]);
}

// =============================================================================
// Error cases
// =============================================================================

#[test]
fn test_unclosed_brace() {
    assert!(parse_pattern("{name").is_err());
}

#[test]
fn test_empty_expression() {
    assert!(parse_pattern("{}").is_err());
}

#[test]
fn test_stray_close_brace() {
    assert!(parse_pattern("text } more").is_err());
}

#[test]
fn test_case_block_without_cases() {
    assert!(parse_pattern("{n, plural, }").is_err());
}

#[test]
fn test_case_without_body() {
    assert!(parse_pattern("{n, plural, one}").is_err());
}

#[test]
fn test_unbalanced_case_body() {
    assert!(parse_pattern("{n, plural, one {x}").is_err());
}

#[test]
fn test_error_carries_position() {
    let err = parse_pattern("line one\n{bad").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("2:"), "unexpected error text: {text}");
}
