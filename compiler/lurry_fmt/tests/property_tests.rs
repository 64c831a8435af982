//! Property tests: printing generated templates reaches a fixed point after
//! one pass, and the printed text always re-parses.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lurry_fmt::{format_program, program_sexpr};
use proptest::prelude::*;

fn is_keyword(s: &str) -> bool {
    matches!(
        s,
        "true"
            | "false"
            | "null"
            | "var"
            | "fun"
            | "if"
            | "else"
            | "for"
            | "while"
            | "return"
            | "import"
            | "println"
    )
}

fn identifier() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,6}")
        .expect("valid regex")
        .prop_filter("not a keyword", |s| !is_keyword(s))
}

fn leaf() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier(),
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        (1u32..10, 0usize..300, 0u32..10)
            .prop_map(|(d, zeros, f)| format!("{d}{}.{f}", "0".repeat(zeros))),
        (0usize..330, 1u32..10).prop_map(|(zeros, d)| format!("0.{}{d}", "0".repeat(zeros))),
        prop::string::string_regex("[a-z ,?*]{0,6}")
            .expect("valid regex")
            .prop_map(|s| format!("\"{s}\"")),
        Just("true".to_owned()),
        Just("false".to_owned()),
        Just("null".to_owned()),
        identifier().prop_map(|s| format!("#{s}")),
    ]
}

fn binary_op() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "==", "!=", "<", "<=", ">", ">=", "&&", "||",
    ])
}

fn expression() -> impl Strategy<Value = String> {
    leaf().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_op(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("-{e}")),
            inner.clone().prop_map(|e| format!("!{e}")),
            inner.clone().prop_map(|e| format!("({e})")),
            (identifier(), inner.clone()).prop_map(|(n, e)| format!("({n} = {e})")),
            (identifier(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(f, args)| format!("{f}({})", args.join(", "))),
            (inner.clone(), identifier(), prop::collection::vec(inner.clone(), 0..2))
                .prop_map(|(r, m, args)| format!("({r}).{m}({})", args.join(", "))),
            (inner.clone(), identifier()).prop_map(|(r, f)| format!("({r}).{f}")),
        ]
    })
}

/// Statements that can follow an `if` condition without braces: none of
/// them starts with `(` or `-`, which would extend the condition.
fn bare_branch() -> impl Strategy<Value = String> {
    prop_oneof![
        expression().prop_map(|e| format!("println {e};")),
        expression().prop_map(|e| format!("return {e};")),
        Just("return;".to_owned()),
        (identifier(), expression()).prop_map(|(n, e)| format!("{n} = {e};")),
        (identifier(), expression()).prop_map(|(f, e)| format!("{f}({e});")),
    ]
}

fn statement() -> impl Strategy<Value = String> {
    let simple = prop_oneof![
        (identifier(), expression()).prop_map(|(n, e)| format!("var {n} = {e};")),
        expression().prop_map(|e| format!("println {e};")),
        expression().prop_map(|e| format!("{e};")),
        expression().prop_map(|e| format!("return {e};")),
    ];
    simple.prop_recursive(2, 12, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|body| format!("{{ {} }}", body.join(" "))),
            (expression(), inner.clone(), prop::option::of(inner.clone())).prop_map(
                |(c, t, e)| match e {
                    Some(e) => format!("if {c} {{ {t} }} else {{ {e} }}"),
                    None => format!("if {c} {{ {t} }}"),
                }
            ),
            (expression(), bare_branch(), prop::option::of(bare_branch())).prop_map(
                |(c, t, e)| match e {
                    Some(e) => format!("if {c} {t} else {e}"),
                    None => format!("if {c} {t}"),
                }
            ),
            (expression(), expression(), bare_branch(), bare_branch())
                .prop_map(|(c, d, t, e)| format!("if {c} if {d} {t} else {e}")),
            (expression(), bare_branch(), expression(), bare_branch(), bare_branch())
                .prop_map(|(c, t, d, u, e)| format!("if {c} {t} else if {d} {u} else {e}")),
            (
                identifier(),
                prop::collection::vec(identifier(), 0..3),
                prop::collection::vec(inner.clone(), 0..3)
            )
                .prop_map(|(name, params, body)| format!(
                    "fun {name}({}) {{ {} }}",
                    params.join(", "),
                    body.join(" ")
                )),
        ]
    })
}

fn parse(source: &str) -> Vec<lurry_ir::Stmt> {
    let tokens = lurry_lexer::tokenize(source)
        .unwrap_or_else(|e| panic!("lex failed for {source:?}: {e}"));
    lurry_parse::parse(&tokens).unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn expression_printing_is_idempotent(source in expression()) {
        let source = format!("{source};");
        let first = format_program(&parse(&source));
        let second = format_program(&parse(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn program_printing_is_idempotent(body in prop::collection::vec(statement(), 1..5)) {
        let source = body.join("\n");
        let first = format_program(&parse(&source));
        let second = format_program(&parse(&first));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn printing_preserves_tree_shape(source in expression()) {
        let source = format!("{source};");
        let original = parse(&source);
        let reparsed = parse(&format_program(&original));
        prop_assert_eq!(
            strip_groups(&program_sexpr(&original)),
            strip_groups(&program_sexpr(&reparsed))
        );
    }
}

/// Drop `(group ...)` wrappers, which canonical printing may add or remove.
fn strip_groups(sexpr: &str) -> String {
    let mut out = String::with_capacity(sexpr.len());
    let mut closers: Vec<bool> = Vec::new();
    let mut rest = sexpr;
    while let Some(c) = rest.chars().next() {
        if rest.starts_with("(group ") {
            closers.push(false);
            rest = &rest["(group ".len()..];
            continue;
        }
        if c == '"' {
            let end = string_end(rest);
            out.push_str(&rest[..end]);
            rest = &rest[end..];
            continue;
        }
        match c {
            '(' => {
                closers.push(true);
                out.push(c);
            }
            ')' => {
                if closers.pop().unwrap_or(true) {
                    out.push(c);
                }
            }
            _ => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Byte length of the quoted string at the start of `s`.
fn string_end(s: &str) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => return i + 1,
            _ => escaped = false,
        }
    }
    s.len()
}
