#![allow(clippy::unwrap_used, clippy::expect_used)]

use lurry_ir::{BinaryOp, Expr, ExprKind, Ident, Literal, Position, UnaryOp};
use pretty_assertions::assert_eq;

use crate::{format_expr, format_program};

fn fmt(source: &str) -> String {
    let tokens = lurry_lexer::tokenize(source).unwrap();
    format_program(&lurry_parse::parse(&tokens).unwrap())
}

fn lit(n: i64) -> Expr {
    Expr::new(ExprKind::Literal(Literal::Int(n)), Position::NONE)
}

#[test]
fn test_binary_is_fully_parenthesized() {
    assert_eq!(fmt("var a = 1 + 2 * 3;"), "var a = (1 + (2 * 3));");
    assert_eq!(fmt("a && b || c;"), "((a && b) || c);");
}

#[test]
fn test_grouping_does_not_double_parens() {
    assert_eq!(fmt("(1 + 2) * 3;"), "((1 + 2) * 3);");
    assert_eq!(fmt("(x);"), "(x);");
}

#[test]
fn test_literals() {
    assert_eq!(
        fmt("println 1.0; println 2.25; println 99999999999999999999; println null;"),
        "println 1.0;\nprintln 2.25;\nprintln 99999999999999999999;\nprintln null;"
    );
    assert_eq!(
        fmt(r#"var s = "a\"b\\c\n";"#),
        r#"var s = "a\"b\\c\n";"#
    );
}

#[test]
fn test_missing_initializer_prints_null() {
    assert_eq!(fmt("var x"), "var x = null;");
}

#[test]
fn test_calls_and_members() {
    assert_eq!(
        fmt("u.name = f(1, a.b).trim();"),
        "u.name = f(1, a.b).trim();"
    );
    assert_eq!(fmt("(-x).abs();"), "(-x).abs();");
}

#[test]
fn test_blocks_and_functions() {
    let source = "fun add(a, b) { var s = a + b; if s > 10 { return s; } else return 0; }";
    let expected = "\
fun add(a, b) {
    var s = (a + b);
    if (s > 10) {
        return s;
    } else return 0;
}";
    assert_eq!(fmt(source), expected);
}

#[test]
fn test_expression_body_prints_as_block() {
    assert_eq!(fmt("fun sq(x) = x * x;"), "fun sq(x) {\n    return (x * x);\n}");
}

#[test]
fn test_empty_block() {
    assert_eq!(fmt("fun noop() {}"), "fun noop() {}");
}

#[test]
fn test_mapper_and_import() {
    assert_eq!(
        fmt("import app.model.User\nimport app.Other as O\ntoUser(id) { return #id; }"),
        "import app.model.User;\nimport app.Other as O;\ntoUser(id) {\n    return #id;\n}"
    );
}

#[test]
fn test_if_branch_that_would_merge_with_condition_is_braced() {
    assert_eq!(fmt("if a { (b); }"), "if a {\n    (b);\n}");
    assert_eq!(fmt("if a { -b; }"), "if a {\n    -b;\n}");
    assert_eq!(fmt("if a b;"), "if a b;");
}

#[test]
fn test_unary_around_non_postfix_operand() {
    let inner = Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(lit(1)),
        },
        Position::NONE,
    );
    let outer = Expr::new(
        ExprKind::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(inner),
        },
        Position::NONE,
    );
    assert_eq!(format_expr(&outer), "-(-1)");
}

#[test]
fn test_hand_built_binary() {
    let expr = Expr::new(
        ExprKind::Binary {
            op: BinaryOp::Sub,
            left: Box::new(lit(5)),
            right: Box::new(Expr::new(
                ExprKind::Variable(Ident::new("n", Position::NONE)),
                Position::NONE,
            )),
        },
        Position::NONE,
    );
    assert_eq!(format_expr(&expr), "(5 - n)");
}
