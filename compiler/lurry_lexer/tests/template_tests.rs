//! Tokenizing whole templates.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use lurry_ir::{Position, TokenKind};
use lurry_lexer::{tokenize, LineIndex};
use pretty_assertions::assert_eq;

#[test]
fn test_mapper_template() {
    let source = "import app.User;\ntoUser(id) {\n  return #name;\n}";
    let rendered: Vec<String> = tokenize(source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "IMPORT",
            "IDENTIFIER(app)",
            "DOT",
            "IDENTIFIER(User)",
            "SEMICOLON",
            "IDENTIFIER(toUser)",
            "LEFT_PAREN",
            "IDENTIFIER(id)",
            "RIGHT_PAREN",
            "LEFT_BRACE",
            "RETURN",
            "IDENTIFIER(#name)",
            "SEMICOLON",
            "RIGHT_BRACE",
            "EOF",
        ]
    );
}

#[test]
fn test_positions_agree_with_line_index() {
    let source = "var sql = \"select 1\";\nif (x) {\n  sql = sql + \" where\";\n}";
    let index = LineIndex::new(source);
    let tokens = tokenize(source).unwrap();
    let if_token = tokens.iter().find(|t| t.kind == TokenKind::If).unwrap();
    assert_eq!(if_token.pos, index.position(source.find("if").unwrap()));
    assert_eq!(if_token.pos, Position::new(2, 1));
}

#[test]
fn test_error_stops_tokenizing() {
    let err = tokenize("var a = 1;\nvar b = a ^ 2;").unwrap_err();
    assert_eq!(err.pos(), Position::new(2, 11));
}
