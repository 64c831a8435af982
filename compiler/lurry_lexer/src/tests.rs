#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use lurry_ir::Position;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

fn rendered(source: &str) -> Vec<String> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn test_var_print_program() {
    assert_eq!(
        rendered("var a = 1 + 2 * 3; println a;"),
        vec![
            "VAR",
            "IDENTIFIER(a)",
            "EQUAL",
            "NUMBER(1)",
            "PLUS",
            "NUMBER(2)",
            "STAR",
            "NUMBER(3)",
            "SEMICOLON",
            "PRINT",
            "IDENTIFIER(a)",
            "SEMICOLON",
            "EOF",
        ]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens, vec![Token::eof()]);
}

#[test]
fn test_whitespace_and_comments_skipped() {
    assert_eq!(
        kinds("  // leading comment\n\tx // trailing\r\n"),
        vec![TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_two_char_operators_greedy() {
    assert_eq!(
        kinds("= == ! != < <= > >= & && | ||"),
        vec![
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Ampersand,
            TokenKind::And,
            TokenKind::VerticalBar,
            TokenKind::Or,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("a===b"),
        vec![
            TokenKind::Identifier,
            TokenKind::EqualEqual,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_by_exact_text() {
    assert_eq!(
        kinds("true false null var fun if else for while return import println"),
        vec![
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Var,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::While,
            TokenKind::Return,
            TokenKind::Import,
            TokenKind::Print,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        rendered("variable iffy _x as"),
        vec![
            "IDENTIFIER(variable)",
            "IDENTIFIER(iffy)",
            "IDENTIFIER(_x)",
            "IDENTIFIER(as)",
            "EOF"
        ]
    );
}

#[test]
fn test_number_literals() {
    let tokens = tokenize("42 3.25 7").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Integer(42));
    assert_eq!(tokens[1].value, TokenValue::Float(3.25));
    assert_eq!(tokens[2].value, TokenValue::Integer(7));
}

#[test]
fn test_oversized_integer_keeps_digits() {
    let tokens = tokenize("123456789012345678901234567890").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(
        tokens[0].value,
        TokenValue::BigInteger("123456789012345678901234567890".into())
    );
}

#[test]
fn test_trailing_dot_is_not_float() {
    assert_eq!(
        kinds("1.foo"),
        vec![
            TokenKind::Number,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_string_escapes() {
    let tokens = tokenize(r#""a\tb\"c\'d\\""#).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, TokenValue::Text("a\tb\"c'd\\".into()));
}

#[test]
fn test_string_may_span_lines() {
    let tokens = tokenize("\"select *\nfrom t\" x").unwrap();
    assert_eq!(tokens[0].value, TokenValue::Text("select *\nfrom t".into()));
    assert_eq!(tokens[1].pos, Position::new(2, 9));
}

#[test]
fn test_column_reference() {
    assert_eq!(rendered("#id"), vec!["IDENTIFIER(#id)", "EOF"]);
}

#[test]
fn test_positions() {
    let tokens = tokenize("var a\n  = 1;").unwrap();
    assert_eq!(tokens[0].pos, Position::new(1, 0));
    assert_eq!(tokens[1].pos, Position::new(1, 4));
    assert_eq!(tokens[2].pos, Position::new(2, 3));
    assert_eq!(tokens[3].pos, Position::new(2, 5));
    assert_eq!(tokens[5].pos, Position::NONE);
}

#[test]
fn test_unterminated_string_reports_end_of_input() {
    let err = tokenize("\"abc").unwrap_err();
    assert_eq!(
        err,
        LexError::UnterminatedString {
            pos: Position::new(1, 3)
        }
    );

    let err = tokenize("var s = \"abc\ndef").unwrap_err();
    assert_eq!(err.pos(), Position::new(2, 3));
}

#[test]
fn test_unexpected_character() {
    let err = tokenize("var x = 1 @ 2;").unwrap_err();
    assert_eq!(
        err,
        LexError::UnexpectedCharacter {
            ch: '@',
            pos: Position::new(1, 10)
        }
    );
    assert_eq!(err.to_string(), "unexpected character '@' at 1:10");
}

#[test]
fn test_error_diagnostic_codes() {
    let diag = tokenize("\"x").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, lurry_diagnostic::ErrorCode::E0001);
    let diag = tokenize("$").unwrap_err().to_diagnostic();
    assert_eq!(diag.code, lurry_diagnostic::ErrorCode::E0002);
    assert_eq!(diag.message, "unexpected character '$'");
}

#[test]
fn test_float_overflow_is_rejected() {
    let source = format!("var x = 1{}.5;", "0".repeat(400));
    let err = tokenize(&source).unwrap_err();
    assert_eq!(err, LexError::NumberOutOfRange { pos: Position::new(1, 8) });
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, lurry_diagnostic::ErrorCode::E0003);
    assert_eq!(diag.message, "number literal out of range");
}

#[test]
fn test_largest_floats_still_lex() {
    let tokens = tokenize(&format!("1{}.0", "0".repeat(308))).unwrap();
    assert_eq!(tokens[0].value, TokenValue::Float(1e308));
    let tokens = tokenize(&format!("0.{}1", "0".repeat(400))).unwrap();
    assert_eq!(tokens[0].value, TokenValue::Float(0.0));
}
