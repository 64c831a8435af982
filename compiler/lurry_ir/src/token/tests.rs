use super::*;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("var"), Some(TokenKind::Var));
    assert_eq!(TokenKind::keyword("println"), Some(TokenKind::Print));
    assert_eq!(TokenKind::keyword("fun"), Some(TokenKind::Fun));
    assert_eq!(TokenKind::keyword("variable"), None);
    assert_eq!(TokenKind::keyword("as"), None);
}

#[test]
fn test_token_display() {
    let ident = Token::new(
        TokenKind::Identifier,
        TokenValue::Text("a".into()),
        Position::new(1, 4),
    );
    assert_eq!(ident.to_string(), "IDENTIFIER(a)");

    let number = Token::new(TokenKind::Number, TokenValue::Integer(42), Position::new(1, 0));
    assert_eq!(number.to_string(), "NUMBER(42)");

    let float = Token::new(TokenKind::Number, TokenValue::Float(2.0), Position::new(1, 0));
    assert_eq!(float.to_string(), "NUMBER(2.0)");

    assert_eq!(Token::eof().to_string(), "EOF");
}

#[test]
fn test_eof_sentinel() {
    let eof = Token::eof();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.value, TokenValue::Empty);
    assert_eq!(eof.pos, Position::NONE);
}

#[test]
fn test_text_accessor() {
    let s = Token::new(
        TokenKind::String,
        TokenValue::Text("abc".into()),
        Position::new(1, 0),
    );
    assert_eq!(s.text(), Some("abc"));
    assert_eq!(Token::eof().text(), None);
}
