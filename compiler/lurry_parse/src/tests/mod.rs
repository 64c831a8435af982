//! Parser tests, driven through the real lexer.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::{parse, ParseError};
use lurry_ir::Stmt;

fn parse_src(source: &str) -> Result<Vec<Stmt>, ParseError> {
    let tokens = lurry_lexer::tokenize(source).unwrap();
    parse(&tokens)
}

fn parse_ok(source: &str) -> Vec<Stmt> {
    parse_src(source).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    parse_src(source).unwrap_err()
}
