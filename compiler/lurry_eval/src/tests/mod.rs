//! Interpreter tests, driven through the real lexer and parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod program_tests;

use std::rc::Rc;

use lurry_ir::Stmt;

use crate::{buffer_handler, EvalError, Interpreter, TypeResolver, Value};

fn compile(source: &str) -> Vec<Stmt> {
    let tokens = lurry_lexer::tokenize(source).unwrap();
    lurry_parse::parse(&tokens).unwrap()
}

/// Interpreter capturing `println` output.
fn interpreter() -> Interpreter {
    Interpreter::builder().print_handler(buffer_handler()).build()
}

fn interpreter_with_types(types: Rc<dyn TypeResolver>) -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .types(types)
        .build()
}

fn run(source: &str) -> Result<Value, EvalError> {
    interpreter().execute(&compile(source))
}

fn run_ok(source: &str) -> Value {
    run(source).unwrap()
}

fn run_err(source: &str) -> EvalError {
    run(source).unwrap_err()
}

/// Run and return everything printed.
fn output_of(source: &str) -> String {
    let mut interp = interpreter();
    interp.execute(&compile(source)).unwrap();
    interp.print_handler().output()
}
