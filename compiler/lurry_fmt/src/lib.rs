//! Lurry Fmt - printers for Lurry syntax trees.
//!
//! - [`format_program`], [`format_stmt`], [`format_expr`]: canonical source
//!   text that parses back to an equivalent tree
//! - [`sexpr`]: parenthesized prefix rendering for debugging and golden tests
//!
//! Printing never consults interpreter state; the same tree always renders
//! to the same text.

pub mod emitter;
mod printer;
pub mod sexpr;

use lurry_ir::{Expr, Stmt};

pub use emitter::{Emitter, StringEmitter};
pub use printer::{Printer, INDENT_WIDTH};
pub use sexpr::{expr_sexpr, program_sexpr, stmt_sexpr};

/// Render a program, one top-level statement per line.
pub fn format_program(statements: &[Stmt]) -> String {
    let mut printer = Printer::new();
    printer.program(statements);
    printer.into_emitter().output()
}

pub fn format_stmt(stmt: &Stmt) -> String {
    let mut printer = Printer::new();
    printer.stmt(stmt);
    printer.into_emitter().output()
}

pub fn format_expr(expr: &Expr) -> String {
    let mut printer = Printer::new();
    printer.expr(expr);
    printer.into_emitter().output()
}
