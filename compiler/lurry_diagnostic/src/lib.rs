//! Diagnostics for template errors.
//!
//! Every stage error (lex, parse, eval) converts into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - the source [`Position`](lurry_ir::Position) where it went wrong
//! - optional notes
//!
//! [`Diagnostic::render`] produces a terminal report with the offending line
//! and a caret under the reported column.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
