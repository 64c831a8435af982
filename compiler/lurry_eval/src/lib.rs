//! Lurry Eval - tree-walking interpreter for Lurry templates.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values, including the numeric kinds of the promotion
//!   lattice, host objects and closures
//! - `numeric`: promotion table and per-kind arithmetic
//! - `operators`: binary and unary operator dispatch
//! - `environment`: generation-checked arena of lexical scopes
//! - [`Interpreter`]: statement execution and expression evaluation
//! - `host`: host types reached through `import`
//! - `row`: bridge from tabular rows to mapper bindings
//!
//! Errors are [`EvalError`]s built by the factory functions in [`errors`].

mod environment;
pub mod errors;
mod function;
pub mod host;
pub mod interpreter;
pub mod numeric;
mod operators;
mod print_handler;
pub mod row;
mod value;

pub use environment::EnvId;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use function::FunctionValue;
pub use host::{
    HostError, HostObject, HostRegistry, HostType, HostTypeBuilder, ParamType, TypeResolver,
};
pub use interpreter::{ExecResult, Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use numeric::NumericKind;
pub use operators::{evaluate_binary, evaluate_unary, values_equal};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use row::{column_value, row_bindings, MemoryRow, Row, SqlType};
pub use value::Value;

#[cfg(test)]
mod tests;
