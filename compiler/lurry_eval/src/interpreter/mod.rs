//! Tree-walking interpreter.
//!
//! # Architecture
//!
//! - `exec`: statement execution, producing [`ExecResult`]
//! - `eval`: expression evaluation
//! - `call`: calls into functions, mappers and host types
//! - `scope_guard`: RAII release of environments pushed for blocks and calls
//! - `builder`: [`InterpreterBuilder`]
//!
//! One interpreter owns one environment arena. The global scope persists
//! across [`Interpreter::execute`] calls; block and call scopes are released
//! when the block or call finishes, however it finishes.

mod builder;
mod call;
mod eval;
mod exec;
mod scope_guard;

use std::rc::Rc;

use lurry_ir::{Expr, Stmt};
use tracing::debug;

use crate::environment::{EnvId, Environments};
use crate::errors::{mapper_not_callable, undefined_variable, EvalResult};
use crate::host::TypeResolver;
use crate::print_handler::SharedPrintHandler;
use crate::row::Row;
use crate::Value;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

/// Outcome of executing a statement.
#[derive(Clone, Debug, PartialEq)]
pub enum ExecResult {
    /// Completed; carries the statement's value.
    Normal(Value),
    /// A `return` is unwinding to the nearest call.
    Return(Value),
}

impl ExecResult {
    pub fn into_value(self) -> Value {
        match self {
            ExecResult::Normal(v) | ExecResult::Return(v) => v,
        }
    }
}

pub struct Interpreter {
    pub(crate) envs: Environments,
    pub(crate) current: EnvId,
    pub(crate) types: Rc<dyn TypeResolver>,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) max_call_depth: usize,
    pub(crate) call_depth: usize,
}

impl Interpreter {
    /// Interpreter printing to stdout with no host types.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Execute a program and return the value of its last statement.
    ///
    /// A top-level `return` stops the program and yields its value. An empty
    /// program yields `null`.
    pub fn execute(&mut self, program: &[Stmt]) -> EvalResult {
        debug!(statements = program.len(), "executing program");
        let mut last = Value::Null;
        for stmt in program {
            match self.exec(stmt)? {
                ExecResult::Normal(value) => last = value,
                ExecResult::Return(value) => return Ok(value),
            }
        }
        Ok(last)
    }

    /// Bind `name` in the current scope, overwriting an existing binding
    /// there. Enclosing scopes are not consulted.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.envs.define(self.current, name, value);
    }

    /// Resolve `name` from the current scope outward.
    pub fn lookup(&self, name: &str) -> Result<Value, crate::EvalError> {
        self.envs
            .lookup(self.current, name)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Evaluate one expression in the current scope.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult {
        self.eval(expr)
    }

    /// Call a function or host type value with already-evaluated arguments.
    pub fn call(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        self.call_value(callee, args)
    }

    /// Apply a mapper value to one row.
    ///
    /// The body sees every column as `#name`; each declared parameter is
    /// also bound to the same-named column.
    pub fn map_row(&mut self, mapper: &Value, row: &dyn Row) -> EvalResult {
        match mapper {
            Value::Mapper(func) => self.apply_mapper(func, row),
            Value::Function(func) => Err(mapper_not_callable(func.name())),
            other => Err(crate::errors::not_callable(other)),
        }
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of live environments, the global scope included.
    pub fn live_scopes(&self) -> usize {
        self.envs.live_count()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
