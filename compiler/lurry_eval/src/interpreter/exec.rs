//! Statement execution.

use std::rc::Rc;
use std::sync::Arc;

use lurry_ir::{FunctionDecl, Stmt};
use lurry_stack::ensure_sufficient_stack;
use tracing::trace;

use super::{ExecResult, Interpreter};
use crate::errors::{non_boolean_condition, type_not_found, EvalError};
use crate::function::FunctionValue;
use crate::Value;

impl Interpreter {
    pub(crate) fn exec(&mut self, stmt: &Stmt) -> Result<ExecResult, EvalError> {
        ensure_sufficient_stack(|| self.exec_inner(stmt))
    }

    fn exec_inner(&mut self, stmt: &Stmt) -> Result<ExecResult, EvalError> {
        match stmt {
            Stmt::Expression(expr) => self.eval(expr).map(ExecResult::Normal),
            Stmt::Var { name, initializer } => {
                let value = self.eval(initializer)?;
                self.define(name.name.clone(), value);
                Ok(ExecResult::Normal(Value::Null))
            }
            Stmt::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(ExecResult::Normal(Value::Null))
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let value = self.eval(condition)?;
                match value.as_bool() {
                    Some(true) => self.exec(then_branch),
                    Some(false) => match else_branch {
                        Some(branch) => self.exec(branch),
                        None => Ok(ExecResult::Normal(Value::Null)),
                    },
                    None => Err(non_boolean_condition(&value).at(condition.pos)),
                }
            }
            Stmt::Block(block) => {
                let parent = self.current;
                self.with_bindings(parent, Vec::new(), |scoped| {
                    scoped.exec_block(&block.statements)
                })
            }
            Stmt::Function(decl) => {
                let func = self.close_over(decl);
                self.define(decl.name.name.clone(), Value::Function(func));
                Ok(ExecResult::Normal(Value::Null))
            }
            Stmt::Mapper(decl) => {
                let func = self.close_over(decl);
                self.define(decl.name.name.clone(), Value::Mapper(func));
                Ok(ExecResult::Normal(Value::Null))
            }
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr)?,
                    None => Value::Null,
                };
                Ok(ExecResult::Return(value))
            }
            Stmt::Import { alias, path } => {
                let ty = self
                    .types
                    .resolve(path)
                    .ok_or_else(|| type_not_found(path).at(alias.pos))?;
                trace!(path = %path, alias = %alias.name, "import");
                self.define(alias.name.clone(), Value::Type(ty));
                Ok(ExecResult::Normal(Value::Null))
            }
        }
    }

    /// Run statements in the current scope, stopping at the first `return`.
    pub(crate) fn exec_block(&mut self, statements: &[Stmt]) -> Result<ExecResult, EvalError> {
        let mut last = Value::Null;
        for stmt in statements {
            match self.exec(stmt)? {
                ExecResult::Normal(value) => last = value,
                signal @ ExecResult::Return(_) => return Ok(signal),
            }
        }
        Ok(ExecResult::Normal(last))
    }

    fn close_over(&self, decl: &Arc<FunctionDecl>) -> Rc<FunctionValue> {
        Rc::new(FunctionValue::new(Arc::clone(decl), self.current))
    }
}
