//! Expression evaluation.

use lurry_ir::{Expr, ExprKind, Literal, LogicalOp};
use lurry_stack::ensure_sufficient_stack;
use num_bigint::BigInt;

use super::call::{call_method, get_member, set_member};
use super::Interpreter;
use crate::errors::{non_boolean_operand, numeric_conversion, undefined_variable, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Value;

impl Interpreter {
    /// Evaluate `expr`, attaching its position to errors that have none.
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr)).map_err(|e| e.at(expr.pos))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(literal) => eval_literal(literal),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, &left, &right)
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(*op, &operand)
            }
            ExprKind::Grouping(inner) => self.eval(inner),
            ExprKind::Variable(name) => self.lookup(&name.name).map_err(|e| e.at(name.pos)),
            ExprKind::Assign { name, value } => {
                let value = self.eval(value)?;
                if self.envs.assign(self.current, &name.name, value.clone()) {
                    Ok(value)
                } else {
                    Err(undefined_variable(&name.name).at(name.pos))
                }
            }
            ExprKind::Logical { op, left, right } => self.eval_logical(*op, left, right),
            ExprKind::Call { callee, args } => {
                let callee = self.eval(callee)?;
                let args = self.eval_args(args)?;
                self.call_value(&callee, args)
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                let receiver = self.eval(receiver)?;
                let args = self.eval_args(args)?;
                call_method(&receiver, &method.name, &args)
                    .map_err(|e| e.at(method.pos))
            }
            ExprKind::FieldCall {
                receiver,
                field,
                value,
            } => {
                let receiver = self.eval(receiver)?;
                let result = match value {
                    None => get_member(&receiver, &field.name),
                    Some(value) => {
                        let value = self.eval(value)?;
                        set_member(&receiver, &field.name, value)
                    }
                };
                result.map_err(|e| e.at(field.pos))
            }
        }
    }

    /// Strictly boolean, short-circuiting `&&` and `||`.
    fn eval_logical(&mut self, op: LogicalOp, left: &Expr, right: &Expr) -> EvalResult {
        let lhs = self.eval(left)?;
        let Some(lhs) = lhs.as_bool() else {
            return Err(non_boolean_operand(op.as_symbol(), &lhs).at(left.pos));
        };
        match (op, lhs) {
            (LogicalOp::And, false) => return Ok(Value::Bool(false)),
            (LogicalOp::Or, true) => return Ok(Value::Bool(true)),
            _ => {}
        }
        let rhs = self.eval(right)?;
        rhs.as_bool()
            .map(Value::Bool)
            .ok_or_else(|| non_boolean_operand(op.as_symbol(), &rhs).at(right.pos))
    }

    fn eval_args(&mut self, args: &[Expr]) -> Result<Vec<Value>, crate::EvalError> {
        args.iter().map(|arg| self.eval(arg)).collect()
    }
}

/// Integer literals take the narrowest of int, long and bigint that holds
/// them.
fn eval_literal(literal: &Literal) -> EvalResult {
    Ok(match literal {
        Literal::Null => Value::Null,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Int(n) => i32::try_from(*n).map_or(Value::Long(*n), Value::Int),
        Literal::BigInt(text) => {
            let n = text
                .parse::<BigInt>()
                .map_err(|_| numeric_conversion(&Value::string(text.as_str()), "bigint"))?;
            Value::big_int(n)
        }
        Literal::Float(x) => Value::Double(*x),
        Literal::Str(s) => Value::string(s.as_str()),
    })
}
