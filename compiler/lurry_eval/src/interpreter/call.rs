//! Calls: user functions, mappers, host constructors and host members.

use std::rc::Rc;

use lurry_ir::FunctionDecl;
use tracing::trace;

use super::{ExecResult, Interpreter};
use crate::errors::{
    arity_mismatch, constructor_not_found, host_call_failed, mapper_not_callable,
    member_not_found, missing_column, not_callable, null_receiver, scope_expired, stack_overflow,
    EvalResult,
};
use crate::function::FunctionValue;
use crate::host::{HostObject, HostType, Method};
use crate::row::{column_value, row_bindings, Row};
use crate::Value;

impl Interpreter {
    pub(crate) fn call_value(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        match callee {
            Value::Function(func) => {
                if args.len() != func.arity() {
                    return Err(arity_mismatch(func.name(), func.arity(), args.len()));
                }
                let bindings = param_names(func.decl()).zip(args).collect();
                self.invoke(func, bindings)
            }
            Value::Mapper(func) => Err(mapper_not_callable(func.name())),
            Value::Type(ty) => construct(ty, &args),
            other => Err(not_callable(other)),
        }
    }

    pub(crate) fn apply_mapper(&mut self, func: &FunctionValue, row: &dyn Row) -> EvalResult {
        let mut bindings = row_bindings(row);
        for param in &func.decl().params {
            let index = row
                .find_column(&param.name)
                .ok_or_else(|| missing_column(&param.name).at(param.pos))?;
            bindings.push((param.name.clone(), column_value(row, index)));
        }
        self.invoke(func, bindings)
    }

    /// Run a function body in a fresh child of its closure scope.
    fn invoke(&mut self, func: &FunctionValue, bindings: Vec<(String, Value)>) -> EvalResult {
        if !self.envs.is_live(func.closure()) {
            return Err(scope_expired(func.name()));
        }
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth));
        }
        trace!(function = func.name(), depth = self.call_depth, "call");

        self.call_depth += 1;
        let result = self.with_bindings(func.closure(), bindings, |scoped| {
            scoped.exec_block(&func.decl().body.statements)
        });
        self.call_depth -= 1;
        result.map(ExecResult::into_value)
    }
}

/// `receiver.name(args)`: static methods on a type, any method on an
/// object.
pub(crate) fn call_method(receiver: &Value, name: &str, args: &[Value]) -> EvalResult {
    match receiver {
        Value::Null => Err(null_receiver(name)),
        Value::Type(ty) => {
            let method = ty
                .find_method(name, args, true)
                .ok_or_else(|| member_not_found(name, ty.path()))?;
            invoke_host(method, None, args)
        }
        Value::Object(obj) => {
            let ty = obj.host_type();
            let method = ty
                .find_method(name, args, false)
                .ok_or_else(|| member_not_found(name, ty.path()))?;
            invoke_host(method, Some(obj), args)
        }
        other => Err(member_not_found(name, other.type_name())),
    }
}

/// `receiver.field`: a declared field, else the `getField()` method.
pub(crate) fn get_member(receiver: &Value, field: &str) -> EvalResult {
    match receiver {
        Value::Null => Err(null_receiver(field)),
        Value::Object(obj) => {
            if let Some(value) = obj.get_field(field) {
                return Ok(value);
            }
            let getter = accessor_name("get", field);
            match obj.host_type().find_method(&getter, &[], false) {
                Some(method) => invoke_host(method, Some(obj), &[]),
                None => Err(member_not_found(&getter, obj.host_type().path())),
            }
        }
        Value::Type(ty) => {
            let getter = accessor_name("get", field);
            match ty.find_method(&getter, &[], true) {
                Some(method) => invoke_host(method, None, &[]),
                None => Err(member_not_found(&getter, ty.path())),
            }
        }
        other => Err(member_not_found(field, other.type_name())),
    }
}

/// `receiver.field = value`: a declared field, else the `setField(value)`
/// method. Yields the assigned value.
pub(crate) fn set_member(receiver: &Value, field: &str, value: Value) -> EvalResult {
    match receiver {
        Value::Null => Err(null_receiver(field)),
        Value::Object(obj) => {
            if obj.set_field(field, value.clone()) {
                return Ok(value);
            }
            let setter = accessor_name("set", field);
            let args = std::slice::from_ref(&value);
            match obj.host_type().find_method(&setter, args, false) {
                Some(method) => {
                    invoke_host(method, Some(obj), args)?;
                    Ok(value)
                }
                None => Err(member_not_found(&setter, obj.host_type().path())),
            }
        }
        other => Err(member_not_found(&accessor_name("set", field), other.type_name())),
    }
}

fn param_names(decl: &FunctionDecl) -> impl Iterator<Item = String> + '_ {
    decl.params.iter().map(|param| param.name.clone())
}

fn construct(ty: &Rc<HostType>, args: &[Value]) -> EvalResult {
    let ctor = ty
        .find_constructor(args)
        .ok_or_else(|| constructor_not_found(ty.path(), args.len()))?;
    trace!(ty = ty.path(), args = args.len(), "construct");
    ctor.invoke(ty, args)
        .map_err(|e| host_call_failed(ty.simple_name(), e.message))
}

fn invoke_host(method: &Method, receiver: Option<&HostObject>, args: &[Value]) -> EvalResult {
    trace!(method = method.name(), args = args.len(), "host call");
    method
        .invoke(receiver, args)
        .map_err(|e| host_call_failed(method.name(), e.message))
}

/// `get` + `name` -> `getName`.
fn accessor_name(prefix: &str, field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => format!("{prefix}{}{}", first.to_uppercase(), chars.as_str()),
        None => prefix.to_owned(),
    }
}
