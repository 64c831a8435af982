//! `InterpreterBuilder` for configuring an [`Interpreter`].

use std::rc::Rc;

use super::Interpreter;
use crate::environment::Environments;
use crate::host::{HostRegistry, TypeResolver};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::Value;

/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    types: Option<Rc<dyn TypeResolver>>,
    max_call_depth: usize,
    globals: Vec<(String, Value)>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            print_handler: None,
            types: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            globals: Vec::new(),
        }
    }

    /// Where `println` writes. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Resolver consulted by `import`. Defaults to an empty registry.
    #[must_use]
    pub fn types(mut self, types: Rc<dyn TypeResolver>) -> Self {
        self.types = Some(types);
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Pre-bind a global variable.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: Value) -> Self {
        self.globals.push((name.into(), value));
        self
    }

    pub fn build(self) -> Interpreter {
        let envs = Environments::new();
        let current = envs.global();
        let mut interpreter = Interpreter {
            envs,
            current,
            types: self
                .types
                .unwrap_or_else(|| Rc::new(HostRegistry::new())),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        };
        for (name, value) in self.globals {
            interpreter.define(name, value);
        }
        interpreter
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
