//! RAII scope guards for environment management.
//!
//! [`ScopedInterpreter`] pushes a child environment on creation and, on drop,
//! releases it and restores the previous current environment. The release
//! also runs when evaluation returns early through `?` or a `return` signal.

use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::environment::EnvId;
use crate::Value;

/// Guard that owns one pushed environment.
///
/// Access the interpreter through the guard; it implements `Deref` and
/// `DerefMut`.
pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
    previous: EnvId,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        let scope = self.interpreter.current;
        self.interpreter.envs.release(scope);
        self.interpreter.current = self.previous;
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Enter a fresh child of `parent`. The child is released when the guard
    /// drops.
    pub fn scoped(&mut self, parent: EnvId) -> ScopedInterpreter<'_> {
        let previous = self.current;
        self.current = self.envs.push(parent);
        ScopedInterpreter {
            interpreter: self,
            previous,
        }
    }

    /// Run `f` in a child of `parent` seeded with `bindings`.
    pub fn with_bindings<T, F>(
        &mut self,
        parent: EnvId,
        bindings: impl IntoIterator<Item = (String, Value)>,
        f: F,
    ) -> T
    where
        F: FnOnce(&mut ScopedInterpreter<'_>) -> T,
    {
        let mut scoped = self.scoped(parent);
        for (name, value) in bindings {
            scoped.define(name, value);
        }
        f(&mut scoped)
    }
}
