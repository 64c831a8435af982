//! Function and mapper values.

use std::fmt;
use std::sync::Arc;

use lurry_ir::FunctionDecl;

use crate::environment::EnvId;

/// A declared function closed over the environment it was declared in.
///
/// The closure is a handle, not an owner: once that environment is released
/// the function can no longer be called.
pub struct FunctionValue {
    decl: Arc<FunctionDecl>,
    closure: EnvId,
}

impl FunctionValue {
    pub fn new(decl: Arc<FunctionDecl>, closure: EnvId) -> Self {
        FunctionValue { decl, closure }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.decl.name.name
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }

    #[inline]
    pub fn decl(&self) -> &FunctionDecl {
        &self.decl
    }

    #[inline]
    pub fn closure(&self) -> EnvId {
        self.closure
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .field("closure", &self.closure)
            .finish()
    }
}
