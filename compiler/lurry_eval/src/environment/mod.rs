//! Lexical environments.
//!
//! Scopes live in an arena owned by the interpreter and are addressed by
//! generation-checked [`EnvId`] handles. A scope is released when the call or
//! block that pushed it finishes; any handle still pointing at it (for
//! example a function value that escaped its defining block) then reports
//! the scope as dead instead of observing a reused slot.

use rustc_hash::FxHashMap;

use crate::Value;

/// Handle to a scope in [`Environments`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnvId {
    index: u32,
    generation: u32,
}

/// Bindings of one scope plus the link to its lexical parent.
#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<EnvId>,
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    scope: Option<Scope>,
}

/// Arena of scopes. The global scope is created up front and never released.
#[derive(Debug)]
pub struct Environments {
    slots: Vec<Slot>,
    free: Vec<u32>,
    global: EnvId,
}

impl Environments {
    pub fn new() -> Self {
        let global = EnvId {
            index: 0,
            generation: 0,
        };
        Environments {
            slots: vec![Slot {
                generation: 0,
                scope: Some(Scope::default()),
            }],
            free: Vec::new(),
            global,
        }
    }

    #[inline]
    pub fn global(&self) -> EnvId {
        self.global
    }

    /// Create an empty scope whose lookups fall back to `parent`.
    pub fn push(&mut self, parent: EnvId) -> EnvId {
        let scope = Some(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.scope = scope;
            return EnvId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            scope,
        });
        EnvId {
            index,
            generation: 0,
        }
    }

    /// Drop a scope and its bindings. Releasing the global scope or a dead
    /// handle does nothing.
    pub fn release(&mut self, id: EnvId) {
        if id == self.global || !self.is_live(id) {
            return;
        }
        let slot = &mut self.slots[id.index as usize];
        slot.scope = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
    }

    pub fn is_live(&self, id: EnvId) -> bool {
        self.scope(id).is_some()
    }

    /// Bind `name` in `id`, replacing any binding of the same name there.
    pub fn define(&mut self, id: EnvId, name: impl Into<String>, value: Value) {
        if let Some(scope) = self.scope_mut(id) {
            scope.bindings.insert(name.into(), value);
        }
    }

    /// Resolve `name` from `id` outward.
    pub fn lookup(&self, id: EnvId, name: &str) -> Option<Value> {
        let mut current = Some(id);
        while let Some(env) = current {
            let scope = self.scope(env)?;
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            current = scope.parent;
        }
        None
    }

    /// Overwrite the nearest existing binding of `name`. Returns `false` if
    /// there is none.
    pub fn assign(&mut self, id: EnvId, name: &str, value: Value) -> bool {
        let mut current = Some(id);
        while let Some(env) = current {
            let Some(scope) = self.scope_mut(env) else {
                return false;
            };
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return true;
            }
            current = scope.parent;
        }
        false
    }

    /// Number of scopes currently alive, the global scope included.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.scope.is_some()).count()
    }

    fn scope(&self, id: EnvId) -> Option<&Scope> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.scope.as_ref())
    }

    fn scope_mut(&mut self, id: EnvId) -> Option<&mut Scope> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.scope.as_mut())
    }
}

impl Default for Environments {
    fn default() -> Self {
        Self::new()
    }
}
