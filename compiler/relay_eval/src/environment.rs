//! Variable store: a chain of nested scopes.
//!
//! Scopes live in an arena and refer to their parent by [`ScopeId`]. A
//! child is always pushed after its parent and popped before it, so the
//! arena behaves as a stack and parent links can never dangle or cycle.

use rustc_hash::FxHashMap;

use crate::errors::EvalError;
use crate::value::Value;

/// Handle to a scope in an [`Environment`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The outermost scope, present for the environment's whole life.
    pub const ROOT: ScopeId = ScopeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single scope: its own bindings plus a link to the enclosing scope.
#[derive(Clone, Debug, Default)]
struct Scope {
    /// `None` marks a registered but unset variable.
    bindings: FxHashMap<String, Option<Value>>,
    parent: Option<ScopeId>,
}

/// All live scopes of one script run.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Create an environment holding only the root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// Number of live scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Open a child scope of `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
        id
    }

    /// Discard `scope` along with anything opened after it.
    ///
    /// The root scope is never discarded.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        debug_assert_eq!(scope.index() + 1, self.scopes.len(), "scopes must be popped in order");
        if scope != ScopeId::ROOT {
            self.scopes.truncate(scope.index());
        }
    }

    /// Bind `name` in `scope` only. Parent and sibling scopes are untouched.
    ///
    /// Registering a name twice in the same scope overwrites the earlier
    /// binding.
    pub fn register(&mut self, scope: ScopeId, name: impl Into<String>, value: Option<Value>) {
        let name = name.into();
        if let Some(record) = self.scopes.get_mut(scope.index()) {
            if record.bindings.contains_key(&name) {
                tracing::warn!(%name, "variable registered twice in the same scope, overwriting");
            }
            record.bindings.insert(name, value);
        }
    }

    /// Whether `name` is registered in `scope` or any of its ancestors.
    pub fn exists(&self, scope: ScopeId, name: &str) -> bool {
        self.resolve(scope, name).is_some()
    }

    /// The value of the nearest binding of `name`.
    ///
    /// `None` when the name is unknown or registered without a value.
    pub fn read(&self, scope: ScopeId, name: &str) -> Option<Value> {
        self.binding(scope, name).cloned().flatten()
    }

    /// The nearest binding of `name`, distinguishing "unknown" (`None`)
    /// from "registered but unset" (`Some(None)`).
    pub fn binding(&self, scope: ScopeId, name: &str) -> Option<&Option<Value>> {
        let owner = self.resolve(scope, name)?;
        self.scopes[owner.index()].bindings.get(name)
    }

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding: fails if no scope in the chain registered
    /// the name.
    pub fn update(&mut self, scope: ScopeId, name: &str, value: Option<Value>) -> Result<(), EvalError> {
        let undefined = || EvalError::UndefinedVariable {
            name: name.to_owned(),
        };
        let owner = self.resolve(scope, name).ok_or_else(undefined)?;
        let slot = self.scopes[owner.index()]
            .bindings
            .get_mut(name)
            .ok_or_else(undefined)?;
        *slot = value;
        Ok(())
    }

    /// Walk from `scope` towards the root, returning the first scope that
    /// registered `name`.
    fn resolve(&self, mut scope: ScopeId, name: &str) -> Option<ScopeId> {
        loop {
            let record = self.scopes.get(scope.index())?;
            if record.bindings.contains_key(name) {
                return Some(scope);
            }
            scope = record.parent?;
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
