//! Environment for variable scoping in the interpreter.
//!
//! Scopes live in an arena owned by the `Environment` and point at their
//! parent by `ScopeId`. Resolution walks from the current scope outward to
//! the global scope.

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::Value;

/// Index of a scope in the environment's arena.
///
/// Arena-wide, so every live scope has a distinct id at any nesting depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, created with the environment.
    pub const GLOBAL: ScopeId = ScopeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// `let x = ...`
    Mutable,
    /// `const x = ...`
    Constant,
}

impl Mutability {
    #[inline]
    pub fn from_constant(constant: bool) -> Self {
        if constant {
            Mutability::Constant
        } else {
            Mutability::Mutable
        }
    }

    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Why an environment operation failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("cannot declare `{name}`: it is already declared in this scope")]
    AlreadyDeclared { name: String },
    #[error("cannot resolve `{name}`: it does not exist")]
    Undefined { name: String },
    #[error("cannot reassign `{name}`: it is declared as a constant")]
    Constant { name: String },
}

/// A variable binding.
#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// A single scope containing variable bindings.
#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Binding>,
    parent: Option<ScopeId>,
}

/// Environment for the interpreter.
///
/// `push_scope`/`pop_scope` follow stack discipline: the scope being popped
/// is always the newest one in the arena.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// Create an environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: ScopeId::GLOBAL,
        }
    }

    /// Innermost scope; declarations land here.
    #[inline]
    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Number of live scopes, the global scope included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes.get(scope.index()).and_then(|s| s.parent)
    }

    /// Open a child scope of the current scope and make it current.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(self.current),
        });
        self.current = id;
        id
    }

    /// Close the current scope. The global scope is never popped.
    pub fn pop_scope(&mut self) {
        if self.current == ScopeId::GLOBAL {
            return;
        }
        if let Some(scope) = self.scopes.pop() {
            self.current = scope.parent.unwrap_or(ScopeId::GLOBAL);
        }
    }

    /// Declare `name` in the current scope and return the declared value.
    pub fn declare(&mut self, name: &str, value: Value, constant: bool) -> Result<Value, EnvError> {
        let current = self.current;
        let Some(scope) = self.scopes.get_mut(current.index()) else {
            return Err(EnvError::Undefined { name: name.into() });
        };
        if scope.bindings.contains_key(name) {
            return Err(EnvError::AlreadyDeclared { name: name.into() });
        }
        debug!(name, constant, scope = current.index(), "declare");
        scope.bindings.insert(
            name.to_string(),
            Binding {
                value: value.clone(),
                mutability: Mutability::from_constant(constant),
            },
        );
        Ok(value)
    }

    /// Reassign the nearest binding of `name` and return the new value.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, EnvError> {
        let owner = self.resolve(name)?;
        let binding = self
            .scopes
            .get_mut(owner.index())
            .and_then(|scope| scope.bindings.get_mut(name))
            .ok_or_else(|| EnvError::Undefined { name: name.into() })?;
        if !binding.mutability.is_mutable() {
            return Err(EnvError::Constant { name: name.into() });
        }
        debug!(name, scope = owner.index(), "assign");
        binding.value = value.clone();
        Ok(value)
    }

    /// Value of the nearest binding of `name`.
    pub fn lookup(&self, name: &str) -> Result<Value, EnvError> {
        self.find(name)
            .map(|(_, binding)| binding.value.clone())
            .ok_or_else(|| EnvError::Undefined { name: name.into() })
    }

    /// Scope that owns the nearest binding of `name`.
    pub fn resolve(&self, name: &str) -> Result<ScopeId, EnvError> {
        self.find(name)
            .map(|(id, _)| id)
            .ok_or_else(|| EnvError::Undefined { name: name.into() })
    }

    /// Whether the nearest binding of `name` is a constant.
    pub fn is_constant(&self, name: &str) -> bool {
        self.find(name)
            .is_some_and(|(_, binding)| !binding.mutability.is_mutable())
    }

    fn find(&self, name: &str) -> Option<(ScopeId, &Binding)> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let scope = self.scopes.get(scope_id.index())?;
            if let Some(binding) = scope.bindings.get(name) {
                return Some((scope_id, binding));
            }
            id = scope.parent;
        }
        None
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
