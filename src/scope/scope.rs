use std::collections::HashMap;

use log::trace;

use super::symbols::Symbol;

/// Handle to a scope inside a [`ScopeTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug)]
struct Scope {
    parent: Option<ScopeId>,
    symbols: HashMap<String, Symbol>,
}

/// Chained lexical scopes kept in an arena.
///
/// Scopes are pushed and popped in stack order, so the innermost scope is
/// always the last record and popping it discards it. The root scope is
/// never popped.
#[derive(Debug)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTable {
    pub fn new() -> Self {
        ScopeTable {
            scopes: vec![Scope {
                parent: None,
                symbols: HashMap::new(),
            }],
        }
    }

    pub fn current(&self) -> ScopeId {
        ScopeId(self.scopes.len() - 1)
    }

    pub fn parent_of(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes.get(id.0).and_then(|scope| scope.parent)
    }

    /// Number of open scopes, the root included.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) -> ScopeId {
        let parent = self.current();
        self.scopes.push(Scope {
            parent: Some(parent),
            symbols: HashMap::new(),
        });
        trace!("entered scope {}", self.scopes.len() - 1);
        self.current()
    }

    /// Leaves the innermost scope. Returns `false` when only the root is left.
    pub fn pop_scope(&mut self) -> bool {
        if self.scopes.len() == 1 {
            return false;
        }

        self.scopes.pop();
        trace!("left scope {}", self.scopes.len());
        true
    }

    /// Declares `name` in the innermost scope.
    ///
    /// Fails, leaving the existing entry alone, when the innermost scope
    /// already has `name`. Outer scopes may hold the same name.
    pub fn define(&mut self, name: &str, symbol: Symbol) -> bool {
        let scope = self.innermost_mut();
        if scope.symbols.contains_key(name) {
            return false;
        }

        scope.symbols.insert(name.to_string(), symbol);
        true
    }

    /// Declares `name` in the innermost scope, replacing an earlier entry.
    ///
    /// Used for `let`, which may rebind a name in the same block.
    pub fn shadow(&mut self, name: &str, symbol: Symbol) -> Option<Symbol> {
        self.innermost_mut().symbols.insert(name.to_string(), symbol)
    }

    /// Finds `name`, walking from the innermost scope outward.
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let mut cursor = Some(self.current());
        while let Some(ScopeId(index)) = cursor {
            let scope = &self.scopes[index];
            if let Some(symbol) = scope.symbols.get(name) {
                return Some(symbol);
            }
            cursor = scope.parent;
        }
        None
    }

    /// Finds `name` in the innermost scope only.
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .last()
            .and_then(|scope| scope.symbols.get(name))
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        let index = self.scopes.len() - 1;
        &mut self.scopes[index]
    }
}
