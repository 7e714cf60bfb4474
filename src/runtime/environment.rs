use std::collections::HashMap;

use crate::parser::Expr;

/// Symbol table with lexical scoping.
///
/// Scopes form a parent-pointer chain stored as an arena: each scope holds
/// its bindings plus the index of its parent. Lookup walks innermost to
/// outermost, so inner bindings shadow outer ones. Lookup never creates
/// bindings.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    /// Stack of nested scopes
    scopes: Vec<Scope>,
}

/// Single scope in the chain
#[derive(Debug, Clone)]
struct Scope {
    /// Bindings owned by this scope
    bindings: HashMap<String, Expr>,
    /// Index of parent scope (None for the root scope)
    parent: Option<usize>,
}

impl SymbolTable {
    /// Creates a table with an empty root scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope {
                bindings: HashMap::new(),
                parent: None,
            }],
        }
    }

    /// Enters a new nested scope.
    pub fn enter_scope(&mut self) {
        let parent_idx = self.scopes.len() - 1;
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent: Some(parent_idx),
        });
    }

    /// Exits the current scope; the root scope is never popped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Binds a name in the current scope, overwriting any local binding.
    pub fn define(&mut self, name: impl Into<String>, value: Expr) {
        let current = self
            .scopes
            .last_mut()
            .expect("symbol table always has a root scope");
        current.bindings.insert(name.into(), value);
    }

    /// Looks a name up through the scope chain; innermost match wins.
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        let mut scope_idx = self.scopes.len() - 1;
        loop {
            let scope = &self.scopes[scope_idx];
            if let Some(value) = scope.bindings.get(name) {
                return Some(value);
            }
            scope_idx = scope.parent?;
        }
    }

    /// Rebinds an existing name in whichever scope holds it, innermost
    /// first. Returns false when the name is bound nowhere in the chain;
    /// this never creates a binding.
    pub fn assign(&mut self, name: &str, value: Expr) -> bool {
        let mut scope_idx = self.scopes.len() - 1;
        loop {
            let scope = &mut self.scopes[scope_idx];
            if scope.bindings.contains_key(name) {
                scope.bindings.insert(name.to_string(), value);
                return true;
            }
            match scope.parent {
                Some(parent) => scope_idx = parent,
                None => return false,
            }
        }
    }

    /// True when the current scope itself binds `name`.
    pub fn has_local(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map(|scope| scope.bindings.contains_key(name))
            .unwrap_or(false)
    }

    /// Names bound by the current scope only.
    pub fn local_symbols(&self) -> Vec<String> {
        self.scopes
            .last()
            .map(|scope| scope.bindings.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Current scope depth (1 for just the root scope).
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
