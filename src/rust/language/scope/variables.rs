use crate::language::syntax::ast::Value;
use std::collections::HashMap;

/// Variable store with hierarchical scoping.
///
/// Lookup walks from the innermost scope outward; the interpolation and
/// env-var paths only ever read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Variables in current scope
    bindings: HashMap<String, Value>,
    /// Parent scope (if any)
    parent: Option<Box<Environment>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create new empty environment
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            parent: None,
        }
    }

    /// Create new environment enclosed by a parent scope
    pub fn with_parent(parent: Environment) -> Self {
        Self {
            bindings: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    /// Bind a variable in the current scope
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Get variable value (searches up the scope chain)
    pub fn get(&self, name: &str) -> Option<&Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value);
        }

        let mut current = &self.parent;
        while let Some(boxed) = current {
            if let Some(value) = boxed.bindings.get(name) {
                return Some(value);
            }
            current = &boxed.parent;
        }

        None
    }

    /// Check if variable exists in any scope
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if variable exists in current scope (not parent)
    pub fn has_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Remove variable from current scope
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.bindings.remove(name)
    }

    /// Names bound in the current scope (for debugging)
    pub fn local_names(&self) -> Vec<String> {
        self.bindings.keys().cloned().collect()
    }
}

#[cfg(test)]
#[path = "test_variables.rs"]
mod tests;
