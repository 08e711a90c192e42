//! Scope - assignment bindings visible while scanning a file

use std::collections::HashMap;

/// Name to value bindings created by `assign` directives.
///
/// A scope belongs to a single file being resolved. Included files receive
/// a clone, so nothing they bind or unbind is seen by the including file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    bindings: HashMap<String, String>,
}

impl Scope {
    /// Create an empty scope (used for root files)
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value bound to `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.bindings.get(name).map(String::as_str)
    }

    /// Bind `name` to `value`, returning the previous value if any
    pub fn assign(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.bindings.insert(name.into(), value.into())
    }

    /// Remove the binding for `name`, returning its value if it was bound
    pub fn unassign(&mut self, name: &str) -> Option<String> {
        self.bindings.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Scope
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
