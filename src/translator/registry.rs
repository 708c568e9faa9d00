//! Declared-name registry
//!
//! Tracks which identifiers may be read in an expression. Variables and
//! functions share one namespace; each entry remembers how the name was
//! first introduced.

use std::collections::HashMap;

use log::debug;

/// How a name entered the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    /// Introduced by `LET`, `INPUT` or as a function parameter
    Variable,
    /// Introduced by `FUNC`
    Function,
}

/// The set of names declared so far; it only ever grows
#[derive(Debug, Clone, Default)]
pub struct Registry {
    names: HashMap<String, NameKind>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a name; returns `false` if it was already declared
    ///
    /// Re-declaration is accepted and keeps the original kind.
    pub fn declare(&mut self, name: &str, kind: NameKind) -> bool {
        match self.names.get(name) {
            Some(existing) => {
                if *existing != kind {
                    debug!(
                        "'{}' already declared as {:?}, re-declared as {:?}",
                        name, existing, kind
                    );
                }
                false
            }
            None => {
                debug!("declare {:?} '{}'", kind, name);
                self.names.insert(name.to_string(), kind);
                true
            }
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<NameKind> {
        self.names.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over declared names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = (&str, NameKind)> {
        self.names.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.declare("x", NameKind::Variable));
        assert!(registry.declare("add", NameKind::Function));
        assert!(registry.is_declared("x"));
        assert!(registry.is_declared("add"));
        assert!(!registry.is_declared("y"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_redeclare_keeps_first_kind() {
        let mut registry = Registry::new();
        registry.declare("f", NameKind::Function);
        assert!(!registry.declare("f", NameKind::Variable));
        assert_eq!(registry.kind_of("f"), Some(NameKind::Function));
        assert_eq!(registry.len(), 1);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec![("f", NameKind::Function)]);
    }
}
