use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::base::Name;

use super::acceptors::builtin_acceptors;
use super::{PropertyLookup, TokenAcceptor, UnitLookup};

/// A named property and the grammar text describing its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: Name,
    pub grammar: String,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<Name>, grammar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grammar: grammar.into(),
        }
    }
}

/// Property definitions keyed by name, kept in registration order.
#[derive(Debug, Default, Clone)]
pub struct PropertyRegistry {
    definitions: IndexMap<Name, PropertyDefinition>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a property, replacing any previous definition of the same
    /// name. Returns the replaced definition.
    pub fn register(
        &mut self,
        name: impl Into<Name>,
        grammar: impl Into<String>,
    ) -> Option<PropertyDefinition> {
        let definition = PropertyDefinition::new(name, grammar);
        self.definitions.insert(definition.name.clone(), definition)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<Name>, grammar: impl Into<String>) -> Self {
        self.register(name, grammar);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl PropertyLookup for PropertyRegistry {
    fn grammar(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(|d| d.grammar.as_str())
    }
}

impl<N: Into<Name>, G: Into<String>> FromIterator<(N, G)> for PropertyRegistry {
    fn from_iter<I: IntoIterator<Item = (N, G)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, grammar) in iter {
            registry.register(name, grammar);
        }
        registry
    }
}

/// Token acceptors keyed by unit name.
#[derive(Debug, Default, Clone)]
pub struct UnitRegistry {
    acceptors: FxHashMap<Name, Arc<dyn TokenAcceptor>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in acceptors.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for acceptor in builtin_acceptors() {
            registry.register(acceptor);
        }
        registry
    }

    /// Register an acceptor under its own [`id`](TokenAcceptor::id).
    pub fn register(&mut self, acceptor: Arc<dyn TokenAcceptor>) {
        self.acceptors.insert(Name::new(acceptor.id()), acceptor);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.acceptors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.acceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acceptors.is_empty()
    }
}

impl UnitLookup for UnitRegistry {
    fn acceptor(&self, name: &str) -> Option<Arc<dyn TokenAcceptor>> {
        self.acceptors.get(name).cloned()
    }
}
