//! Lookups the compiler consults while resolving `<name>` and `!unit`.
//!
//! The compiler only sees the [`PropertyLookup`] and [`UnitLookup`] traits.
//! [`PropertyRegistry`] and [`UnitRegistry`] are in-memory implementations
//! for callers that have no registry of their own.

mod acceptors;
mod registry;

pub use crate::grammar::TokenAcceptor;
pub use acceptors::{
    AngleAcceptor, DimensionAcceptor, HashColorAcceptor, IdentifierAcceptor, IntegerAcceptor,
    NumberAcceptor, StringAcceptor, builtin_acceptors,
};
pub use registry::{PropertyDefinition, PropertyRegistry, UnitRegistry};

use std::sync::Arc;

/// Maps a property name to its grammar text.
pub trait PropertyLookup {
    fn grammar(&self, name: &str) -> Option<&str>;
}

/// Maps a unit name to the acceptor that validates its tokens.
pub trait UnitLookup {
    fn acceptor(&self, name: &str) -> Option<Arc<dyn TokenAcceptor>>;
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn grammar(&self, name: &str) -> Option<&str> {
        (**self).grammar(name)
    }
}

impl<T: UnitLookup + ?Sized> UnitLookup for &T {
    fn acceptor(&self, name: &str) -> Option<Arc<dyn TokenAcceptor>> {
        (**self).acceptor(name)
    }
}
