//! Compiled grammar elements.
//!
//! The compiler turns grammar text into a tree of [`GrammarElement`]s rooted
//! at a [`Group`]. The tree is immutable once built. Each node owns its
//! children outright; the only links going upward are the diagnostic
//! `parent` ids in [`ElementMeta`] and the [`Weak`](std::sync::Weak) recursion
//! points inside a [`Reference`] that refers back to a grammar still being
//! compiled.

mod display;
mod element;
mod group;
mod reference;
mod value;

pub use element::{ElementMeta, GrammarElement};
pub use group::{Group, GroupType};
pub use reference::{Reference, ReferenceTarget};
pub use value::{Literal, TokenAcceptor, Unit, ValueKind};
