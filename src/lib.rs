//! # value-grammar
//!
//! Compiler for property value grammars and builder for concrete match trees.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! matching  → Match-tree builder driven by resolver events
//!   ↓
//! compiler  → Scanner, recursive-descent grammar parser, reference memo
//!   ↓
//! lookup    → Property registry, unit registry, token acceptors
//!   ↓
//! grammar   → Compiled grammar element tree (Group, Literal, Unit, Reference)
//!   ↓
//! base      → Primitives (ElementId, Multiplicity, Name)
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → lookup → compiler → matching)
// ============================================================================

/// Foundation types: ElementId, Multiplicity, Name
pub mod base;

/// Compiled grammar elements
pub mod grammar;

/// Property and unit lookups consumed by the compiler
pub mod lookup;

/// Grammar compiler: scanner, parser, reference memo, errors
pub mod compiler;

/// Match-tree builder and the resolver listener protocol
pub mod matching;

// Re-export foundation types
pub use base::{ElementId, Multiplicity, Name};

// Re-export the main entry points
pub use compiler::{CompileOptions, GrammarCache, GrammarCompiler, GrammarError, compile};
pub use grammar::{GrammarElement, Group, GroupType, Literal, Reference, Unit};
pub use lookup::{PropertyLookup, PropertyRegistry, TokenAcceptor, UnitLookup, UnitRegistry};
pub use matching::{BuildError, MatchNode, ParseTreeBuilder, ResolverListener, Token};
