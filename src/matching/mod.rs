//! Match-tree building
//!
//! A resolver (outside this crate) walks real input against a compiled
//! grammar and reports what it is doing through [`ResolverListener`]. The
//! [`ParseTreeBuilder`] listens and assembles a [`MatchNode`] tree holding
//! only the branches that were finally accepted.
//!
//! ```text
//! Compiled Group ──walked by──▶ Resolver
//!                                  │ entering / accepted / rejected / rule_chosen
//!                                  ▼
//!                           ParseTreeBuilder ──▶ MatchNode tree
//! ```

mod builder;
mod listener;
mod node;
mod token;

pub use builder::{BuildError, ParseTreeBuilder};
pub use listener::{ListenerChain, ResolverListener, TracingListener};
pub use node::{GroupNode, MatchNode, TokenNode};
pub use token::Token;
