//! Foundation types for value grammars.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ElementId`] - Identity of a compiled grammar element
//! - [`Multiplicity`] - Occurrence bounds (`?`, `*`, `+`, `{min,max}`)
//! - [`Name`] - Cheap-to-clone names for properties, captures and literals
//! - Notation constants (operator characters, the `inherit` keyword)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod element_id;
mod multiplicity;

pub use element_id::{ElementId, IdAllocator};
pub use multiplicity::Multiplicity;

/// Names are small, mostly inline strings.
pub type Name = smol_str::SmolStr;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
