//! Grammar compiler
//!
//! Turns grammar text into a compiled [`Group`] tree.
//!
//! ## Architecture
//!
//! ```text
//! Grammar Text
//!     ↓
//! Scanner → chars with one-char lookahead and backup
//!     ↓
//! GrammarParser → recursive descent, one call per `[ ... ]`
//!     ↓                ↘
//!     ↓                 <name> → PropertyLookup → nested GrammarParser
//!     ↓                 !unit  → UnitLookup
//!     ↓
//! Group (immutable, references embedded as shared Arc<Group>)
//! ```
//!
//! Each call to [`GrammarCompiler::compile`] owns its id counter and its
//! reference memo, so concurrent compilations never share mutable state.

mod cache;
mod errors;
mod memo;
mod options;
mod parser;
mod scanner;

pub use cache::{GrammarCache, compile_all};
pub use errors::{CompileResult, ErrorCode, GrammarError, GrammarErrorBuilder};
pub use options::CompileOptions;

use tracing::debug;

use crate::base::{IdAllocator, Name};
use crate::grammar::{ElementMeta, Group};
use crate::lookup::{PropertyLookup, UnitLookup};
use memo::ReferenceMemo;
use parser::{CompileContext, GrammarParser};

/// Compiles grammar text against a pair of lookups.
pub struct GrammarCompiler<'l> {
    properties: &'l dyn PropertyLookup,
    units: &'l dyn UnitLookup,
    options: CompileOptions,
}

impl<'l> GrammarCompiler<'l> {
    pub fn new(properties: &'l dyn PropertyLookup, units: &'l dyn UnitLookup) -> Self {
        Self {
            properties,
            units,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile `text`. `property` labels the root group and error messages.
    pub fn compile(&self, text: &str, property: Option<&str>) -> CompileResult<Group> {
        debug!(
            property = property.unwrap_or("<anonymous>"),
            len = text.len(),
            "compiling grammar"
        );
        let mut ctx = CompileContext {
            properties: self.properties,
            units: self.units,
            options: self.options,
            ids: IdAllocator::new(),
            memo: ReferenceMemo::default(),
        };
        let root_meta = ElementMeta::new(ctx.ids.alloc(), None, 0);
        // The top level keeps `inherit`; only embedded references drop it.
        let root = GrammarParser::new(text, &mut ctx, property.map(Name::new), false)
            .parse(root_meta)?;
        debug!(
            property = property.unwrap_or("<anonymous>"),
            elements = ctx.ids.allocated(),
            references = ctx.memo.len(),
            "compiled grammar"
        );
        Ok(root)
    }

    /// Compile the registered grammar of property `name`.
    pub fn compile_property(&self, name: &str) -> CompileResult<Group> {
        let text = self.properties.grammar(name).ok_or_else(|| {
            GrammarError::builder(ErrorCode::E0301)
                .message(format!("unknown property '{name}'"))
                .property(Some(Name::new(name)))
                .token(name)
                .build()
        })?;
        self.compile(text, Some(name))
    }
}

/// Compile `text` with default options.
pub fn compile(
    text: &str,
    property: Option<&str>,
    properties: &dyn PropertyLookup,
    units: &dyn UnitLookup,
) -> CompileResult<Group> {
    GrammarCompiler::new(properties, units).compile(text, property)
}
