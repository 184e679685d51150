//! Caller-side caching and batch compilation.
//!
//! The compiler itself never caches across calls. [`GrammarCache`] keeps one
//! compiled grammar per property for callers that compile repeatedly, and
//! [`compile_all`] compiles a whole registry in parallel, one independent
//! compiler per property.

use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::trace;

use super::errors::CompileResult;
use super::options::CompileOptions;
use super::GrammarCompiler;
use crate::base::Name;
use crate::grammar::Group;
use crate::lookup::{PropertyRegistry, UnitLookup};

/// Compiled grammars keyed by property name.
#[derive(Debug, Default)]
pub struct GrammarCache {
    grammars: RwLock<FxHashMap<Name, Arc<Group>>>,
}

impl GrammarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Group>> {
        self.grammars.read().get(name).cloned()
    }

    /// Return the cached grammar of `name`, compiling it on a miss.
    ///
    /// Compilation runs without holding the lock; if two threads race on the
    /// same property, the first insert wins and both get that instance.
    pub fn get_or_compile(
        &self,
        name: &str,
        compiler: &GrammarCompiler<'_>,
    ) -> CompileResult<Arc<Group>> {
        if let Some(grammar) = self.get(name) {
            trace!(property = name, "grammar cache hit");
            return Ok(grammar);
        }
        let compiled = Arc::new(compiler.compile_property(name)?);
        let mut grammars = self.grammars.write();
        Ok(Arc::clone(
            grammars.entry(Name::new(name)).or_insert(compiled),
        ))
    }

    /// Drop the cached grammar of `name`. Returns whether one was cached.
    pub fn invalidate(&self, name: &str) -> bool {
        self.grammars.write().remove(name).is_some()
    }

    pub fn clear(&self) {
        self.grammars.write().clear();
    }

    pub fn len(&self) -> usize {
        self.grammars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grammars.read().is_empty()
    }
}

/// Compile every property of `registry` in parallel.
///
/// Results come back in registration order.
pub fn compile_all(
    registry: &PropertyRegistry,
    units: &(dyn UnitLookup + Sync),
    options: CompileOptions,
) -> Vec<(Name, CompileResult<Group>)> {
    let definitions: Vec<_> = registry.iter().collect();
    definitions
        .par_iter()
        .map(|definition| {
            let compiler = GrammarCompiler::new(registry, units).with_options(options);
            let result = compiler.compile(&definition.grammar, Some(definition.name.as_str()));
            (definition.name.clone(), result)
        })
        .collect()
}
