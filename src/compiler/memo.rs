//! Reference memo scoped to one compilation.
//!
//! Keys identify a reference occurrence structurally: which grammar text it
//! appears in, which group of that text, at which position, and the name it
//! refers to. Keys recur when a referenced grammar embeds itself, directly
//! or through other references, which is what lets recursion stop.

use std::sync::{Arc, Weak};

use rustc_hash::FxHashMap;

use crate::base::{ElementId, Name};
use crate::grammar::Group;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MemoKey {
    /// Property whose grammar text contains the reference, empty for an
    /// anonymous top-level grammar.
    pub owner: Name,
    /// Ordinal of the enclosing group within the owner's text.
    pub group: u32,
    /// Position of the reference among the group's children.
    pub position: usize,
    pub name: Name,
}

#[derive(Debug, Clone)]
pub(crate) enum MemoEntry {
    /// Still being compiled further up the call stack.
    Building { id: ElementId, group: Weak<Group> },
    Built(Arc<Group>),
}

#[derive(Debug, Default)]
pub(crate) struct ReferenceMemo {
    entries: FxHashMap<MemoKey, MemoEntry>,
}

impl ReferenceMemo {
    pub(crate) fn get(&self, key: &MemoKey) -> Option<&MemoEntry> {
        self.entries.get(key)
    }

    pub(crate) fn start(&mut self, key: MemoKey, id: ElementId, group: Weak<Group>) {
        self.entries.insert(key, MemoEntry::Building { id, group });
    }

    pub(crate) fn finish(&mut self, key: MemoKey, group: Arc<Group>) {
        self.entries.insert(key, MemoEntry::Built(group));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
