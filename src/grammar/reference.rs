use std::sync::{Arc, Weak};

use crate::base::Name;

use super::element::ElementMeta;
use super::group::Group;

/// Compiled target of a `<name>` reference.
#[derive(Debug, Clone)]
pub enum ReferenceTarget {
    /// The referenced grammar, compiled and embedded. Occurrences in the same
    /// structural position share one instance.
    Embedded(Arc<Group>),
    /// Points back into a referenced grammar that encloses this occurrence.
    Recursive(Weak<Group>),
}

/// One occurrence of a `<name>` reference.
///
/// The occurrence owns its multiplicity and capture name; the referenced
/// grammar itself lives in the shared target group. `meta.id` equals the
/// target group's id.
#[derive(Debug, Clone)]
pub struct Reference {
    pub meta: ElementMeta,
    pub property: Name,
    pub target: ReferenceTarget,
}

impl Reference {
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The referenced group. `None` only if a recursion point outlived the
    /// tree that owns its target.
    pub fn group(&self) -> Option<Arc<Group>> {
        match &self.target {
            ReferenceTarget::Embedded(group) => Some(Arc::clone(group)),
            ReferenceTarget::Recursive(weak) => weak.upgrade(),
        }
    }

    pub fn is_recursive(&self) -> bool {
        matches!(self.target, ReferenceTarget::Recursive(_))
    }
}
