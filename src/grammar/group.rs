use crate::base::{ElementId, Name};

use super::element::{ElementMeta, GrammarElement};
use super::reference::ReferenceTarget;

/// How a group combines its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupType {
    /// All children, in order (juxtaposition).
    #[default]
    Sequence,
    /// Exactly one child (`|`).
    Set,
    /// All children, any order, each exactly once (`&&`).
    All,
    /// One or more children, any order (`||`).
    Collection,
}

impl GroupType {
    /// The operator that selects this type, `None` for sequences.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Self::Sequence => None,
            Self::Set => Some("|"),
            Self::All => Some("&&"),
            Self::Collection => Some("||"),
        }
    }

    /// Separator used when rendering children back to notation.
    pub fn separator(&self) -> &'static str {
        match self {
            Self::Sequence => " ",
            Self::Set => " | ",
            Self::All => " && ",
            Self::Collection => " || ",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::Set => "set",
            Self::All => "all",
            Self::Collection => "collection",
        }
    }
}

/// An ordered list of child elements combined by a [`GroupType`].
#[derive(Debug, Clone)]
pub struct Group {
    pub meta: ElementMeta,
    pub group_type: GroupType,
    /// Set when this group roots a referenced or named top-level grammar.
    pub property: Option<Name>,
    pub children: Vec<GrammarElement>,
}

impl Group {
    pub fn new(meta: ElementMeta) -> Self {
        Self {
            meta,
            group_type: GroupType::Sequence,
            property: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.meta.id
    }

    pub fn group_type(&self) -> GroupType {
        self.group_type
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    pub fn children(&self) -> &[GrammarElement] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&GrammarElement> {
        self.children.get(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Find an element by id, depth first. Embedded references are searched;
    /// recursion points are not followed.
    pub fn find(&self, id: ElementId) -> Option<&GrammarElement> {
        for child in &self.children {
            if child.id() == id {
                return Some(child);
            }
            let nested = match child {
                GrammarElement::Group(group) => group.find(id),
                GrammarElement::Reference(reference) => match &reference.target {
                    ReferenceTarget::Embedded(group) => group.find(id),
                    ReferenceTarget::Recursive(_) => None,
                },
                _ => None,
            };
            if nested.is_some() {
                return nested;
            }
        }
        None
    }

    /// Number of elements below this group, counting embedded references'
    /// contents and not following recursion points.
    pub fn element_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| {
                1 + match child {
                    GrammarElement::Group(group) => group.element_count(),
                    GrammarElement::Reference(reference) => match &reference.target {
                        ReferenceTarget::Embedded(group) => group.element_count(),
                        ReferenceTarget::Recursive(_) => 0,
                    },
                    _ => 0,
                }
            })
            .sum()
    }
}
