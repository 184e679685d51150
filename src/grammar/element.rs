use crate::base::{ElementId, Multiplicity, Name};

use super::group::Group;
use super::reference::Reference;
use super::value::{Literal, Unit, ValueKind};

/// Data every grammar element carries regardless of its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMeta {
    pub id: ElementId,
    /// Owning group, for diagnostics only.
    pub parent: Option<ElementId>,
    /// Position within the parent's children.
    pub index: usize,
    /// Capture name from `( $name )`.
    pub name: Option<Name>,
    pub multiplicity: Multiplicity,
}

impl ElementMeta {
    pub fn new(id: ElementId, parent: Option<ElementId>, index: usize) -> Self {
        Self {
            id,
            parent,
            index,
            name: None,
            multiplicity: Multiplicity::ONE,
        }
    }
}

/// A node of a compiled grammar.
#[derive(Debug, Clone)]
pub enum GrammarElement {
    Group(Group),
    Literal(Literal),
    Unit(Unit),
    Reference(Reference),
}

impl GrammarElement {
    pub fn meta(&self) -> &ElementMeta {
        match self {
            Self::Group(g) => &g.meta,
            Self::Literal(l) => &l.meta,
            Self::Unit(u) => &u.meta,
            Self::Reference(r) => &r.meta,
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut ElementMeta {
        match self {
            Self::Group(g) => &mut g.meta,
            Self::Literal(l) => &mut l.meta,
            Self::Unit(u) => &mut u.meta,
            Self::Reference(r) => &mut r.meta,
        }
    }

    /// Identity of this element. A reference reports the id of the group it
    /// resolves to.
    pub fn id(&self) -> ElementId {
        self.meta().id
    }

    pub fn multiplicity(&self) -> Multiplicity {
        self.meta().multiplicity
    }

    pub fn name(&self) -> Option<&str> {
        self.meta().name.as_deref()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.meta().parent
    }

    pub fn is_optional(&self) -> bool {
        self.multiplicity().is_optional()
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Literal(_) | Self::Unit(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Self::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Self::Unit(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Self::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Describes what a value element matches, `None` for groups and
    /// references.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self {
            Self::Literal(l) => Some(ValueKind::Literal(l.text.clone())),
            Self::Unit(u) => Some(ValueKind::Unit(u.unit.clone())),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Group(_) => "group",
            Self::Literal(_) => "literal",
            Self::Unit(_) => "unit",
            Self::Reference(_) => "reference",
        }
    }
}

impl From<Group> for GrammarElement {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<Literal> for GrammarElement {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Unit> for GrammarElement {
    fn from(unit: Unit) -> Self {
        Self::Unit(unit)
    }
}

impl From<Reference> for GrammarElement {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}
