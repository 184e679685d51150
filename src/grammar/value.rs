use std::fmt;
use std::sync::Arc;

use crate::base::Name;

use super::element::ElementMeta;

/// Decides whether a piece of input text is an acceptable value for a unit.
pub trait TokenAcceptor: Send + Sync + fmt::Debug {
    /// Unit name this acceptor is registered under.
    fn id(&self) -> &str;

    fn accepts(&self, text: &str) -> bool;
}

/// Fixed text matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub meta: ElementMeta,
    pub text: Name,
    pub case_sensitive: bool,
}

impl Literal {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.case_sensitive {
            self.text == text
        } else {
            self.text.eq_ignore_ascii_case(text)
        }
    }
}

/// A token accepted by a named [`TokenAcceptor`] rather than by exact text.
#[derive(Debug, Clone)]
pub struct Unit {
    pub meta: ElementMeta,
    pub unit: Name,
    pub acceptor: Arc<dyn TokenAcceptor>,
}

impl Unit {
    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn accepts(&self, text: &str) -> bool {
        self.acceptor.accepts(text)
    }
}

/// What a value element matched, carried into match-tree leaves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Literal(Name),
    Unit(Name),
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text}"),
            Self::Unit(unit) => write!(f, "!{unit}"),
        }
    }
}
