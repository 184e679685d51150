//! Rendering compiled elements back to grammar notation.

use std::fmt;

use crate::base::constants::is_word_terminator;

use super::element::{ElementMeta, GrammarElement};
use super::group::Group;
use super::reference::Reference;
use super::value::{Literal, Unit};

fn write_suffix(f: &mut fmt::Formatter<'_>, meta: &ElementMeta) -> fmt::Result {
    write!(f, "{}", meta.multiplicity)?;
    if let Some(name) = &meta.name {
        write!(f, "(${name})")?;
    }
    Ok(())
}

/// Renders the group body without brackets.
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = self.group_type.separator();
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bare = !self.case_sensitive
            && !self.text.is_empty()
            && !self.text.chars().any(is_word_terminator);
        if bare {
            f.write_str(&self.text)?;
        } else if self.text.contains('\'') {
            write!(f, "\"{}\"", self.text)?;
        } else {
            write!(f, "'{}'", self.text)?;
        }
        write_suffix(f, &self.meta)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.unit)?;
        write_suffix(f, &self.meta)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.property)?;
        write_suffix(f, &self.meta)
    }
}

impl fmt::Display for GrammarElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group(group) => {
                write!(f, "[ {group} ]")?;
                write_suffix(f, &group.meta)
            }
            Self::Literal(literal) => literal.fmt(f),
            Self::Unit(unit) => unit.fmt(f),
            Self::Reference(reference) => reference.fmt(f),
        }
    }
}
