use std::fmt::{self, Write as _};

use crate::base::{ElementId, Name};
use crate::grammar::{GroupType, ValueKind};

use super::token::Token;

/// A node of the match tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchNode {
    Group(GroupNode),
    Token(TokenNode),
}

/// Mirrors a grammar group; owns its accepted children in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNode {
    pub element: ElementId,
    pub group_type: GroupType,
    /// Capture name, or the property the group roots.
    pub label: Option<Name>,
    pub children: Vec<MatchNode>,
}

/// Mirrors a literal or unit and the token it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNode {
    pub element: ElementId,
    pub value: ValueKind,
    pub token: Token,
}

impl MatchNode {
    /// The grammar element this node was built for.
    pub fn element(&self) -> ElementId {
        match self {
            Self::Group(g) => g.element,
            Self::Token(t) => t.element,
        }
    }

    pub fn children(&self) -> &[MatchNode] {
        match self {
            Self::Group(g) => &g.children,
            Self::Token(_) => &[],
        }
    }

    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Self::Group(g) => Some(g),
            Self::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenNode> {
        match self {
            Self::Token(t) => Some(t),
            Self::Group(_) => None,
        }
    }

    /// Matched tokens in document order.
    pub fn tokens(&self) -> Vec<&Token> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens<'a>(&'a self, out: &mut Vec<&'a Token>) {
        match self {
            Self::Group(g) => g.children.iter().for_each(|c| c.collect_tokens(out)),
            Self::Token(t) => out.push(&t.token),
        }
    }

    /// Indented rendering of the tree, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            Self::Group(g) => {
                let _ = write!(out, "{indent}{}", g.group_type.as_str());
                if let Some(label) = &g.label {
                    let _ = write!(out, " ${label}");
                }
                let _ = writeln!(out, " {}", g.element);
                for child in &g.children {
                    child.dump_into(out, depth + 1);
                }
            }
            Self::Token(t) => {
                let _ = writeln!(out, "{indent}\"{}\" <- {} {}", t.token, t.value, t.element);
            }
        }
    }
}

/// The matched text, tokens separated by spaces.
impl fmt::Display for MatchNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens().into_iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
