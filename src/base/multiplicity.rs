//! Occurrence bounds attached to grammar elements.

use std::fmt;

/// How many times an element may occur: `min..=max`, where a `None` max is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Multiplicity {
    pub min: u32,
    pub max: Option<u32>,
}

impl Multiplicity {
    /// Exactly once; the default for every element.
    pub const ONE: Self = Self { min: 1, max: Some(1) };
    /// `?`
    pub const OPTIONAL: Self = Self { min: 0, max: Some(1) };
    /// `*`
    pub const ZERO_OR_MORE: Self = Self { min: 0, max: None };
    /// `+`
    pub const ONE_OR_MORE: Self = Self { min: 1, max: None };

    /// `{n}`
    pub const fn exactly(n: u32) -> Self {
        Self { min: n, max: Some(n) }
    }

    /// `{min,max}`. Returns `None` when `min > max`.
    pub fn range(min: u32, max: Option<u32>) -> Option<Self> {
        match max {
            Some(max) if min > max => None,
            _ => Some(Self { min, max }),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.min == 0
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    pub fn is_default(&self) -> bool {
        *self == Self::ONE
    }

    /// Check whether `count` occurrences satisfy this bound.
    pub fn accepts_count(&self, count: u32) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

impl Default for Multiplicity {
    fn default() -> Self {
        Self::ONE
    }
}

/// Renders the notation suffix that produces this bound.
impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (1, Some(1)) => Ok(()),
            (0, Some(1)) => f.write_str("?"),
            (0, None) => f.write_str("*"),
            (1, None) => f.write_str("+"),
            (min, None) => write!(f, "{{{min},}}"),
            (min, Some(max)) if min == max => write!(f, "{{{min}}}"),
            (min, Some(max)) => write!(f, "{{{min},{max}}}"),
        }
    }
}
