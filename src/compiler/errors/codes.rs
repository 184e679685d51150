//! Error code definitions for grammar compilation
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (stray characters, unterminated quotes)
//! - E02xx: Structural errors (brackets, braces, captures)
//! - E03xx: Resolution errors (references, units)
//! - E04xx: Multiplicity errors
//! - E05xx: Group operator errors

use std::fmt;

/// Error codes for grammar compilation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Character that cannot start an element
    E0101,
    /// Unterminated quoted literal
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// Unterminated reference `<`
    E0201,
    /// Unclosed group `[`
    E0202,
    /// Unexpected closing `]`
    E0203,
    /// Unterminated multiplicity `{`
    E0204,
    /// Malformed capture `( $name )`
    E0205,

    // =========================================================================
    // E03xx: Resolution errors
    // =========================================================================
    /// Referenced grammar is not registered
    E0301,
    /// Unit has no registered acceptor
    E0302,

    // =========================================================================
    // E04xx: Multiplicity errors
    // =========================================================================
    /// Malformed multiplicity body
    E0401,
    /// Multiplicity or capture with no preceding element
    E0402,

    // =========================================================================
    // E05xx: Group operator errors
    // =========================================================================
    /// Different group operators mixed within one group
    E0501,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0202")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0501 => "E0501",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 | Self::E0204 | Self::E0205 => {
                "structural error"
            }
            Self::E0301 | Self::E0302 => "resolution error",
            Self::E0401 | Self::E0402 => "multiplicity error",
            Self::E0501 => "operator error",
        }
    }

    /// Get the default message for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "unexpected character",
            Self::E0102 => "unterminated quoted literal",
            Self::E0201 => "unterminated reference",
            Self::E0202 => "unclosed group",
            Self::E0203 => "unexpected closing bracket",
            Self::E0204 => "unterminated multiplicity",
            Self::E0205 => "malformed capture name",
            Self::E0301 => "unknown referenced grammar",
            Self::E0302 => "unknown unit",
            Self::E0401 => "malformed multiplicity",
            Self::E0402 => "nothing to apply to",
            Self::E0501 => "mixed group operators",
        }
    }

    /// Whether the error comes from a lookup rather than from the text itself
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::E0301 | Self::E0302)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
