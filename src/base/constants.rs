//! Notation constants shared by the scanner and the element renderer.

/// Keyword dropped from embedded reference grammars.
pub const INHERIT: &str = "inherit";

pub const GROUP_OPEN: char = '[';
pub const GROUP_CLOSE: char = ']';
pub const REFERENCE_OPEN: char = '<';
pub const REFERENCE_CLOSE: char = '>';
pub const MULTIPLICITY_OPEN: char = '{';
pub const MULTIPLICITY_CLOSE: char = '}';
pub const CAPTURE_OPEN: char = '(';
pub const CAPTURE_CLOSE: char = ')';
pub const CAPTURE_SIGIL: char = '$';
pub const UNIT_SIGIL: char = '!';

/// Characters that end a bare word.
pub const OPERATOR_CHARS: &[char] = &[
    '[', ']', '|', '&', '{', '}', '+', '*', '?', '<', '>', '!', '\'', '"', '(', ')',
];

/// Check whether `c` terminates a bare word.
pub fn is_word_terminator(c: char) -> bool {
    c.is_whitespace() || OPERATOR_CHARS.contains(&c)
}
