use std::fmt;

use text_size::{TextRange, TextSize};

use crate::base::Name;

/// A piece of input matched by a value element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub text: Name,
    pub range: TextRange,
}

impl Token {
    pub fn new(text: impl Into<Name>, range: TextRange) -> Self {
        Self {
            text: text.into(),
            range,
        }
    }

    /// Token starting at `offset` and spanning its own text.
    pub fn at(text: impl Into<Name>, offset: TextSize) -> Self {
        let text = text.into();
        let range = TextRange::at(offset, TextSize::of(text.as_str()));
        Self { text, range }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
