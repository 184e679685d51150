/// Knobs for one [`GrammarCompiler`](super::GrammarCompiler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    /// Drop the bare word `inherit` from embedded reference grammars.
    pub strip_inherit: bool,
    /// Fail when one group uses two different group operators. When off, the
    /// last operator seen sets the group type.
    pub reject_mixed_operators: bool,
    /// Bare-word literals match case-insensitively. Quoted literals are
    /// always case-sensitive.
    pub case_insensitive_words: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            strip_inherit: true,
            reject_mixed_operators: false,
            case_insensitive_words: true,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strip_inherit(mut self, yes: bool) -> Self {
        self.strip_inherit = yes;
        self
    }

    pub fn reject_mixed_operators(mut self, yes: bool) -> Self {
        self.reject_mixed_operators = yes;
        self
    }

    pub fn case_insensitive_words(mut self, yes: bool) -> Self {
        self.case_insensitive_words = yes;
        self
    }
}
