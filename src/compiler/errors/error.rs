//! The grammar compilation error type

use text_size::TextSize;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::Name;

/// Result of a compilation step
pub type CompileResult<T> = Result<T, GrammarError>;

/// A fatal grammar compilation error
///
/// Carries:
/// - Categorized error code
/// - The property whose grammar failed (`None` for anonymous grammars)
/// - The offending token and the text consumed up to and including it
/// - Byte offset of the failure within the grammar text
/// - Optional hint for fixing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "grammar compilation error [{code}] in '{}': {message} at '{token}' (parsed so far: '{consumed}')",
    .property.as_deref().unwrap_or("<anonymous>")
)]
pub struct GrammarError {
    pub code: ErrorCode,
    pub message: String,
    pub property: Option<Name>,
    pub token: String,
    pub consumed: String,
    pub offset: TextSize,
    pub hint: Option<String>,
}

impl GrammarError {
    /// Create a builder for error construction
    pub fn builder(code: ErrorCode) -> GrammarErrorBuilder {
        GrammarErrorBuilder::new(code)
    }

    /// Add a hint to this error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    /// Format the error with its hint for display
    pub fn format(&self) -> String {
        let mut result = self.to_string();
        if let Some(hint) = &self.hint {
            result.push_str(&format!("\n  hint: {}", hint));
        }
        result
    }
}

/// Builder for [`GrammarError`]
pub struct GrammarErrorBuilder {
    code: ErrorCode,
    message: Option<String>,
    property: Option<Name>,
    token: String,
    consumed: String,
    offset: TextSize,
    hint: Option<String>,
}

impl GrammarErrorBuilder {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: None,
            property: None,
            token: String::new(),
            consumed: String::new(),
            offset: TextSize::new(0),
            hint: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn property(mut self, property: Option<Name>) -> Self {
        self.property = property;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn consumed(mut self, consumed: impl Into<String>) -> Self {
        self.consumed = consumed.into();
        self
    }

    pub fn offset(mut self, offset: TextSize) -> Self {
        self.offset = offset;
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Build the error, falling back to the code's default message
    pub fn build(self) -> GrammarError {
        GrammarError {
            message: self
                .message
                .unwrap_or_else(|| self.code.default_message().to_string()),
            code: self.code,
            property: self.property,
            token: self.token,
            consumed: self.consumed,
            offset: self.offset,
            hint: self.hint,
        }
    }
}
