//! Grammar compilation errors
//!
//! Every failure aborts compilation and is reported as one [`GrammarError`]:
//! - Categorized error codes for filtering and documentation
//! - The property whose grammar text failed
//! - The offending fragment and the text consumed before it

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{CompileResult, GrammarError, GrammarErrorBuilder};
