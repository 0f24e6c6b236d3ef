//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("SCOPE-001: Unbound reference '{name}'")]
    UnboundReference { name: String },

    #[error("SCOPE-002: '{name}' is already declared in this scope")]
    AlreadyDeclared { name: String },

    #[error("SCOPE-003: Invalid identifier '{name}': {reason}")]
    InvalidIdentifier { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FixSuggestion for ScopeError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            ScopeError::UnboundReference { .. } => {
                Some("Declare and assign the name before reading it")
            }
            ScopeError::AlreadyDeclared { .. } => {
                Some("Assign to the existing binding instead of declaring it again")
            }
            ScopeError::InvalidIdentifier { .. } => {
                Some("Start with a letter, '_' or '$', then letters, digits, '_' or '$'")
            }
            ScopeError::Io(_) => Some("Check that stdout is writable (closed pipe?)"),
        }
    }
}
