//! scopebind - LHS vs RHS references over a single binding

pub mod error;
pub mod identifier;
pub mod program;
pub mod reference;
pub mod scope;

pub use error::{FixSuggestion, ScopeError};
pub use identifier::validate_identifier;
pub use reference::{Lookup, ReferenceKind};
pub use scope::{Binding, BindingState, Scope};
