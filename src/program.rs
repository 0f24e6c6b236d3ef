//! The walkthrough itself: one LHS step, one RHS step

use std::io::Write;

use tracing::info;

use crate::error::ScopeError;
use crate::scope::Scope;

/// Name of the single binding
pub const NAME: &str = "a";

/// Literal assigned to it
pub const VALUE: &str = "value";

/// Declare `a = "value"`, then read `a` and write it to `sink`
///
/// Returns the scope so callers can inspect the lookup trace.
pub fn run<W: Write>(sink: &mut W) -> Result<Scope, ScopeError> {
    let mut scope = Scope::new();

    // LHS: only the container matters
    scope.declare_and_assign(NAME, VALUE)?;

    // RHS: the value is needed
    let emitted = scope.read_and_emit(NAME, sink)?;

    info!(name = NAME, value = %emitted, lookups = scope.lookups().len(), "done");
    Ok(scope)
}
