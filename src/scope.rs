//! Binding store for a single scope
//!
//! Each binding moves through two states:
//!
//! ```text
//! declare            assign / declare_and_assign
//!   → Unbound  ─────────────────────────────→  Bound(value)
//! ```
//!
//! A binding never returns to `Unbound`. LHS operations (`declare`,
//! `assign`, `declare_and_assign`) only need the container; RHS operations
//! (`read`, `read_and_emit`) need the value and fail on `Unbound`.
//! Every resolution is appended to the lookup trace, including failed ones.

use std::io::Write;

use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::ScopeError;
use crate::identifier::validate_identifier;
use crate::reference::{Lookup, ReferenceKind};

/// Lifecycle state of a binding
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BindingState {
    /// Declared, no value yet
    #[default]
    Unbound,
    /// Holds a text value
    Bound(String),
}

/// Name → storage slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    name: String,
    state: BindingState,
}

impl Binding {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: BindingState::Unbound,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &BindingState {
        &self.state
    }

    /// Current value, if assigned
    pub fn value(&self) -> Option<&str> {
        match &self.state {
            BindingState::Bound(v) => Some(v),
            BindingState::Unbound => None,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindingState::Bound(_))
    }
}

/// Single-scope binding table with a lookup trace
#[derive(Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
    lookups: Vec<Lookup>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, kind: ReferenceKind, name: &str) {
        debug!(%kind, name, "lookup");
        self.lookups.push(Lookup {
            kind,
            name: name.to_string(),
        });
    }

    fn insert_unbound(&mut self, name: &str) -> Result<(), ScopeError> {
        validate_identifier(name)?;
        if self.bindings.contains_key(name) {
            return Err(ScopeError::AlreadyDeclared {
                name: name.to_string(),
            });
        }
        self.bindings.insert(name.to_string(), Binding::new(name));
        Ok(())
    }

    fn store(&mut self, name: &str, value: String) -> Result<(), ScopeError> {
        let binding = self
            .bindings
            .get_mut(name)
            .ok_or_else(|| ScopeError::UnboundReference {
                name: name.to_string(),
            })?;
        binding.state = BindingState::Bound(value);
        Ok(())
    }

    /// Declare `name` without a value (LHS)
    pub fn declare(&mut self, name: &str) -> Result<(), ScopeError> {
        self.record(ReferenceKind::Lhs, name);
        self.insert_unbound(name)
    }

    /// Assign to an existing declaration (LHS)
    ///
    /// The prior value is never inspected.
    pub fn assign(&mut self, name: &str, value: impl Into<String>) -> Result<(), ScopeError> {
        self.record(ReferenceKind::Lhs, name);
        self.store(name, value.into())
    }

    /// Declare `name` and bind `value` in one LHS step, like `let a = 'value'`
    ///
    /// On error the scope is left unchanged apart from the trace.
    pub fn declare_and_assign(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ScopeError> {
        self.record(ReferenceKind::Lhs, name);
        self.insert_unbound(name)?;
        self.store(name, value.into())
    }

    /// Fetch the current value (RHS)
    pub fn read(&mut self, name: &str) -> Result<&str, ScopeError> {
        self.record(ReferenceKind::Rhs, name);
        self.bindings
            .get(name)
            .and_then(Binding::value)
            .ok_or_else(|| ScopeError::UnboundReference {
                name: name.to_string(),
            })
    }

    /// Fetch the current value (RHS) and write it to `sink` as one line
    ///
    /// Nothing is written when the reference is unbound.
    #[instrument(skip(self, sink))]
    pub fn read_and_emit<W: Write>(&mut self, name: &str, sink: &mut W) -> Result<String, ScopeError> {
        let value = self.read(name)?.to_owned();
        writeln!(sink, "{value}")?;
        sink.flush()?;
        Ok(value)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.get(name).is_some_and(Binding::is_bound)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Every resolution so far, in order
    pub fn lookups(&self) -> &[Lookup] {
        &self.lookups
    }

    /// Lookup trace as a JSON array
    pub fn trace_json(&self) -> Value {
        serde_json::to_value(&self.lookups).unwrap_or(Value::Null)
    }
}
