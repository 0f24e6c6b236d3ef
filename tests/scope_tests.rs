//! Library-level tests for the binding lifecycle and lookup trace

use pretty_assertions::assert_eq;
use scopebind::{program, BindingState, FixSuggestion, Lookup, ReferenceKind, Scope, ScopeError};

// ═══════════════════════════════════════════════════════════════
// Lifecycle: Unbound → Bound
// ═══════════════════════════════════════════════════════════════

#[test]
fn round_trip_identity() {
    for (name, value) in [("a", "value"), ("_x", ""), ("$y", "multi\nline")] {
        let mut scope = Scope::new();
        scope.declare_and_assign(name, value).unwrap();
        assert_eq!(scope.read(name).unwrap(), value);
    }
}

#[test]
fn never_returns_to_unbound() {
    let mut scope = Scope::new();
    scope.declare("a").unwrap();
    scope.assign("a", "first").unwrap();
    scope.assign("a", "second").unwrap();

    assert_eq!(
        scope.get("a").unwrap().state(),
        &BindingState::Bound("second".into())
    );
}

#[test]
fn unbound_read_has_no_default() {
    let mut scope = Scope::new();
    let mut out = Vec::new();

    let err = scope.read_and_emit("a", &mut out).unwrap_err();

    assert_eq!(err.to_string(), "SCOPE-001: Unbound reference 'a'");
    assert!(err.fix_suggestion().is_some());
    assert!(out.is_empty());
}

#[test]
fn duplicate_declaration_rejected() {
    let mut scope = Scope::new();
    scope.declare("a").unwrap();
    assert!(matches!(
        scope.declare("a"),
        Err(ScopeError::AlreadyDeclared { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════
// Program
// ═══════════════════════════════════════════════════════════════

#[test]
fn program_emits_single_line() {
    let mut out = Vec::new();
    let scope = program::run(&mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "value\n");
    assert_eq!(scope.get(program::NAME).unwrap().value(), Some(program::VALUE));
}

#[test]
fn program_trace_shows_both_sides() {
    let mut out = Vec::new();
    let scope = program::run(&mut out).unwrap();

    let kinds: Vec<ReferenceKind> = scope.lookups().iter().map(|l| l.kind).collect();
    assert_eq!(kinds, vec![ReferenceKind::Lhs, ReferenceKind::Rhs]);
    assert_eq!(scope.lookups()[1], Lookup::rhs("a"));
}

#[test]
fn program_is_repeatable() {
    let outputs: Vec<Vec<u8>> = (0..5)
        .map(|_| {
            let mut out = Vec::new();
            program::run(&mut out).unwrap();
            out
        })
        .collect();

    assert!(outputs.windows(2).all(|w| w[0] == w[1]));
}
