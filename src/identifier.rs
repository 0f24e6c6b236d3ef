//! Identifier validation
//!
//! Binding names follow the script-identifier convention:
//! - Start with an ASCII letter, `_` or `$`
//! - Continue with ASCII letters, digits, `_` or `$`
//!
//! Single pass over the bytes, no allocations on success.

use crate::error::ScopeError;

const RULE: &str = "must start with a letter, '_' or '$', then letters, digits, '_' or '$'";

fn is_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte == b'$'
}

fn is_continue(byte: u8) -> bool {
    is_start(byte) || byte.is_ascii_digit()
}

/// Validate a binding name
///
/// Valid: `a`, `value`, `_tmp`, `$el`, `x1`
///
/// Invalid: `` (empty), `1a` (digit first), `my-var` (dash), `a.b` (dot)
pub fn validate_identifier(name: &str) -> Result<(), ScopeError> {
    let bytes = name.as_bytes();

    let Some((&first, rest)) = bytes.split_first() else {
        return Err(ScopeError::InvalidIdentifier {
            name: name.to_string(),
            reason: "cannot be empty".into(),
        });
    };

    if !is_start(first) || !rest.iter().copied().all(is_continue) {
        return Err(ScopeError::InvalidIdentifier {
            name: name.to_string(),
            reason: RULE.into(),
        });
    }

    Ok(())
}
