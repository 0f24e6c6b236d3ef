//! Reference kinds and the lookup trace
//!
//! Every name resolution is either an LHS lookup (find the container to
//! assign into) or an RHS lookup (fetch the value out of the container).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of an assignment a lookup serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    /// Target of an assignment; prior value is irrelevant
    Lhs,
    /// Source of a value; binding must be assigned
    Rhs,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Lhs => f.write_str("LHS"),
            ReferenceKind::Rhs => f.write_str("RHS"),
        }
    }
}

/// One recorded resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    pub kind: ReferenceKind,
    pub name: String,
}

impl Lookup {
    pub fn lhs(name: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Lhs,
            name: name.into(),
        }
    }

    pub fn rhs(name: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Rhs,
            name: name.into(),
        }
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
