use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An atomic ranked object: an integer or a string identifier.
///
/// Identifiers carry one natural total order: integers compare
/// numerically, strings lexicographically, and integers order before
/// strings so that mixed universes still sort deterministically. This
/// order assigns the canonical index every pipeline stage works with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Int(i64),
    Str(String),
}

impl Ord for ObjectId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ObjectId::Int(a), ObjectId::Int(b)) => a.cmp(b),
            (ObjectId::Str(a), ObjectId::Str(b)) => a.cmp(b),
            (ObjectId::Int(_), ObjectId::Str(_)) => Ordering::Less,
            (ObjectId::Str(_), ObjectId::Int(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for ObjectId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Int(n) => write!(f, "{n}"),
            ObjectId::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ObjectId {
    fn from(n: i64) -> Self {
        ObjectId::Int(n)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        ObjectId::Str(s.to_string())
    }
}
