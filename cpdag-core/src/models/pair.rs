//! Variable identifiers and canonical unordered pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConsistencyError;

/// A variable is a column index `0..D` of the sample.
pub type VarId = usize;

/// Unordered variable pair stored as `(low, high)` with `low < high`.
///
/// Every pair-indexed structure keys on this type so that `{i, j}` and
/// `{j, i}` resolve to the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(VarId, VarId)", into = "(VarId, VarId)")]
pub struct VarPair {
    low: VarId,
    high: VarId,
}

impl VarPair {
    /// Create a pair, normalising the order. `a` and `b` should differ.
    pub fn new(a: VarId, b: VarId) -> Self {
        debug_assert_ne!(a, b, "a variable cannot pair with itself");
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Create a pair from untrusted input, rejecting `a == b`.
    pub fn try_new(a: VarId, b: VarId) -> Result<Self, ConsistencyError> {
        if a == b {
            return Err(ConsistencyError::SelfLoop { var: a });
        }
        Ok(Self::new(a, b))
    }

    pub fn low(&self) -> VarId {
        self.low
    }

    pub fn high(&self) -> VarId {
        self.high
    }

    pub fn contains(&self, v: VarId) -> bool {
        self.low == v || self.high == v
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    pub fn other(&self, v: VarId) -> Option<VarId> {
        if v == self.low {
            Some(self.high)
        } else if v == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl TryFrom<(VarId, VarId)> for VarPair {
    type Error = ConsistencyError;

    fn try_from((a, b): (VarId, VarId)) -> Result<Self, Self::Error> {
        Self::try_new(a, b)
    }
}

impl From<VarPair> for (VarId, VarId) {
    fn from(pair: VarPair) -> Self {
        (pair.low, pair.high)
    }
}

impl fmt::Display for VarPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.low, self.high)
    }
}
