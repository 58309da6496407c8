//! Orientation configuration.

use serde::{Deserialize, Serialize};

/// What to do when two unshielded triples orient one edge in opposite
/// directions. Only reachable when the oracle is unfaithful to any DAG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// The orientation from the earlier triple (ascending order) stands.
    #[default]
    KeepFirst,
    /// Fail with a consistency error.
    Reject,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrientationConfig {
    pub collider_conflicts: ConflictPolicy,
}
