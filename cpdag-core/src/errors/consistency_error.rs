//! Broken invariants between skeleton estimation and orientation.
//! These indicate defects and are never patched over.

use super::error_code::{self, PcErrorCode};
use crate::models::{VarId, VarPair};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("edge {pair} is absent from the skeleton")]
    EdgeAbsent { pair: VarPair },

    #[error("separation set missing for removed pair {pair}")]
    MissingSeparationSet { pair: VarPair },

    #[error("separation set recorded for adjacent pair {pair}")]
    UnexpectedSeparationSet { pair: VarPair },

    #[error("separation set for {pair} is already recorded")]
    SeparationSetAlreadyRecorded { pair: VarPair },

    #[error("adjacency is asymmetric between {a} and {b}")]
    AsymmetricAdjacency { a: VarId, b: VarId },

    #[error("collider at {at} conflicts with existing orientation {from} -> {to}")]
    ConflictingCollider { at: VarId, from: VarId, to: VarId },

    #[error("orientation produced a directed cycle: {path}")]
    DirectedCycle { path: String },

    #[error("variable {var} is linked to itself")]
    SelfLoop { var: VarId },

    #[error("pair {pair} is listed more than once")]
    DuplicatePair { pair: VarPair },

    #[error("graph has {expected} variables but {found} were supplied")]
    VariableCountMismatch { expected: usize, found: usize },
}

impl PcErrorCode for ConsistencyError {
    fn error_code(&self) -> &'static str {
        error_code::CONSISTENCY_ERROR
    }
}
