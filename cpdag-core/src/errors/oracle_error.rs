//! Independence-oracle contract violations.

use super::error_code::{self, PcErrorCode};
use crate::models::VarId;

/// The oracle returned something the estimator cannot interpret, or failed
/// while evaluating. Never masked as dependence or independence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OracleError {
    #[error("p-value for ({x}, {y} | {conditioning:?}) is NaN")]
    NotANumber {
        x: VarId,
        y: VarId,
        conditioning: Vec<VarId>,
    },

    #[error("p-value {value} for ({x}, {y} | {conditioning:?}) lies outside [0, 1]")]
    OutOfRange {
        x: VarId,
        y: VarId,
        conditioning: Vec<VarId>,
        value: f64,
    },

    #[error("evaluation of ({x}, {y}) failed: {reason}")]
    EvaluationFailed { x: VarId, y: VarId, reason: String },
}

impl OracleError {
    /// Check a raw p-value against the oracle contract.
    pub fn check(x: VarId, y: VarId, conditioning: &[VarId], value: f64) -> Result<f64, Self> {
        if value.is_nan() {
            return Err(Self::NotANumber {
                x,
                y,
                conditioning: conditioning.to_vec(),
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(Self::OutOfRange {
                x,
                y,
                conditioning: conditioning.to_vec(),
                value,
            });
        }
        Ok(value)
    }
}

impl PcErrorCode for OracleError {
    fn error_code(&self) -> &'static str {
        error_code::ORACLE_ERROR
    }
}
