//! Caller input rejected before any testing begins.

use super::error_code::{self, PcErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("row {row} has {found} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{len} values cannot fill a {rows}x{cols} sample")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },

    #[error("significance level {value} must lie strictly between 0 and 1")]
    SignificanceOutOfRange { value: f64 },

    #[error("variable {var} is out of range for {num_variables} variables")]
    VariableOutOfRange { var: usize, num_variables: usize },
}

impl InputError {
    /// Validate a significance threshold α ∈ (0, 1).
    pub fn check_significance(value: f64) -> Result<f64, Self> {
        if value > 0.0 && value < 1.0 {
            Ok(value)
        } else {
            Err(Self::SignificanceOutOfRange { value })
        }
    }
}

impl PcErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
