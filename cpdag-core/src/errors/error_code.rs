//! Stable error codes, one per error family.

pub const ORACLE_ERROR: &str = "ORACLE_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONSISTENCY_ERROR: &str = "CONSISTENCY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait PcErrorCode {
    fn error_code(&self) -> &'static str;
}
