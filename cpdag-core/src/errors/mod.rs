//! Error handling for PC discovery.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod consistency_error;
pub mod error_code;
pub mod input_error;
pub mod oracle_error;

pub use config_error::ConfigError;
pub use consistency_error::ConsistencyError;
pub use error_code::PcErrorCode;
pub use input_error::InputError;
pub use oracle_error::OracleError;

/// Top-level error type. Aggregates the per-concern errors via `From`
/// conversions so `?` works across the whole pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PcError {
    #[error("Oracle contract violated: {0}")]
    Oracle(#[from] OracleError),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Internal consistency violated: {0}")]
    Consistency(#[from] ConsistencyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias used throughout the workspace.
pub type PcResult<T> = Result<T, PcError>;

impl PcError {
    /// Whether this error indicates a broken invariant between phases.
    /// These are defects, never caller mistakes.
    pub fn is_fatal_defect(&self) -> bool {
        matches!(self, Self::Consistency(_))
    }
}

impl PcErrorCode for PcError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Consistency(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
