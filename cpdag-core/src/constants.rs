/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Significance level used when none is configured.
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.01;

/// Environment variable overriding the significance level.
pub const ENV_SIGNIFICANCE_LEVEL: &str = "CPDAG_SIGNIFICANCE_LEVEL";

/// Environment variable overriding the maximum conditioning-set size.
pub const ENV_MAX_CONDITIONING_SIZE: &str = "CPDAG_MAX_CONDITIONING_SIZE";

/// Environment variable selecting the skeleton variant (`classical` / `stable`).
pub const ENV_SKELETON_VARIANT: &str = "CPDAG_SKELETON_VARIANT";
