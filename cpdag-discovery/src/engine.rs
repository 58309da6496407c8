//! PcEngine: skeleton estimation followed by orientation.

use tracing::info;

use cpdag_core::config::PcConfig;
use cpdag_core::constants::VERSION;
use cpdag_core::errors::PcResult;
use cpdag_core::{Cpdag, IndependenceTest, SampleMatrix, Skeleton};

use crate::orientation::{OrientationEngine, OrientationStats};
use crate::skeleton::{SkeletonEstimator, SkeletonStats};

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct PcOutput {
    pub skeleton: Skeleton,
    pub cpdag: Cpdag,
    pub skeleton_stats: SkeletonStats,
    pub orientation_stats: OrientationStats,
}

/// Runs the full pipeline: data + oracle → skeleton → CPDAG.
///
/// Holds no state between runs; each call owns its graphs exclusively.
pub struct PcEngine {
    skeleton: SkeletonEstimator,
    orientation: OrientationEngine,
}

impl PcEngine {
    /// Validate `config` and build an engine.
    pub fn new(config: PcConfig) -> PcResult<Self> {
        config.validate()?;
        Ok(Self {
            skeleton: SkeletonEstimator::new(config.skeleton),
            orientation: OrientationEngine::new(config.orientation),
        })
    }

    /// Engine with default configuration at threshold `significance_level`.
    pub fn with_significance(significance_level: f64) -> PcResult<Self> {
        let mut config = PcConfig::default();
        config.skeleton.significance_level = Some(significance_level);
        Self::new(config)
    }

    pub fn run<T, O>(&self, data: &SampleMatrix<T>, oracle: &O) -> PcResult<PcOutput>
    where
        T: Sync,
        O: IndependenceTest<T> + ?Sized,
    {
        info!(
            version = VERSION,
            observations = data.num_rows(),
            variables = data.num_variables(),
            alpha = self.skeleton.config().effective_significance_level(),
            "pc run started"
        );

        let skeleton_outcome = self.skeleton.estimate(data, oracle)?;
        let orientation_outcome = self.orientation.orient(&skeleton_outcome.skeleton)?;

        Ok(PcOutput {
            skeleton: skeleton_outcome.skeleton,
            cpdag: orientation_outcome.cpdag,
            skeleton_stats: skeleton_outcome.stats,
            orientation_stats: orientation_outcome.stats,
        })
    }
}

impl Default for PcEngine {
    fn default() -> Self {
        Self {
            skeleton: SkeletonEstimator::default(),
            orientation: OrientationEngine::default(),
        }
    }
}
