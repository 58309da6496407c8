//! Orientation: turn a skeleton into a CPDAG.
//!
//! Step A orients unshielded colliders once, from the skeleton and its
//! separation sets. Step B applies Meek rules 1–3 to a fixpoint. Neither
//! step removes an edge or reverses an arc.

pub mod colliders;
pub mod meek;

use serde::{Deserialize, Serialize};
use tracing::info;

use cpdag_core::config::OrientationConfig;
use cpdag_core::errors::{ConsistencyError, PcResult};
use cpdag_core::{Cpdag, Skeleton};

use crate::graph::dag_enforcement;

/// Counters from one orientation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationStats {
    /// Unshielded triples oriented as colliders.
    pub colliders: usize,
    /// Collider orientations dropped because an earlier triple already
    /// pointed the edge the other way.
    pub conflicts: usize,
    pub rule1: usize,
    pub rule2: usize,
    pub rule3: usize,
    /// Propagation passes, including the final one that changed nothing.
    pub passes: usize,
}

impl OrientationStats {
    /// Edges oriented by Step B.
    pub fn propagated(&self) -> usize {
        self.rule1 + self.rule2 + self.rule3
    }
}

#[derive(Debug, Clone)]
pub struct OrientationOutcome {
    pub cpdag: Cpdag,
    pub stats: OrientationStats,
}

/// Collider detection followed by rule propagation.
#[derive(Default)]
pub struct OrientationEngine {
    config: OrientationConfig,
}

impl OrientationEngine {
    pub fn new(config: OrientationConfig) -> Self {
        Self { config }
    }

    /// Orient `skeleton`. The skeleton is validated first: a missing or
    /// stray separation set is an internal-consistency error.
    pub fn orient(&self, skeleton: &Skeleton) -> PcResult<OrientationOutcome> {
        skeleton.validate()?;

        let mut cpdag = Cpdag::from_skeleton(skeleton.graph());
        let mut stats = OrientationStats::default();

        colliders::orient_colliders(
            skeleton,
            &mut cpdag,
            self.config.collider_conflicts,
            &mut stats,
        )?;
        meek::propagate_into(&mut cpdag, &mut stats)?;

        let cycles = dag_enforcement::find_directed_cycles(&cpdag);
        if let Some(cycle) = cycles.first() {
            return Err(ConsistencyError::DirectedCycle {
                path: dag_enforcement::format_cycle(cycle),
            }
            .into());
        }

        info!(
            arcs = cpdag.arc_count(),
            undirected = cpdag.undirected_count(),
            colliders = stats.colliders,
            propagated = stats.propagated(),
            conflicts = stats.conflicts,
            "cpdag oriented"
        );

        Ok(OrientationOutcome { cpdag, stats })
    }
}

/// Orient a skeleton with the default configuration.
pub fn estimate_cpdag(skeleton: &Skeleton) -> PcResult<Cpdag> {
    OrientationEngine::default()
        .orient(skeleton)
        .map(|outcome| outcome.cpdag)
}
