//! Skeleton estimation: prune the complete graph by conditional-independence
//! tests with conditioning sets of growing size.
//!
//! Levels `l = 0, 1, 2, …` run in order. Within a level, ordered pairs
//! `(i, j)` are visited in ascending lexicographic order; a pair is tested
//! only while `i — j` is still present, drawing conditioning sets from
//! `adj(i) \ {j}`. An unordered edge is therefore tried from its lower
//! endpoint first and, if it survives, from its higher endpoint later in the
//! same level. The first subset (lexicographic) with `p > α` removes the
//! edge and becomes its separation set.
//!
//! Removals take effect immediately, so later pairs in the same level see
//! the pruned neighbourhoods. The result depends on this fixed order; that
//! is a property of the classical algorithm and is kept as is.
//! [`SkeletonVariant::Stable`] freezes neighbourhoods per level instead.
//!
//! Cost: a pair whose endpoint has degree `k` may need `C(k-1, l)` tests at
//! level `l`, so the worst case grows exponentially with the maximum degree.
//! Sparse graphs stop after a few levels.

pub mod search;
pub mod subsets;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use cpdag_core::config::{SkeletonConfig, SkeletonVariant};
use cpdag_core::errors::{InputError, PcResult};
use cpdag_core::{IndependenceTest, SampleMatrix, SeparationSets, Skeleton, UndirectedGraph, VarId};

use search::PairQuery;

/// Counters from one estimation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletonStats {
    /// Oracle calls made.
    pub tests_performed: usize,
    /// Levels that were entered (including the final one that found no
    /// pair with enough neighbours).
    pub levels_completed: usize,
    pub edges_removed: usize,
}

/// Skeleton plus run counters.
#[derive(Debug, Clone)]
pub struct SkeletonOutcome {
    pub skeleton: Skeleton,
    pub stats: SkeletonStats,
}

/// Drives independence tests and edge removals.
pub struct SkeletonEstimator {
    config: SkeletonConfig,
}

impl SkeletonEstimator {
    pub fn new(config: SkeletonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SkeletonConfig {
        &self.config
    }

    /// Estimate the skeleton of `data` using `oracle`.
    pub fn estimate<T, O>(&self, data: &SampleMatrix<T>, oracle: &O) -> PcResult<SkeletonOutcome>
    where
        T: Sync,
        O: IndependenceTest<T> + ?Sized,
    {
        let alpha = InputError::check_significance(self.config.effective_significance_level())?;
        let num_variables = data.num_variables();
        let mut graph = UndirectedGraph::complete(num_variables);
        let mut separation_sets = SeparationSets::new();
        let mut stats = SkeletonStats::default();

        if num_variables < 2 {
            return Ok(SkeletonOutcome {
                skeleton: Skeleton::new(graph, separation_sets),
                stats,
            });
        }

        let parallel = self.config.effective_parallel_subsets();
        let mut level = 0;
        loop {
            if self.config.max_conditioning_size.is_some_and(|max| level > max) {
                break;
            }

            let frozen = match self.config.variant {
                SkeletonVariant::Stable => Some(graph.clone()),
                SkeletonVariant::Classical => None,
            };
            let removed_before = stats.edges_removed;
            let mut any_eligible = false;

            for x in 0..num_variables {
                for y in 0..num_variables {
                    if x == y || !graph.has_edge(x, y) {
                        continue;
                    }
                    let source = frozen.as_ref().unwrap_or(&graph);
                    let candidates: Vec<VarId> = source.neighbors(x).filter(|&k| k != y).collect();
                    if candidates.len() < level {
                        continue;
                    }
                    any_eligible = true;

                    let query = PairQuery {
                        x,
                        y,
                        candidates: &candidates,
                        level,
                        alpha,
                    };
                    let outcome = if parallel {
                        search::parallel(oracle, data, &query)?
                    } else {
                        search::sequential(oracle, data, &query)?
                    };
                    stats.tests_performed += outcome.tests;

                    if let Some(set) = outcome.separating_set {
                        debug!(x, y, level, separating_set = ?set, "removed edge");
                        graph.remove_edge(x, y);
                        separation_sets.insert(x, y, set)?;
                        stats.edges_removed += 1;
                    }
                }
            }

            stats.levels_completed += 1;
            debug!(
                level,
                removed = stats.edges_removed - removed_before,
                remaining = graph.edge_count(),
                "level finished"
            );
            if !any_eligible {
                break;
            }
            level += 1;
        }

        info!(
            variables = num_variables,
            edges = graph.edge_count(),
            removed = stats.edges_removed,
            tests = stats.tests_performed,
            levels = stats.levels_completed,
            "skeleton estimated"
        );

        Ok(SkeletonOutcome {
            skeleton: Skeleton::new(graph, separation_sets),
            stats,
        })
    }
}

impl Default for SkeletonEstimator {
    fn default() -> Self {
        Self::new(SkeletonConfig::default())
    }
}

/// Classical skeleton estimation at threshold `significance_level`.
///
/// Returns the pruned graph together with the separation set of every
/// removed pair.
pub fn estimate_skeleton<T, O>(
    data: &SampleMatrix<T>,
    oracle: &O,
    significance_level: f64,
) -> PcResult<Skeleton>
where
    T: Sync,
    O: IndependenceTest<T> + ?Sized,
{
    SkeletonEstimator::new(SkeletonConfig::with_significance(significance_level))
        .estimate(data, oracle)
        .map(|outcome| outcome.skeleton)
}
