//! Step A: unshielded-collider detection from the skeleton.

use tracing::{debug, warn};

use cpdag_core::config::ConflictPolicy;
use cpdag_core::errors::{ConsistencyError, PcResult};
use cpdag_core::models::OrientOutcome;
use cpdag_core::{Cpdag, Skeleton, VarId};

use super::OrientationStats;

/// Orient `x → z ← y` for every unshielded triple `x — z — y` whose
/// separation set for `{x, y}` does not contain `z`.
///
/// Adjacency and separation sets are read from `skeleton` only, never from
/// the evolving `cpdag`. Triples are visited by ascending `(x, y)`, then
/// ascending `z`.
pub fn orient_colliders(
    skeleton: &Skeleton,
    cpdag: &mut Cpdag,
    policy: ConflictPolicy,
    stats: &mut OrientationStats,
) -> PcResult<()> {
    let graph = skeleton.graph();
    for pair in graph.all_pairs() {
        let (x, y) = (pair.low(), pair.high());
        if graph.has_edge(x, y) {
            continue;
        }
        let separation = skeleton
            .separation_sets()
            .get(x, y)
            .ok_or(ConsistencyError::MissingSeparationSet { pair })?;

        let common: Vec<VarId> = graph
            .neighbors(x)
            .filter(|&z| graph.has_edge(y, z))
            .collect();

        for z in common {
            if separation.contains(&z) {
                continue;
            }
            debug!(x, z, y, "collider");
            stats.colliders += 1;
            orient_into(cpdag, x, z, policy, stats)?;
            orient_into(cpdag, y, z, policy, stats)?;
        }
    }
    Ok(())
}

fn orient_into(
    cpdag: &mut Cpdag,
    from: VarId,
    to: VarId,
    policy: ConflictPolicy,
    stats: &mut OrientationStats,
) -> PcResult<()> {
    match cpdag.orient(from, to)? {
        OrientOutcome::Oriented | OrientOutcome::Unchanged => Ok(()),
        OrientOutcome::Opposed => match policy {
            ConflictPolicy::KeepFirst => {
                stats.conflicts += 1;
                warn!(from, to, "collider opposes an earlier orientation; keeping the earlier one");
                Ok(())
            }
            ConflictPolicy::Reject => Err(ConsistencyError::ConflictingCollider {
                at: to,
                from: to,
                to: from,
            }
            .into()),
        },
    }
}
