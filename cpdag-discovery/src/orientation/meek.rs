//! Step B: Meek propagation rules 1–3, applied to a fixpoint.

use tracing::debug;

use cpdag_core::errors::PcResult;
use cpdag_core::models::OrientOutcome;
use cpdag_core::{Cpdag, VarId, VarPair};

use super::OrientationStats;

/// Which rule licensed an orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeekRule {
    /// `w → x — y`, `w` and `y` not adjacent.
    AvoidNewCollider,
    /// `x → z → y` with `x — y`.
    AvoidCycle,
    /// `x — z1 → y`, `x — z2 → y`, `z1` and `z2` not adjacent.
    TwoMediators,
}

/// Rule 1: some parent of `x` is not adjacent to `y`.
fn avoid_new_collider(cpdag: &Cpdag, x: VarId, y: VarId) -> bool {
    cpdag.parents(x).any(|w| !cpdag.is_adjacent(w, y))
}

/// Rule 2: a directed path `x → z → y`.
fn avoid_cycle(cpdag: &Cpdag, x: VarId, y: VarId) -> bool {
    cpdag.children(x).any(|z| cpdag.has_arc(z, y))
}

/// Rule 3: two non-adjacent undirected neighbours of `x` both point into `y`.
fn two_mediators(cpdag: &Cpdag, x: VarId, y: VarId) -> bool {
    let mediators: Vec<VarId> = cpdag
        .undirected_neighbors(x)
        .filter(|&z| z != y && cpdag.has_arc(z, y))
        .collect();
    mediators.iter().enumerate().any(|(i, &z1)| {
        mediators[i + 1..]
            .iter()
            .any(|&z2| !cpdag.is_adjacent(z1, z2))
    })
}

/// First rule (in rule order) that orients `x — y` as `x → y`.
pub fn applicable_rule(cpdag: &Cpdag, x: VarId, y: VarId) -> Option<MeekRule> {
    if avoid_new_collider(cpdag, x, y) {
        Some(MeekRule::AvoidNewCollider)
    } else if avoid_cycle(cpdag, x, y) {
        Some(MeekRule::AvoidCycle)
    } else if two_mediators(cpdag, x, y) {
        Some(MeekRule::TwoMediators)
    } else {
        None
    }
}

/// Apply rules 1–3 until a full pass over the undirected edges changes
/// nothing. Existing arcs are treated as fixed; only undirected edges gain a
/// direction. Each pass either orients at least one edge or ends the loop,
/// so there are at most `undirected edges + 1` passes.
pub fn propagate(cpdag: &mut Cpdag) -> PcResult<OrientationStats> {
    let mut stats = OrientationStats::default();
    propagate_into(cpdag, &mut stats)?;
    Ok(stats)
}

pub(crate) fn propagate_into(cpdag: &mut Cpdag, stats: &mut OrientationStats) -> PcResult<()> {
    loop {
        stats.passes += 1;
        let mut changed = false;
        let pending: Vec<VarPair> = cpdag.undirected_edges().collect();

        for pair in pending {
            for (x, y) in [(pair.low(), pair.high()), (pair.high(), pair.low())] {
                if !cpdag.is_undirected(x, y) {
                    break;
                }
                let Some(rule) = applicable_rule(cpdag, x, y) else {
                    continue;
                };
                let outcome = cpdag.orient(x, y)?;
                debug_assert_eq!(outcome, OrientOutcome::Oriented);
                debug!(x, y, ?rule, "propagated");
                match rule {
                    MeekRule::AvoidNewCollider => stats.rule1 += 1,
                    MeekRule::AvoidCycle => stats.rule2 += 1,
                    MeekRule::TwoMediators => stats.rule3 += 1,
                }
                changed = true;
            }
        }

        if !changed {
            return Ok(());
        }
    }
}
