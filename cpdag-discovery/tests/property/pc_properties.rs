//! Property tests for cpdag-discovery: skeleton symmetry, separation-set
//! completeness, monotonic sparsification, collider preservation,
//! acyclicity, and idempotent propagation.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use cpdag_core::config::{ConflictPolicy, PcConfig, SkeletonConfig, SkeletonVariant};
use cpdag_core::{Cpdag, SampleMatrix, Skeleton, VarId, VarPair};
use cpdag_discovery::graph::dag_enforcement;
use cpdag_discovery::orientation::{colliders, meek, OrientationStats};
use cpdag_discovery::{DSeparationOracle, PcEngine, PcOutput, SkeletonEstimator};

const N: usize = 7;

/// Forward arcs only (`from < to`), so every generated graph is acyclic.
fn dag_strategy(n: usize) -> impl Strategy<Value = Vec<(VarId, VarId)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2).prop_map(|raw| {
        let arcs: BTreeSet<(VarId, VarId)> = raw
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect();
        arcs.into_iter().collect()
    })
}

/// A p-value per unordered pair, independent of the conditioning set.
fn pair_table_strategy(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0_f64..=1.0, n * (n - 1) / 2)
}

fn pair_index(n: usize, x: VarId, y: VarId) -> usize {
    let pair = VarPair::new(x, y);
    let (a, b) = (pair.low(), pair.high());
    a * (2 * n - a - 1) / 2 + (b - a - 1)
}

fn run(dag: &[(VarId, VarId)], config: PcConfig) -> PcOutput {
    let oracle = DSeparationOracle::new(N, dag).unwrap();
    PcEngine::new(config)
        .unwrap()
        .run(&SampleMatrix::<f64>::empty(N), &oracle)
        .unwrap()
}

fn dag_skeleton(dag: &[(VarId, VarId)]) -> Vec<VarPair> {
    let pairs: BTreeSet<VarPair> = dag.iter().map(|&(a, b)| VarPair::new(a, b)).collect();
    pairs.into_iter().collect()
}

fn dag_v_structures(dag: &[(VarId, VarId)]) -> BTreeSet<(VarId, VarId, VarId)> {
    let truth = Cpdag::from_parts(N, dag.iter().copied(), std::iter::empty()).unwrap();
    dag_enforcement::unshielded_colliders(&truth)
}

fn collider_only(skeleton: &Skeleton) -> Cpdag {
    let mut cpdag = Cpdag::from_skeleton(skeleton.graph());
    let mut stats = OrientationStats::default();
    colliders::orient_colliders(skeleton, &mut cpdag, ConflictPolicy::KeepFirst, &mut stats)
        .unwrap();
    cpdag
}

// =============================================================================
// Skeleton structure
// =============================================================================
proptest! {
    #[test]
    fn skeleton_is_symmetric_and_separation_sets_complete(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        let graph = output.skeleton.graph();
        prop_assert!(graph.find_asymmetry().is_none());
        for a in 0..N {
            for b in 0..N {
                prop_assert_eq!(graph.has_edge(a, b), graph.has_edge(b, a));
            }
        }
        prop_assert!(output.skeleton.validate().is_ok());
        for pair in graph.all_pairs() {
            let (a, b) = (pair.low(), pair.high());
            prop_assert_eq!(
                graph.has_edge(a, b),
                !output.skeleton.separation_sets().contains_pair(a, b),
                "pair {} has both or neither",
                pair
            );
        }
    }

    #[test]
    fn faithful_oracle_recovers_true_adjacencies(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        let found: Vec<VarPair> = output.skeleton.graph().edges().collect();
        prop_assert_eq!(found, dag_skeleton(&dag));
    }

    #[test]
    fn separation_sets_exclude_their_own_pair(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        for (pair, set) in output.skeleton.separation_sets().iter() {
            prop_assert!(!set.contains(&pair.low()));
            prop_assert!(!set.contains(&pair.high()));
        }
    }
}

// =============================================================================
// Monotonic sparsification in the significance level
// =============================================================================
proptest! {
    #[test]
    fn stricter_threshold_never_adds_edges(
        table in pair_table_strategy(N),
        a1 in 0.001_f64..0.999,
        a2 in 0.001_f64..0.999,
    ) {
        let (low, high) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
        let oracle = |_: &SampleMatrix, x: VarId, y: VarId, _: &[VarId]| table[pair_index(N, x, y)];
        let data = SampleMatrix::<f64>::empty(N);

        let strict = SkeletonEstimator::new(SkeletonConfig::with_significance(low))
            .estimate(&data, &oracle)
            .unwrap();
        let loose = SkeletonEstimator::new(SkeletonConfig::with_significance(high))
            .estimate(&data, &oracle)
            .unwrap();

        let strict_edges: BTreeSet<VarPair> = strict.skeleton.graph().edges().collect();
        let loose_edges: BTreeSet<VarPair> = loose.skeleton.graph().edges().collect();
        prop_assert!(
            strict_edges.is_subset(&loose_edges),
            "alpha {} kept {:?}, alpha {} kept {:?}",
            low, strict_edges, high, loose_edges
        );
    }
}

// =============================================================================
// Orientation
// =============================================================================
proptest! {
    #[test]
    fn directed_part_is_acyclic(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        prop_assert!(!dag_enforcement::has_directed_cycle(&output.cpdag));
        prop_assert_eq!(output.orientation_stats.conflicts, 0);
    }

    #[test]
    fn propagation_adds_no_colliders(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        let after_step_a = dag_enforcement::unshielded_colliders(&collider_only(&output.skeleton));
        let final_colliders = dag_enforcement::unshielded_colliders(&output.cpdag);
        prop_assert_eq!(&final_colliders, &after_step_a);
        prop_assert_eq!(final_colliders, dag_v_structures(&dag));
    }

    #[test]
    fn compelled_arcs_agree_with_generating_dag(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        let truth: BTreeSet<(VarId, VarId)> = dag.iter().copied().collect();
        for arc in output.cpdag.arcs() {
            prop_assert!(truth.contains(&arc), "arc {:?} not in generating DAG", arc);
        }
    }

    #[test]
    fn orientation_is_idempotent(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        let mut again = output.cpdag.clone();
        let stats = meek::propagate(&mut again).unwrap();
        prop_assert_eq!(stats.propagated(), 0);
        prop_assert_eq!(again, output.cpdag);
    }

    #[test]
    fn orientation_preserves_skeleton(dag in dag_strategy(N)) {
        let output = run(&dag, PcConfig::default());
        prop_assert_eq!(&output.cpdag.skeleton(), output.skeleton.graph());
    }

    #[test]
    fn idempotent_even_for_unfaithful_oracles(table in pair_table_strategy(N)) {
        let oracle = |_: &SampleMatrix, x: VarId, y: VarId, _: &[VarId]| table[pair_index(N, x, y)];
        let Ok(output) = PcEngine::with_significance(0.5)
            .unwrap()
            .run(&SampleMatrix::<f64>::empty(N), &oracle)
        else {
            // Contradictory colliders can close a directed cycle.
            return Ok(());
        };
        let mut again = output.cpdag.clone();
        let stats = meek::propagate(&mut again).unwrap();
        prop_assert_eq!(stats.propagated(), 0);
        prop_assert_eq!(again, output.cpdag);
    }
}

// =============================================================================
// Variants
// =============================================================================
proptest! {
    #[test]
    fn stable_variant_agrees_under_faithful_oracle(dag in dag_strategy(N)) {
        let classical = run(&dag, PcConfig::default());
        let mut config = PcConfig::default();
        config.skeleton.variant = SkeletonVariant::Stable;
        let stable = run(&dag, config);
        prop_assert_eq!(stable.skeleton.graph(), classical.skeleton.graph());
        prop_assert_eq!(stable.cpdag, classical.cpdag);
    }

    #[test]
    fn parallel_subsets_match_sequential(table in pair_table_strategy(N), dag in dag_strategy(N)) {
        let oracle = DSeparationOracle::new(N, &dag).unwrap();
        // Mix in a table so the first qualifying subset is not always unique.
        let noisy = |_: &SampleMatrix, x: VarId, y: VarId, s: &[VarId]| {
            let base = if oracle.d_separated(x, y, s) { 1.0 } else { 0.0 };
            if s.len() == 1 { table[pair_index(N, x, y)].max(base) } else { base }
        };
        let data = SampleMatrix::<f64>::empty(N);

        let sequential = PcEngine::with_significance(0.3).unwrap().run(&data, &noisy);
        let mut config = PcConfig::default();
        config.skeleton.significance_level = Some(0.3);
        config.skeleton.parallel_subsets = Some(true);
        let parallel = PcEngine::new(config).unwrap().run(&data, &noisy);

        match (sequential, parallel) {
            (Ok(s), Ok(p)) => {
                prop_assert_eq!(p.skeleton, s.skeleton);
                prop_assert_eq!(p.cpdag, s.cpdag);
            }
            (Err(s), Err(p)) => prop_assert_eq!(s.to_string(), p.to_string()),
            (s, p) => prop_assert!(false, "diverged: {:?} vs {:?}", s.is_ok(), p.is_ok()),
        }
    }
}

#[test]
fn pair_index_is_dense() {
    let mut seen = BTreeMap::new();
    for a in 0..N {
        for b in (a + 1)..N {
            let idx = pair_index(N, a, b);
            assert_eq!(pair_index(N, b, a), idx);
            assert!(seen.insert(idx, (a, b)).is_none());
        }
    }
    assert_eq!(seen.len(), N * (N - 1) / 2);
    assert_eq!(seen.keys().copied().max(), Some(N * (N - 1) / 2 - 1));
}
