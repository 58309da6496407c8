use criterion::{criterion_group, criterion_main, Criterion};

use cpdag_core::config::{PcConfig, SkeletonVariant};
use cpdag_core::{SampleMatrix, VarId};
use cpdag_discovery::{estimate_cpdag, DSeparationOracle, PcEngine, SkeletonEstimator};

/// Sparse DAG: 30 variables, each pointing at up to 2 forward neighbours.
fn sparse_dag(n: usize) -> Vec<(VarId, VarId)> {
    let mut arcs = Vec::new();
    for i in 0..n {
        for step in [1, 3] {
            let target = i + step;
            if target < n && (i + target) % 3 != 0 {
                arcs.push((i, target));
            }
        }
    }
    assert!(arcs.len() >= n, "expected a connected sparse DAG, got {} arcs", arcs.len());
    arcs
}

fn bench_skeleton(c: &mut Criterion) {
    let n = 30;
    let oracle = DSeparationOracle::new(n, &sparse_dag(n)).unwrap();
    let data = SampleMatrix::<f64>::empty(n);
    let estimator = SkeletonEstimator::default();

    c.bench_function("skeleton_30_vars_sparse", |b| {
        b.iter(|| estimator.estimate(&data, &oracle).unwrap());
    });
}

fn bench_skeleton_parallel(c: &mut Criterion) {
    let n = 30;
    let oracle = DSeparationOracle::new(n, &sparse_dag(n)).unwrap();
    let data = SampleMatrix::<f64>::empty(n);
    let mut config = PcConfig::default();
    config.skeleton.parallel_subsets = Some(true);
    config.skeleton.variant = SkeletonVariant::Stable;
    let engine = PcEngine::new(config).unwrap();

    c.bench_function("pc_stable_parallel_30_vars_sparse", |b| {
        b.iter(|| engine.run(&data, &oracle).unwrap());
    });
}

fn bench_orientation(c: &mut Criterion) {
    let n = 30;
    let oracle = DSeparationOracle::new(n, &sparse_dag(n)).unwrap();
    let data = SampleMatrix::<f64>::empty(n);
    let skeleton = SkeletonEstimator::default()
        .estimate(&data, &oracle)
        .unwrap()
        .skeleton;

    c.bench_function("orientation_30_vars_sparse", |b| {
        b.iter(|| estimate_cpdag(&skeleton).unwrap());
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let n = 30;
    let oracle = DSeparationOracle::new(n, &sparse_dag(n)).unwrap();
    let data = SampleMatrix::<f64>::empty(n);
    let engine = PcEngine::default();

    c.bench_function("pc_full_30_vars_sparse", |b| {
        b.iter(|| engine.run(&data, &oracle).unwrap());
    });
}

criterion_group!(
    benches,
    bench_skeleton,
    bench_skeleton_parallel,
    bench_orientation,
    bench_full_pipeline
);
criterion_main!(benches);
