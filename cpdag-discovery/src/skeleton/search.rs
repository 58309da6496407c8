//! Separating-set search for one ordered pair at one level.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use cpdag_core::errors::OracleError;
use cpdag_core::{IndependenceTest, SampleMatrix, VarId};

use super::subsets::{binomial, Combinations};

/// One pair's search request.
pub(crate) struct PairQuery<'a> {
    pub x: VarId,
    pub y: VarId,
    /// Conditioning candidates, ascending.
    pub candidates: &'a [VarId],
    pub level: usize,
    pub alpha: f64,
}

/// Result of a search: the separating set (if any) and oracle calls made.
pub(crate) struct SearchOutcome {
    pub separating_set: Option<Vec<VarId>>,
    pub tests: usize,
}

fn evaluate<T, O>(
    oracle: &O,
    data: &SampleMatrix<T>,
    x: VarId,
    y: VarId,
    subset: &[VarId],
) -> Result<f64, OracleError>
where
    O: IndependenceTest<T> + ?Sized,
{
    let raw = oracle.p_value(data, x, y, subset)?;
    OracleError::check(x, y, subset, raw)
}

/// Test subsets in lexicographic order and stop at the first one whose
/// p-value exceeds `alpha`.
pub(crate) fn sequential<T, O>(
    oracle: &O,
    data: &SampleMatrix<T>,
    query: &PairQuery<'_>,
) -> Result<SearchOutcome, OracleError>
where
    O: IndependenceTest<T> + ?Sized,
{
    let mut tests = 0;
    for subset in Combinations::new(query.candidates, query.level) {
        tests += 1;
        let p = evaluate(oracle, data, query.x, query.y, &subset)?;
        if p > query.alpha {
            return Ok(SearchOutcome {
                separating_set: Some(subset),
                tests,
            });
        }
    }
    Ok(SearchOutcome {
        separating_set: None,
        tests,
    })
}

/// Same decision as [`sequential`], with subsets evaluated on the rayon pool.
///
/// The winner is the earliest subset in enumeration order that is either an
/// independence or an oracle error, so the recorded separating set (and any
/// surfaced error) matches the sequential search exactly. Only the number of
/// oracle calls may differ. A single candidate subset is tested inline.
pub(crate) fn parallel<T, O>(
    oracle: &O,
    data: &SampleMatrix<T>,
    query: &PairQuery<'_>,
) -> Result<SearchOutcome, OracleError>
where
    T: Sync,
    O: IndependenceTest<T> + ?Sized,
{
    if binomial(query.candidates.len(), query.level) <= 1 {
        return sequential(oracle, data, query);
    }
    let subsets: Vec<Vec<VarId>> = Combinations::new(query.candidates, query.level).collect();
    let calls = AtomicUsize::new(0);

    let first = subsets
        .par_iter()
        .map(|subset| {
            calls.fetch_add(1, Ordering::Relaxed);
            evaluate(oracle, data, query.x, query.y, subset)
        })
        .enumerate()
        .find_first(|(_, result)| match result {
            Ok(p) => *p > query.alpha,
            Err(_) => true,
        });

    let tests = calls.load(Ordering::Relaxed);
    match first {
        None => Ok(SearchOutcome {
            separating_set: None,
            tests,
        }),
        Some((_, Err(e))) => Err(e),
        Some((index, Ok(_))) => Ok(SearchOutcome {
            separating_set: subsets.into_iter().nth(index),
            tests,
        }),
    }
}
