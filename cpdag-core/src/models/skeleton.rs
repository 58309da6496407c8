//! Frozen hand-off from skeleton estimation to orientation.

use serde::{Deserialize, Serialize};

use super::separation::SeparationSets;
use super::undirected::UndirectedGraph;
use crate::errors::ConsistencyError;

/// Estimated adjacency plus the separation sets of every removed pair.
/// Read-only once built; orientation works on its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    graph: UndirectedGraph,
    separation_sets: SeparationSets,
}

impl Skeleton {
    pub fn new(graph: UndirectedGraph, separation_sets: SeparationSets) -> Self {
        Self {
            graph,
            separation_sets,
        }
    }

    pub fn graph(&self) -> &UndirectedGraph {
        &self.graph
    }

    pub fn separation_sets(&self) -> &SeparationSets {
        &self.separation_sets
    }

    pub fn num_variables(&self) -> usize {
        self.graph.num_variables()
    }

    pub fn into_parts(self) -> (UndirectedGraph, SeparationSets) {
        (self.graph, self.separation_sets)
    }

    /// Check symmetry and separation-set completeness: every absent pair
    /// has exactly one entry, every adjacent pair has none, and entries only
    /// reference known variables.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        if let Some((a, b)) = self.graph.find_asymmetry() {
            return Err(ConsistencyError::AsymmetricAdjacency { a, b });
        }
        let n = self.graph.num_variables();
        for (pair, set) in self.separation_sets.iter() {
            if pair.high() >= n {
                return Err(ConsistencyError::VariableCountMismatch {
                    expected: n,
                    found: pair.high() + 1,
                });
            }
            if let Some(&max) = set.iter().next_back() {
                if max >= n {
                    return Err(ConsistencyError::VariableCountMismatch {
                        expected: n,
                        found: max + 1,
                    });
                }
            }
        }
        for pair in self.graph.all_pairs() {
            let adjacent = self.graph.has_edge(pair.low(), pair.high());
            let recorded = self.separation_sets.contains_pair(pair.low(), pair.high());
            match (adjacent, recorded) {
                (true, true) => return Err(ConsistencyError::UnexpectedSeparationSet { pair }),
                (false, false) => return Err(ConsistencyError::MissingSeparationSet { pair }),
                _ => {}
            }
        }
        Ok(())
    }
}
