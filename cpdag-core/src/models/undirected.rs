//! Symmetric adjacency over `0..D`, mutated only by edge removal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::pair::{VarId, VarPair};

/// Undirected graph with ordered per-node neighbour sets.
///
/// Symmetry holds by construction: the only mutation is [`remove_edge`],
/// which updates both endpoints.
///
/// [`remove_edge`]: UndirectedGraph::remove_edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedGraph {
    adjacency: Vec<BTreeSet<VarId>>,
}

impl UndirectedGraph {
    /// Complete graph on `num_variables` nodes.
    pub fn complete(num_variables: usize) -> Self {
        let adjacency = (0..num_variables)
            .map(|v| (0..num_variables).filter(|&u| u != v).collect())
            .collect();
        Self { adjacency }
    }

    /// Graph with the given nodes and edges. Pairs out of range are ignored.
    pub fn from_edges(num_variables: usize, edges: impl IntoIterator<Item = VarPair>) -> Self {
        let mut adjacency = vec![BTreeSet::new(); num_variables];
        for pair in edges {
            if pair.high() < num_variables {
                adjacency[pair.low()].insert(pair.high());
                adjacency[pair.high()].insert(pair.low());
            }
        }
        Self { adjacency }
    }

    pub fn num_variables(&self) -> usize {
        self.adjacency.len()
    }

    pub fn has_edge(&self, a: VarId, b: VarId) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(&b))
    }

    /// Neighbours of `v` in ascending order. Empty for unknown nodes.
    pub fn neighbors(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.adjacency.get(v).into_iter().flatten().copied()
    }

    pub fn degree(&self, v: VarId) -> usize {
        self.adjacency.get(v).map_or(0, BTreeSet::len)
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Remove `a — b`. Returns whether the edge existed.
    pub fn remove_edge(&mut self, a: VarId, b: VarId) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.adjacency[a].remove(&b);
        self.adjacency[b].remove(&a);
        true
    }

    /// All edges in ascending `(low, high)` order.
    pub fn edges(&self) -> impl Iterator<Item = VarPair> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(v, neighbors)| {
            neighbors
                .range(v + 1..)
                .map(move |&u| VarPair::new(v, u))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Every unordered pair of distinct variables, ascending.
    pub fn all_pairs(&self) -> impl Iterator<Item = VarPair> {
        let n = self.num_variables();
        (0..n).flat_map(move |a| (a + 1..n).map(move |b| VarPair::new(a, b)))
    }

    /// First asymmetric pair found, if any. Always `None` for graphs built
    /// through this API; deserialised graphs are not trusted.
    pub fn find_asymmetry(&self) -> Option<(VarId, VarId)> {
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            for &u in neighbors {
                if u == v || !self.has_edge(u, v) {
                    return Some((v, u));
                }
            }
        }
        None
    }
}
