//! Cycle and collider checks over the arcs of a CPDAG, via petgraph.
//! Undirected edges are ignored.

use std::collections::BTreeSet;

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};

use cpdag_core::{Cpdag, VarId};

/// Directed part of `cpdag` as a petgraph graph; node `i` is variable `i`.
pub fn directed_part(cpdag: &Cpdag) -> DiGraph<VarId, ()> {
    let mut graph = DiGraph::with_capacity(cpdag.num_variables(), cpdag.arc_count());
    for v in 0..cpdag.num_variables() {
        graph.add_node(v);
    }
    for (from, to) in cpdag.arcs() {
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    graph
}

pub fn has_directed_cycle(cpdag: &Cpdag) -> bool {
    is_cyclic_directed(&directed_part(cpdag))
}

/// Strongly connected components with more than one node, each sorted.
pub fn find_directed_cycles(cpdag: &Cpdag) -> Vec<Vec<VarId>> {
    let graph = directed_part(cpdag);
    tarjan_scc(&graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut vars: Vec<VarId> = scc.into_iter().map(NodeIndex::index).collect();
            vars.sort_unstable();
            vars
        })
        .collect()
}

/// Every unshielded collider `x → z ← y` as `(x, z, y)` with `x < y`.
pub fn unshielded_colliders(cpdag: &Cpdag) -> BTreeSet<(VarId, VarId, VarId)> {
    let mut found = BTreeSet::new();
    for z in 0..cpdag.num_variables() {
        let parents: Vec<VarId> = cpdag.parents(z).collect();
        for (i, &x) in parents.iter().enumerate() {
            for &y in &parents[i + 1..] {
                if !cpdag.is_adjacent(x, y) {
                    found.insert((x, z, y));
                }
            }
        }
    }
    found
}

/// Render a component as `a -> b -> … -> a` for error messages.
pub fn format_cycle(cycle: &[VarId]) -> String {
    let mut parts: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.to_string());
    }
    parts.join(" -> ")
}
