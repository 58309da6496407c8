//! Partially directed result graph.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::pair::{VarId, VarPair};
use super::undirected::UndirectedGraph;
use crate::errors::ConsistencyError;

/// State of one variable pair in a [`Cpdag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairEdge {
    Absent,
    Undirected,
    Directed { from: VarId, to: VarId },
}

/// Outcome of [`Cpdag::orient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientOutcome {
    /// The edge was undirected and is now `from → to`.
    Oriented,
    /// The edge already pointed `from → to`.
    Unchanged,
    /// The edge already points `to → from`; nothing was changed.
    Opposed,
}

/// Directed arcs plus undirected edges. Each adjacent pair is in exactly one
/// of the two sets, and no pair is ever directed both ways.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CpdagRepr", into = "CpdagRepr")]
pub struct Cpdag {
    parents: Vec<BTreeSet<VarId>>,
    children: Vec<BTreeSet<VarId>>,
    undirected: Vec<BTreeSet<VarId>>,
}

impl Cpdag {
    /// No edges at all.
    pub fn empty(num_variables: usize) -> Self {
        Self {
            parents: vec![BTreeSet::new(); num_variables],
            children: vec![BTreeSet::new(); num_variables],
            undirected: vec![BTreeSet::new(); num_variables],
        }
    }

    /// Every skeleton edge, undirected.
    pub fn from_skeleton(graph: &UndirectedGraph) -> Self {
        let mut cpdag = Self::empty(graph.num_variables());
        for pair in graph.edges() {
            cpdag.undirected[pair.low()].insert(pair.high());
            cpdag.undirected[pair.high()].insert(pair.low());
        }
        cpdag
    }

    /// Build from explicit arcs and undirected edges. Each pair may appear
    /// once across both lists.
    pub fn from_parts(
        num_variables: usize,
        arcs: impl IntoIterator<Item = (VarId, VarId)>,
        undirected: impl IntoIterator<Item = VarPair>,
    ) -> Result<Self, ConsistencyError> {
        let check_bound = |v: VarId| {
            if v >= num_variables {
                Err(ConsistencyError::VariableCountMismatch {
                    expected: num_variables,
                    found: v + 1,
                })
            } else {
                Ok(())
            }
        };

        let mut graph = Self::empty(num_variables);
        for pair in undirected {
            check_bound(pair.high())?;
            if graph.is_adjacent(pair.low(), pair.high()) {
                return Err(ConsistencyError::DuplicatePair { pair });
            }
            graph.undirected[pair.low()].insert(pair.high());
            graph.undirected[pair.high()].insert(pair.low());
        }
        for (from, to) in arcs {
            check_bound(from.max(to))?;
            if from == to {
                return Err(ConsistencyError::SelfLoop { var: from });
            }
            let pair = VarPair::new(from, to);
            if graph.is_adjacent(from, to) {
                return Err(ConsistencyError::DuplicatePair { pair });
            }
            graph.children[from].insert(to);
            graph.parents[to].insert(from);
        }
        Ok(graph)
    }

    pub fn num_variables(&self) -> usize {
        self.undirected.len()
    }

    /// Query one pair; `Directed` reports the actual direction.
    pub fn edge(&self, a: VarId, b: VarId) -> PairEdge {
        if a >= self.num_variables() || b >= self.num_variables() {
            return PairEdge::Absent;
        }
        if self.undirected[a].contains(&b) {
            PairEdge::Undirected
        } else if self.children[a].contains(&b) {
            PairEdge::Directed { from: a, to: b }
        } else if self.children[b].contains(&a) {
            PairEdge::Directed { from: b, to: a }
        } else {
            PairEdge::Absent
        }
    }

    pub fn has_arc(&self, from: VarId, to: VarId) -> bool {
        self.children.get(from).is_some_and(|c| c.contains(&to))
    }

    pub fn is_undirected(&self, a: VarId, b: VarId) -> bool {
        self.undirected.get(a).is_some_and(|u| u.contains(&b))
    }

    pub fn is_adjacent(&self, a: VarId, b: VarId) -> bool {
        self.edge(a, b) != PairEdge::Absent
    }

    pub fn parents(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.parents.get(v).into_iter().flatten().copied()
    }

    pub fn children(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.children.get(v).into_iter().flatten().copied()
    }

    pub fn undirected_neighbors(&self, v: VarId) -> impl Iterator<Item = VarId> + '_ {
        self.undirected.get(v).into_iter().flatten().copied()
    }

    /// Orient `from — to` as `from → to`.
    ///
    /// Never removes an edge and never reverses an arc. Fails only when the
    /// pair is not adjacent at all.
    pub fn orient(&mut self, from: VarId, to: VarId) -> Result<OrientOutcome, ConsistencyError> {
        match self.edge(from, to) {
            PairEdge::Absent => Err(ConsistencyError::EdgeAbsent {
                pair: VarPair::new(from, to),
            }),
            PairEdge::Undirected => {
                self.undirected[from].remove(&to);
                self.undirected[to].remove(&from);
                self.children[from].insert(to);
                self.parents[to].insert(from);
                Ok(OrientOutcome::Oriented)
            }
            PairEdge::Directed { from: f, .. } if f == from => Ok(OrientOutcome::Unchanged),
            PairEdge::Directed { .. } => Ok(OrientOutcome::Opposed),
        }
    }

    /// Directed arcs in ascending `(from, to)` order.
    pub fn arcs(&self) -> impl Iterator<Item = (VarId, VarId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .flat_map(|(from, c)| c.iter().map(move |&to| (from, to)))
    }

    /// Undirected edges in ascending order.
    pub fn undirected_edges(&self) -> impl Iterator<Item = VarPair> + '_ {
        self.undirected
            .iter()
            .enumerate()
            .flat_map(|(v, u)| u.range(v + 1..).map(move |&w| VarPair::new(v, w)))
    }

    pub fn arc_count(&self) -> usize {
        self.children.iter().map(BTreeSet::len).sum()
    }

    pub fn undirected_count(&self) -> usize {
        self.undirected.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Arc-list rendering: each arc once, each undirected edge as both
    /// opposite arcs ("undetermined"), sorted.
    pub fn to_arc_list(&self) -> Vec<(VarId, VarId)> {
        let mut list: Vec<(VarId, VarId)> = self.arcs().collect();
        for pair in self.undirected_edges() {
            list.push((pair.low(), pair.high()));
            list.push((pair.high(), pair.low()));
        }
        list.sort_unstable();
        list
    }

    /// Adjacency ignoring direction.
    pub fn skeleton(&self) -> UndirectedGraph {
        let pairs = self
            .arcs()
            .map(|(from, to)| VarPair::new(from, to))
            .chain(self.undirected_edges())
            .collect::<Vec<_>>();
        UndirectedGraph::from_edges(self.num_variables(), pairs)
    }
}

/// Serialised form: arcs and undirected edges as plain lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CpdagRepr {
    num_variables: usize,
    arcs: Vec<(VarId, VarId)>,
    undirected: Vec<VarPair>,
}

impl TryFrom<CpdagRepr> for Cpdag {
    type Error = ConsistencyError;

    fn try_from(repr: CpdagRepr) -> Result<Self, Self::Error> {
        Cpdag::from_parts(repr.num_variables, repr.arcs, repr.undirected)
    }
}

impl From<Cpdag> for CpdagRepr {
    fn from(graph: Cpdag) -> Self {
        Self {
            num_variables: graph.num_variables(),
            arcs: graph.arcs().collect(),
            undirected: graph.undirected_edges().collect(),
        }
    }
}
