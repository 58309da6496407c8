//! Perfect oracle: answers from d-separation in a known DAG.

use std::collections::{BTreeSet, VecDeque};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use cpdag_core::errors::{ConsistencyError, InputError, OracleError, PcResult};
use cpdag_core::{IndependenceTest, SampleMatrix, VarId};

use crate::graph::dag_enforcement::format_cycle;

/// Returns `1.0` when `x` and `y` are d-separated given the conditioning set
/// in the generating DAG, `0.0` otherwise. Sample values are ignored, so any
/// α in `(0, 1)` yields the same skeleton.
#[derive(Debug, Clone)]
pub struct DSeparationOracle {
    dag: DiGraph<VarId, ()>,
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Travel {
    /// Arrived from a child, moving against arc direction.
    Up,
    /// Arrived from a parent, moving along arc direction.
    Down,
}

impl DSeparationOracle {
    /// Build from a DAG over `0..num_variables`. Rejects cycles and
    /// out-of-range endpoints.
    pub fn new(num_variables: usize, arcs: &[(VarId, VarId)]) -> PcResult<Self> {
        let mut dag = DiGraph::with_capacity(num_variables, arcs.len());
        for v in 0..num_variables {
            dag.add_node(v);
        }
        for &(from, to) in arcs {
            let var = from.max(to);
            if var >= num_variables {
                return Err(InputError::VariableOutOfRange { var, num_variables }.into());
            }
            dag.update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        }
        if is_cyclic_directed(&dag) {
            let cycle: Vec<VarId> = petgraph::algo::tarjan_scc(&dag)
                .into_iter()
                .find(|scc| scc.len() > 1)
                .map(|scc| scc.into_iter().map(NodeIndex::index).collect())
                .unwrap_or_else(|| arcs.iter().filter(|(a, b)| a == b).map(|(a, _)| *a).collect());
            return Err(ConsistencyError::DirectedCycle {
                path: format_cycle(&cycle),
            }
            .into());
        }
        Ok(Self { dag })
    }

    pub fn num_variables(&self) -> usize {
        self.dag.node_count()
    }

    /// The generating arcs, ascending.
    pub fn arcs(&self) -> Vec<(VarId, VarId)> {
        let mut arcs: Vec<(VarId, VarId)> = self
            .dag
            .edge_indices()
            .filter_map(|e| self.dag.edge_endpoints(e))
            .map(|(a, b)| (a.index(), b.index()))
            .collect();
        arcs.sort_unstable();
        arcs
    }

    fn neighbors(&self, v: VarId, direction: Direction) -> impl Iterator<Item = VarId> + '_ {
        self.dag
            .neighbors_directed(NodeIndex::new(v), direction)
            .map(|n| n.index())
    }

    /// `conditioning` plus all of its ancestors.
    fn ancestral_closure(&self, conditioning: &BTreeSet<VarId>) -> BTreeSet<VarId> {
        let mut closure = conditioning.clone();
        let mut stack: Vec<VarId> = conditioning.iter().copied().collect();
        while let Some(v) = stack.pop() {
            for parent in self.neighbors(v, Direction::Incoming) {
                if closure.insert(parent) {
                    stack.push(parent);
                }
            }
        }
        closure
    }

    /// Reachability ("Bayes ball"): is there an active trail from `x` to `y`
    /// given `conditioning`?
    pub fn d_separated(&self, x: VarId, y: VarId, conditioning: &[VarId]) -> bool {
        let observed: BTreeSet<VarId> = conditioning.iter().copied().collect();
        let ancestors = self.ancestral_closure(&observed);

        let mut visited: BTreeSet<(VarId, Travel)> = BTreeSet::new();
        let mut queue: VecDeque<(VarId, Travel)> = VecDeque::from([(x, Travel::Up)]);

        while let Some((v, travel)) = queue.pop_front() {
            if !visited.insert((v, travel)) {
                continue;
            }
            let blocked = observed.contains(&v);
            if v == y && !blocked {
                return false;
            }
            match travel {
                Travel::Up if !blocked => {
                    let parents = self.neighbors(v, Direction::Incoming);
                    queue.extend(parents.map(|p| (p, Travel::Up)));
                    let children = self.neighbors(v, Direction::Outgoing);
                    queue.extend(children.map(|c| (c, Travel::Down)));
                }
                Travel::Up => {}
                Travel::Down => {
                    if !blocked {
                        let children = self.neighbors(v, Direction::Outgoing);
                        queue.extend(children.map(|c| (c, Travel::Down)));
                    }
                    // Collider opened by an observed descendant.
                    if ancestors.contains(&v) {
                        let parents = self.neighbors(v, Direction::Incoming);
                        queue.extend(parents.map(|p| (p, Travel::Up)));
                    }
                }
            }
        }
        true
    }
}

impl<T> IndependenceTest<T> for DSeparationOracle {
    fn p_value(
        &self,
        _data: &SampleMatrix<T>,
        x: VarId,
        y: VarId,
        conditioning: &[VarId],
    ) -> Result<f64, OracleError> {
        let n = self.num_variables();
        if let Some(&var) = [x, y].iter().chain(conditioning).find(|&&v| v >= n) {
            return Err(OracleError::EvaluationFailed {
                x,
                y,
                reason: format!("variable {var} is not in the {n}-variable model"),
            });
        }
        Ok(if self.d_separated(x, y, conditioning) {
            1.0
        } else {
            0.0
        })
    }
}
