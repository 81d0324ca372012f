use std::cmp::Reverse;
use std::collections::BinaryHeap;

use colored::Colorize;

use network::{ModuleId, Network};

use crate::{DepGraph, Error, Vertex};

/// Vertex marks for the depth-first cycle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// not yet reached
    New,
    /// on the current walk; reaching an Open vertex again means a cycle
    Open,
    /// fully explored, known cycle-free
    Done,
}

/// Builds the dependency graph for a network snapshot, verifies it is a DAG,
/// and computes the full topological order of its vertices.
///
/// The order always covers every vertex; restricting it to the modules an
/// [`crate::ExecutionPolicy`] includes is a post-pass in the scheduler, so
/// that excluded modules still take part in dependency reasoning.
#[derive(Debug)]
pub struct NetworkAnalyzer {
    graph: DepGraph,
    order: Vec<Vertex>,
}

impl NetworkAnalyzer {
    /// Analyze the given network snapshot.
    /// Fails on dangling connections and dependency cycles; otherwise the
    /// analyzer holds a complete topological order of the snapshot.
    pub fn analyze(net: &Network) -> Result<Self, Error> {
        let graph = DepGraph::build(net)?;
        check_acyclic(&graph, net)?;
        let order = topological_order(&graph);
        debug_assert_eq!(order.len(), graph.len());

        if log::log_enabled!(log::Level::Trace) {
            for &v in &order {
                log::trace!("order: {}", net.module_name(graph.module_at(v)).cyan());
            }
        }

        Ok(Self { graph, order })
    }

    /// The graph this analyzer ran over.
    #[inline]
    pub fn graph(&self) -> &DepGraph {
        &self.graph
    }

    /// Full topological order of the snapshot's vertices.
    /// For every edge (u -> v), u appears before v.
    #[inline]
    pub fn order(&self) -> &[Vertex] {
        &self.order
    }

    /// Map a vertex from the order back to its module id.
    #[inline]
    pub fn module_at(&self, vertex: Vertex) -> ModuleId {
        self.graph.module_at(vertex)
    }
}

/// Verify the graph has no cycles, using an iterative three-color
/// depth-first walk. A self-loop is a cycle like any other.
///
/// This runs before the sort because it can name a module that is
/// actually *on* a cycle; the sort's leftover set would also contain
/// modules that are merely downstream of one.
fn check_acyclic(graph: &DepGraph, net: &Network) -> Result<(), Error> {
    let mut marks = vec![Mark::New; graph.len()];
    // (vertex, index of next successor to visit)
    let mut walk: Vec<(Vertex, usize)> = Vec::with_capacity(graph.len().min(64));

    for root in 0..graph.len() {
        if marks[root] != Mark::New {
            continue;
        }
        marks[root] = Mark::Open;
        walk.push((root, 0));

        while let Some(frame) = walk.last_mut() {
            let v = frame.0;
            if let Some(&succ) = graph.successors(v).get(frame.1) {
                frame.1 += 1;
                match marks[succ] {
                    Mark::New => {
                        marks[succ] = Mark::Open;
                        walk.push((succ, 0));
                    }
                    // back edge; succ is on the walk, so it's on a cycle:
                    Mark::Open => {
                        let module = graph.module_at(succ);
                        return Err(Error::Cycle {
                            module,
                            name: net.module_name(module).to_owned(),
                        });
                    }
                    Mark::Done => {}
                }
            } else {
                marks[v] = Mark::Done;
                walk.pop();
            }
        }
    }
    Ok(())
}

/// Kahn's algorithm over an acyclic graph.
/// The ready set is a min-heap on vertex index, so whenever several vertices
/// have in-degree zero at once, the one standing for the smallest module id
/// is emitted first. Two passes over an unchanged snapshot therefore
/// produce identical orders.
fn topological_order(graph: &DepGraph) -> Vec<Vertex> {
    let mut in_degree: Vec<usize> = (0..graph.len()).map(|v| graph.predecessors(v).len()).collect();

    let mut ready: BinaryHeap<Reverse<Vertex>> = BinaryHeap::with_capacity(graph.len());
    for (v, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            ready.push(Reverse(v));
        }
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(Reverse(v)) = ready.pop() {
        order.push(v);
        for &succ in graph.successors(v) {
            in_degree[succ] -= 1;
            if in_degree[succ] == 0 {
                ready.push(Reverse(succ));
            }
        }
    }
    order
}

#[cfg(test)]
mod test {
    use super::*;

    fn relay(net: &mut Network, name: &str) -> ModuleId {
        net.add_module(name, &["in"], &["out"])
    }

    fn order_of(net: &Network) -> Result<Vec<ModuleId>, Error> {
        let analyzer = NetworkAnalyzer::analyze(net)?;
        Ok(analyzer
            .order()
            .iter()
            .map(|&v| analyzer.module_at(v))
            .collect())
    }

    #[test]
    fn test_chain_orders_upstream_first() -> Result<(), Error> {
        let mut net = Network::default();
        let c = relay(&mut net, "C");
        let b = relay(&mut net, "B");
        let a = relay(&mut net, "A");
        // connect c <- b <- a, in reverse creation order:
        net.connect(a, 0, b, 0).unwrap();
        net.connect(b, 0, c, 0).unwrap();

        assert_eq!(order_of(&net)?, vec![a, b, c]);
        Ok(())
    }

    #[test]
    fn test_tie_break_is_ascending_module_id() -> Result<(), Error> {
        let mut net = Network::default();
        // no connections at all; order must be creation order:
        let ids: Vec<ModuleId> = (0..5)
            .map(|i| relay(&mut net, &format!("M{i}")))
            .collect();
        assert_eq!(order_of(&net)?, ids);
        Ok(())
    }

    #[test]
    fn test_diamond() -> Result<(), Error> {
        let mut net = Network::default();
        let head = net.add_module("Head", &[], &["out"]);
        let left = relay(&mut net, "Left");
        let right = relay(&mut net, "Right");
        let tail = net.add_module("Tail", &["a", "b"], &[]);
        net.connect(head, 0, left, 0).unwrap();
        net.connect(head, 0, right, 0).unwrap();
        net.connect(left, 0, tail, 0).unwrap();
        net.connect(right, 0, tail, 1).unwrap();

        // left ties with right and wins on module id:
        assert_eq!(order_of(&net)?, vec![head, left, right, tail]);
        Ok(())
    }

    #[test]
    fn test_cycle_is_detected() {
        let mut net = Network::default();
        let a = relay(&mut net, "A");
        let b = relay(&mut net, "B");
        let c = relay(&mut net, "C");
        net.connect(a, 0, b, 0).unwrap();
        net.connect(b, 0, c, 0).unwrap();
        net.connect(c, 0, a, 0).unwrap();

        match NetworkAnalyzer::analyze(&net) {
            Err(Error::Cycle { module, .. }) => {
                assert!([a, b, c].contains(&module));
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_self_loop_is_a_cycle() {
        let mut net = Network::default();
        let a = relay(&mut net, "Feedback");
        net.connect(a, 0, a, 0).unwrap();

        match NetworkAnalyzer::analyze(&net) {
            Err(Error::Cycle { module, name }) => {
                assert_eq!(module, a);
                assert_eq!(name, "Feedback");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }

    #[test]
    fn test_cycle_error_names_module_on_the_cycle() {
        let mut net = Network::default();
        // a cycle b <-> c with a downstream straggler d:
        let b = relay(&mut net, "B");
        let c = relay(&mut net, "C");
        let d = relay(&mut net, "D");
        net.connect(b, 0, c, 0).unwrap();
        net.connect(c, 0, b, 0).unwrap();
        net.connect(c, 0, d, 0).unwrap();

        // d is downstream of the cycle but not on it; the error
        // must name one of the two cycle members:
        match NetworkAnalyzer::analyze(&net) {
            Err(Error::Cycle { module, .. }) => {
                assert!([b, c].contains(&module), "{module} is not on the cycle");
            }
            other => panic!("expected cycle error, got {other:?}"),
        }
    }
}
