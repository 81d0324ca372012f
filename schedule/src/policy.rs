use crate::{DepGraph, Vertex};

/// Decides, per module, whether it takes part in the current scheduling pass.
///
/// The scheduler consults the policy once per vertex, in topological order,
/// strictly as a filter over the full order: an excluded module keeps its
/// vertex and edges, so modules downstream of it still see their transitive
/// dependencies. Policies may read the graph's structure and flags but must
/// not mutate anything.
pub trait ExecutionPolicy {
    /// True if the module at `vertex` should be emitted in the final order.
    fn is_included(&self, graph: &DepGraph, vertex: Vertex) -> bool;
}

/// Include every module in the snapshot. The default policy, matching
/// "run the whole network".
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecuteAll;

impl ExecutionPolicy for ExecuteAll {
    fn is_included(&self, _graph: &DepGraph, _vertex: Vertex) -> bool {
        true
    }
}

/// Include only modules whose output would change: those flagged as needing
/// execution, plus everything downstream of one.
///
/// The closure runs downstream only. Ancestors of a flagged module are not
/// re-run; their cached outputs are still valid and the engine feeds them to
/// the modules that do run. A module with a clean flag but a dirty upstream
/// dependency is included, since its inputs are stale.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecuteAffected;

impl ExecutionPolicy for ExecuteAffected {
    fn is_included(&self, graph: &DepGraph, vertex: Vertex) -> bool {
        graph.is_dirty(vertex) || graph.has_dirty_ancestor(vertex)
    }
}
