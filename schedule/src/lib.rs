//!
//! The structs in this mod turn a module [`network::Network`] into an ordered
//! list of module ids that an execution engine can run front to back.
//!
//! A scheduling pass runs in 3 steps:
//! 1. Build a dense dependency graph from the network's live modules and
//!    connections (parallel connections between the same module pair collapse
//!    to one edge).
//! 2. Check the graph for cycles with a three-color depth-first walk.
//! 3. Emit a topological order with Kahn's algorithm, breaking ties toward
//!    the smallest module id, then filter it through an [`ExecutionPolicy`].
//!
//! Every step reads the network snapshot and nothing else; no state survives
//! between passes, so the scheduler can be re-run after every edit.

/// dense dependency graph built per pass
mod graph;
pub use graph::DepGraph;

/// cycle check and topological sort
mod analyzer;
pub use analyzer::NetworkAnalyzer;

/// which modules take part in a pass
mod policy;
pub use policy::{ExecuteAffected, ExecuteAll, ExecutionPolicy};

/// single entry point over the other mods
mod scheduler;
pub use scheduler::SerialScheduler;

/// struct returned by this mod
mod order;
pub use order::ExecutionOrder;

use network::ModuleId;

/// Index into the dense vertex space of one scheduling pass.
/// Only meaningful for the lifetime of the [`DepGraph`] that produced it.
pub type Vertex = usize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Modules form a dependency cycle, including \"{name}\" ({module})")]
    Cycle { module: ModuleId, name: String },
    #[error("Connection references module {module}, which is not in the network")]
    DanglingConnection { module: ModuleId },
}
