//! Scheduling core for a visual dataflow platform.
//!
//! Editors build a [`Network`] of modules and typed port connections; this
//! crate decides which modules must run and in what order. It performs no
//! execution itself: the [`ExecutionOrder`] it returns is handed to an
//! external engine, which owns all execution and concurrency concerns.

pub use network::{Connection, ConnectionId, Module, ModuleId, Network, Ports};
pub use network::Error as NetworkError;
pub use schedule::{
    DepGraph, Error, ExecuteAffected, ExecuteAll, ExecutionOrder, ExecutionPolicy,
    NetworkAnalyzer, SerialScheduler,
};

/// Compute a full execution order for `net`, running every module.
pub fn schedule(net: &Network) -> Result<ExecutionOrder, Error> {
    SerialScheduler.schedule(net)
}

/// Compute an execution order for `net` restricted to the modules
/// selected by `policy`.
pub fn schedule_with(
    net: &Network,
    policy: &dyn ExecutionPolicy,
) -> Result<ExecutionOrder, Error> {
    SerialScheduler.schedule_with(net, policy)
}
