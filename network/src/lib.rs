//!
//! Data model for a dataflow module network: modules with ordered port
//! slots, directed connections between ports, and the owning [`Network`]
//! container that editors mutate and the scheduler reads.
//!
//! This crate knows nothing about execution order; it only maintains the
//! graph and its local invariants (live ids, port ranges, fan-in of one
//! per input port). Ordering analysis lives in the `schedule` crate.

mod strings;
pub use strings::NetworkStrings;

mod module;
pub use module::{Module, Ports};

mod connection;
pub use connection::Connection;

mod id;
pub use id::{ConnectionId, ModuleId, NameId};

mod network;
pub use network::Network;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No module {0} in this network")]
    ModuleNotFound(ModuleId),
    #[error("No connection {0} in this network")]
    ConnectionNotFound(ConnectionId),
    #[error("Module \"{module}\" has no {direction} port at index {port}")]
    PortOutOfRange {
        module: String,
        direction: &'static str,
        port: usize,
    },
    #[error("Input port {port} of module \"{module}\" already has an incoming connection")]
    InputPortOccupied { module: String, port: usize },
}
