use colored::Colorize;

use util::IdVec;

use crate::{Connection, ConnectionId, Error, Module, ModuleId, NetworkStrings, Ports};

/// Contains all the modules and connections of one dataflow network.
///
/// The network is the single source of truth for scheduling: a scheduling
/// pass borrows it immutably and reads modules and connections through the
/// accessors below. Removed modules and connections leave dead slots behind
/// so that ids stay stable across edits.
#[derive(Debug)]
pub struct Network {
    pub strings: NetworkStrings,
    modules: IdVec<ModuleId, Module>,
    connections: IdVec<ConnectionId, Connection>,
}

impl Default for Network {
    fn default() -> Self {
        Self {
            strings: NetworkStrings::default(),
            modules: IdVec::with_capacity(16),
            connections: IdVec::with_capacity(32),
        }
    }
}

// reading the network /////////////
impl Network {
    /// Get the live module with the given id.
    pub fn module(&self, id: ModuleId) -> Result<&Module, Error> {
        match self.modules.try_get(id) {
            Some(module) if module.exists => Ok(module),
            _ => Err(Error::ModuleNotFound(id)),
        }
    }

    /// Get the display name of the module with the given id.
    /// Dead slots still have a name, which is useful in error messages.
    pub fn module_name(&self, id: ModuleId) -> &str {
        match self.modules.try_get(id) {
            Some(module) => self.strings.get(module.name),
            None => "<unknown>",
        }
    }

    /// Iterate through live modules in ascending id order.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &Module)> {
        self.modules.iter_ids().filter(|(_, m)| m.exists)
    }

    /// Iterate through live connections in ascending id order.
    pub fn connections(&self) -> impl Iterator<Item = (ConnectionId, &Connection)> {
        self.connections.iter_ids().filter(|(_, c)| c.exists)
    }

    /// Number of live modules.
    pub fn num_modules(&self) -> usize {
        self.modules().count()
    }

    /// Number of live connections.
    pub fn num_connections(&self) -> usize {
        self.connections().count()
    }
}

// editing the network /////////////
impl Network {
    /// Add a module with the given display name and port names.
    /// Returns an id that stays valid until the module is removed.
    pub fn add_module(&mut self, name: &str, inputs: &[&str], outputs: &[&str]) -> ModuleId {
        let name_id = self.strings.intern(name);
        let mut ports = Ports::with_capacity(inputs.len().max(outputs.len()));
        for port in inputs {
            ports.inputs.push(self.strings.intern(port));
        }
        for port in outputs {
            ports.outputs.push(self.strings.intern(port));
        }

        let id = self.modules.push(Module::create(name_id, ports));
        log::debug!("added module {} {}", self.strings.get(name_id).cyan(), id);
        id
    }

    /// Remove the module with the given id.
    ///
    /// Connections touching the module are left in place; editors are
    /// expected to call [`Self::disconnect_module`] first. Stale connections
    /// that remain are a consistency bug, and scheduling fails fast on them
    /// rather than silently dropping the edges.
    pub fn remove_module(&mut self, id: ModuleId) -> Result<(), Error> {
        self.module(id)?;
        self.modules.get_mut(id).exists = false;
        log::debug!("removed module {} {}", self.module_name(id).cyan(), id);
        Ok(())
    }

    /// Connect an output port of `src` to an input port of `dst`.
    ///
    /// Port indices must be in range, and the destination input port must not
    /// already have an incoming connection (fan-in is 1 at the port level;
    /// fan-out from an output port is unrestricted). Port data types are
    /// assumed to have been checked by the editor before this is called.
    pub fn connect(
        &mut self,
        src: ModuleId,
        src_port: usize,
        dst: ModuleId,
        dst_port: usize,
    ) -> Result<ConnectionId, Error> {
        let src_module = self.module(src)?;
        if src_port >= src_module.ports.outputs.len() {
            return Err(Error::PortOutOfRange {
                module: self.module_name(src).to_owned(),
                direction: "output",
                port: src_port,
            });
        }
        let dst_module = self.module(dst)?;
        if dst_port >= dst_module.ports.inputs.len() {
            return Err(Error::PortOutOfRange {
                module: self.module_name(dst).to_owned(),
                direction: "input",
                port: dst_port,
            });
        }
        if self.connections().any(|(_, c)| c.dst == dst && c.dst_port == dst_port) {
            return Err(Error::InputPortOccupied {
                module: self.module_name(dst).to_owned(),
                port: dst_port,
            });
        }

        let id = self.connections.push(Connection {
            src,
            src_port,
            dst,
            dst_port,
            exists: true,
        });
        log::debug!(
            "connected {}[{src_port}] -> {}[{dst_port}]",
            self.module_name(src).cyan(),
            self.module_name(dst).cyan(),
        );
        Ok(id)
    }

    /// Remove the connection with the given id.
    pub fn disconnect(&mut self, id: ConnectionId) -> Result<(), Error> {
        match self.connections.try_get(id) {
            Some(conn) if conn.exists => {
                self.connections.get_mut(id).exists = false;
                Ok(())
            }
            _ => Err(Error::ConnectionNotFound(id)),
        }
    }

    /// Remove every live connection touching the module with the given id.
    /// Returns the number of connections removed.
    pub fn disconnect_module(&mut self, id: ModuleId) -> usize {
        let ids: Vec<ConnectionId> = self
            .connections()
            .filter(|(_, c)| c.src == id || c.dst == id)
            .map(|(cid, _)| cid)
            .collect();
        for cid in &ids {
            self.connections.get_mut(*cid).exists = false;
        }
        log::debug!(
            "disconnected {} connections from module {}",
            ids.len(),
            self.module_name(id).cyan(),
        );
        ids.len()
    }

    /// Set the needs-execution flag of the module with the given id.
    /// Called by the surrounding system when a module's inputs or parameters
    /// change, and cleared by the execution engine after a successful run.
    pub fn set_needs_execute(&mut self, id: ModuleId, needs_execute: bool) -> Result<(), Error> {
        self.module(id)?;
        self.modules.get_mut(id).needs_execute = needs_execute;
        Ok(())
    }
}
