use crate::NameId;

/// Utility representing a module's input and output port slots.
/// Slot order is significant: connections refer to ports by index.
#[derive(Debug, Default, Clone)]
pub struct Ports<T> {
    pub inputs: Vec<T>,
    pub outputs: Vec<T>,
}

impl<T> Ports<T> {
    /// Create a new `Ports` where both collections have the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inputs: Vec::with_capacity(cap),
            outputs: Vec::with_capacity(cap),
        }
    }
}

/// A single processing node in the network.
#[derive(Debug, Default, Clone)]
pub struct Module {
    /// Interned display name of this module.
    pub name: NameId,
    /// Input and output port slots (interned port names).
    pub ports: Ports<NameId>,
    /// Set by the surrounding system when inputs or parameters change.
    /// The scheduler only reads this flag.
    pub needs_execute: bool,
    /// So we can tell if this slot holds a live module, or one that was removed:
    pub exists: bool,
}

impl Module {
    /// Create a new live module.
    /// A freshly added module has never run, so it starts out needing execution.
    pub fn create(name: NameId, ports: Ports<NameId>) -> Self {
        Self {
            name,
            ports,
            needs_execute: true,
            exists: true,
        }
    }
}
