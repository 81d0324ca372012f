use network::ModuleId;

/// An ordered, duplicate-free list of module ids: the result of one
/// scheduling pass. Every module appears after all of its upstream
/// dependencies that were included in the same pass.
///
/// This is a plain value; it holds no reference into the network it was
/// computed from, and it goes stale as soon as the network is edited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExecutionOrder {
    modules: Vec<ModuleId>,
}

impl ExecutionOrder {
    /// Wrap an already-ordered list of module ids.
    pub fn new(modules: Vec<ModuleId>) -> Self {
        Self { modules }
    }

    /// Iterate through module ids in execution order.
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.modules.iter().copied()
    }

    /// The order as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[ModuleId] {
        &self.modules
    }

    /// Number of modules to execute.
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True if the pass selected nothing to run.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl std::fmt::Display for ExecutionOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for id in &self.modules {
            write!(f, "{sep}{id}")?;
            sep = " -> ";
        }
        Ok(())
    }
}
