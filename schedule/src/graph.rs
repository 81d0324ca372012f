use colored::Colorize;

use network::{ModuleId, Network};
use util::{HashMap, Hasher};

use crate::{Error, Vertex};

/// Dense per-pass view of the network's dependency structure.
///
/// Vertices are indices `0..len` over the live modules of the snapshot, in
/// ascending module-id order. One edge per connected module pair: multiple
/// connections between the same two modules collapse, since multiplicity is
/// irrelevant to ordering. The graph also snapshots each module's
/// needs-execution flag at build time, so policies can read it without
/// touching the network again.
#[derive(Debug)]
pub struct DepGraph {
    /// vertex -> module id
    modules: Vec<ModuleId>,
    /// vertex -> distinct downstream vertices
    successors: Vec<Vec<Vertex>>,
    /// vertex -> distinct upstream vertices
    predecessors: Vec<Vec<Vertex>>,
    /// vertex -> needs-execution flag at snapshot time
    dirty: Vec<bool>,
}

impl DepGraph {
    /// Build the dependency graph for the given network snapshot.
    /// Fails fast on connections whose endpoints are not live modules;
    /// silently dropping such an edge could emit an order that violates
    /// the dependency it was meant to express.
    pub fn build(net: &Network) -> Result<Self, Error> {
        let num_modules = net.num_modules();
        let mut modules = Vec::with_capacity(num_modules);
        let mut dirty = Vec::with_capacity(num_modules);
        let mut vertex_of: HashMap<ModuleId, Vertex> =
            HashMap::with_capacity_and_hasher(num_modules, Hasher::default());

        // modules() iterates in ascending id order, so vertex order
        // is the deterministic tie-break order used by the sort:
        for (id, module) in net.modules() {
            vertex_of.insert(id, modules.len());
            modules.push(id);
            dirty.push(module.needs_execute);
        }

        let mut successors = vec![Vec::new(); modules.len()];
        let mut predecessors: Vec<Vec<Vertex>> = vec![Vec::new(); modules.len()];
        for (_, conn) in net.connections() {
            let src = *vertex_of
                .get(&conn.src)
                .ok_or(Error::DanglingConnection { module: conn.src })?;
            let dst = *vertex_of
                .get(&conn.dst)
                .ok_or(Error::DanglingConnection { module: conn.dst })?;
            if !successors[src].contains(&dst) {
                successors[src].push(dst);
                predecessors[dst].push(src);
            }
        }

        log::debug!(
            "built dependency graph with {} vertices, {} edges",
            modules.len(),
            successors.iter().map(Vec::len).sum::<usize>(),
        );

        Ok(Self {
            modules,
            successors,
            predecessors,
            dirty,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True if the snapshot had no live modules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Map a vertex back to the id of the module it stands for.
    #[inline]
    pub fn module_at(&self, vertex: Vertex) -> ModuleId {
        self.modules[vertex]
    }

    /// Vertices directly downstream of `vertex`.
    #[inline]
    pub fn successors(&self, vertex: Vertex) -> &[Vertex] {
        &self.successors[vertex]
    }

    /// Vertices directly upstream of `vertex`.
    #[inline]
    pub fn predecessors(&self, vertex: Vertex) -> &[Vertex] {
        &self.predecessors[vertex]
    }

    /// Needs-execution flag of the module at `vertex`, as of snapshot time.
    #[inline]
    pub fn is_dirty(&self, vertex: Vertex) -> bool {
        self.dirty[vertex]
    }

    /// True if any module upstream of `vertex` (at any distance) was
    /// flagged as needing execution when the snapshot was taken.
    pub fn has_dirty_ancestor(&self, vertex: Vertex) -> bool {
        let mut seen = vec![false; self.len()];
        let mut stack: Vec<Vertex> = self.predecessors[vertex].to_vec();
        while let Some(v) = stack.pop() {
            if seen[v] {
                continue;
            }
            seen[v] = true;
            if self.dirty[v] {
                log::trace!(
                    "module {} has dirty ancestor {}",
                    self.modules[vertex],
                    self.modules[v].to_string().cyan(),
                );
                return true;
            }
            stack.extend_from_slice(&self.predecessors[v]);
        }
        false
    }
}
