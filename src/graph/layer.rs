//! The seam between the node store and the pluggable edge layers.

use crate::graph::NodeId;

/// Storage for edge records (payloads, weights, handles) layered over a
/// [`NodeStore`](crate::graph::NodeStore).
///
/// The store owns adjacency; the layer owns everything attached to an edge. The graph keeps the
/// two in sync: a link exists in the store exactly when the layer holds at least one record for
/// that ordered pair.
pub trait EdgeLayer: Default {
    /// Number of directed edge records held.
    fn edge_count(&self) -> usize;

    /// Drops every record touching a node that was just removed from the store.
    ///
    /// `successors` and `predecessors` are the node's adjacency at the time of removal.
    fn detach(&mut self, node: NodeId, successors: &[NodeId], predecessors: &[NodeId]);

    /// Drops every record.
    ///
    /// Layers that issue handles must invalidate all previously issued ones.
    fn clear(&mut self);

    /// Returns a copy holding only the records whose endpoints both survive in `remap`,
    /// re-keyed to the new node ids.
    ///
    /// `remap` is indexed by old node index, as produced by
    /// [`NodeStore::induced`](crate::graph::NodeStore::induced).
    fn induced(&self, remap: &[Option<NodeId>]) -> Self
    where
        Self: Clone;
}

/// Looks up the new id of `node` in a remap table.
pub(crate) fn remapped(remap: &[Option<NodeId>], node: NodeId) -> Option<NodeId> {
    remap.get(node.index()).copied().flatten()
}
