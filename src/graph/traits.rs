//! Trait definitions for graph abstractions.
//!
//! The algorithm layer in [`algorithms`](crate::graph::algorithms) is written against these
//! traits rather than against [`Graph`](crate::graph::Graph), so the same code runs over a full
//! graph, over a bare [`NodeStore`](crate::graph::NodeStore) working copy, or over a caller's own
//! adjacency structure.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count, id bound and node iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges)
//! - [`Predecessors`] - Backward edge traversal (incoming edges)
//! - [`WeightedSuccessors`] - Outgoing edges together with their weight and identity
//!
//! All adjacency queries return iterators rather than collections. Iteration order is the
//! insertion order of the underlying containers, which keeps every algorithm deterministic.

use crate::graph::{NodeId, Weight};

/// Base trait providing core graph properties.
///
/// Node ids may be sparse: a store that had nodes removed keeps the gaps, which is why
/// algorithms size their scratch vectors with [`node_bound`](GraphBase::node_bound) rather than
/// [`node_count`](GraphBase::node_count).
pub trait GraphBase {
    /// Returns the number of live nodes.
    fn node_count(&self) -> usize;

    /// Returns an exclusive upper bound on the index of every live [`NodeId`].
    fn node_bound(&self) -> usize;

    /// Returns an iterator over all live node identifiers in insertion order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` refers to a live node.
    fn contains_node(&self, node: NodeId) -> bool;
}

/// Trait for graphs that support forward edge traversal.
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{NodeStore, Successors};
///
/// let mut store = NodeStore::new();
/// let a = store.add_node("a");
/// let b = store.add_node("b");
/// store.link(a, b);
///
/// assert_eq!(store.successors(a).collect::<Vec<_>>(), vec![b]);
/// ```
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `v` is a successor of `u`. Each successor is reported
    /// once, no matter how many parallel edges lead to it.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a live node of the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support backward edge traversal.
pub trait Predecessors: GraphBase {
    /// Returns an iterator over the predecessor nodes of the given node.
    ///
    /// For a directed edge `(u, v)`, node `u` is a predecessor of `v`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a live node of the graph.
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// One outgoing edge as seen by the shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEdge<R> {
    /// Target node of the edge.
    pub target: NodeId,
    /// Caller-facing reference to the edge, reported back in reconstructed paths.
    pub edge: R,
    /// Weight of the edge.
    pub weight: Weight,
}

/// Trait for graphs whose edges carry weights.
///
/// Unlike [`Successors`], parallel edges are reported individually: a multigraph yields one
/// [`WeightedEdge`] per edge handle, in handle insertion order. Shortest-path relaxation uses a
/// strict comparison, so among equally cheap parallel edges the first one reported wins.
pub trait WeightedSuccessors: Successors {
    /// The reference type identifying an edge in results.
    ///
    /// Simple graphs use the `(source, target)` pair of node values, multigraphs use
    /// [`EdgeId`](crate::graph::EdgeId).
    type Edge<'a>: Clone
    where
        Self: 'a;

    /// Returns every edge leaving `node`, with its target and weight.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a live node of the graph.
    fn weighted_edges(&self, node: NodeId) -> impl Iterator<Item = WeightedEdge<Self::Edge<'_>>>;
}
