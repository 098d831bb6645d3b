//! Node identity types.
//!
//! Two notions of "node" coexist in this crate. Callers key every public operation by their own
//! node values, which only need to satisfy [`GraphNode`]. Internally, the
//! [`NodeStore`](crate::graph::NodeStore) assigns each value a [`NodeId`], the index of the slot
//! holding it, and the algorithm layer works exclusively on those ids so that scratch state can
//! live in flat vectors instead of hash maps.

use std::{fmt, hash::Hash};

/// Bound required of caller-supplied node values.
///
/// The engine never inspects a node beyond equality and hashing. `Debug` is only used to render
/// error messages. The equality/hash contract must stay stable for as long as the value lives in
/// a graph.
///
/// This trait is implemented for every type meeting the bounds.
pub trait GraphNode: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> GraphNode for T {}

/// A strongly-typed identifier for a node slot within a [`NodeStore`](crate::graph::NodeStore).
///
/// Ids are handed out sequentially in insertion order. A slot is never reused while the store
/// lives, so removing a node leaves the ids of all other nodes untouched; only
/// [`clear`](crate::graph::NodeStore::clear) resets the numbering.
///
/// `NodeId` values are meaningful only for the store (or graph) that produced them.
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::NodeId;
///
/// let node = NodeId::new(3);
/// assert_eq!(node.index(), 3);
/// assert_eq!(node.to_string(), "n3");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw slot index.
    ///
    /// Intended for tests and for callers implementing the graph traits on their own types.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw slot index, suitable for indexing per-node scratch vectors.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
