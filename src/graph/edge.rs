//! Edge handles for multigraphs.
//!
//! Parallel edges cannot be told apart by their endpoints, so every edge stored in a
//! [`MultiEdges`](crate::graph::MultiEdges) layer is addressed by an [`EdgeId`]. A handle pairs
//! the arena slot with an owner token identifying the arena that issued it, which lets lookups
//! reject handles coming from another graph or from before a [`clear`](crate::graph::Graph::clear).

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Draws a fresh owner token for an edge arena.
pub(crate) fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, Ordering::Relaxed)
}

/// A unique handle identifying one edge instance in a multigraph.
///
/// Handles are only ever produced by [`add_edge`](crate::graph::Graph) on a multigraph and are
/// never reused by the issuing graph, not even after the edge has been removed. Cloning a graph
/// or taking a subgraph keeps the handles of every copied edge valid in the copy; edges added to
/// either side afterwards get handles the other side does not accept.
///
/// # Examples
///
/// ```rust
/// use graphcore::DirectedMultiGraph;
///
/// let mut graph: DirectedMultiGraph<char, &str> = DirectedMultiGraph::new();
/// graph.add_nodes(['a', 'b']);
/// let first = graph.add_edge(&'a', &'b', "first")?;
/// let second = graph.add_edge(&'a', &'b', "second")?;
///
/// assert_ne!(first, second);
/// assert_eq!(graph.edge_data(second)?, &"second");
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    owner: u64,
    slot: usize,
}

impl EdgeId {
    pub(crate) const fn new(owner: u64, slot: usize) -> Self {
        EdgeId { owner, slot }
    }

    pub(crate) const fn owner(self) -> u64 {
        self.owner
    }

    /// Returns the arena slot of this edge within the graph that issued it.
    ///
    /// Slots are assigned sequentially, so comparing slots of two handles from the same graph
    /// tells which edge was inserted first.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.slot
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}#{})", self.slot, self.owner)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.slot)
    }
}
