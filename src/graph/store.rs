//! Node/Edge Store: the adjacency relation shared by every graph variant.
//!
//! [`NodeStore`] owns the node values and, for each node, its ordered successor and predecessor
//! lists. It knows nothing about edge payloads, weights or parallel edges; those live in the edge
//! layers, which reference nodes by the [`NodeId`] the store hands out.
//!
//! # Layout
//!
//! Nodes live in a slot vector in insertion order. Removing a node leaves an empty slot behind
//! rather than shifting later nodes, so ids stay stable and iteration keeps insertion order. A
//! hash index maps node values back to their slot. Adjacency lists are plain vectors: neighbor
//! order is the order in which the first edge to that neighbor was added.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::{
    error::node_not_found,
    graph::{GraphBase, GraphNode, NodeId, Predecessors, Successors},
    Result,
};

#[derive(Debug, Clone)]
struct NodeSlot<N> {
    node: N,
    outgoing: Vec<NodeId>,
    incoming: Vec<NodeId>,
}

/// A node removed from a [`NodeStore`], together with the neighbors it was linked to.
///
/// Edge layers use the neighbor lists to drop the records of every edge that touched the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detached<N> {
    /// The id the node occupied.
    pub id: NodeId,
    /// The removed node value.
    pub node: N,
    /// Targets of the node's outgoing links, in order.
    pub successors: Vec<NodeId>,
    /// Sources of the node's incoming links, in order.
    pub predecessors: Vec<NodeId>,
}

/// Insertion-ordered node set with directed adjacency.
///
/// Links are deduplicated: linking the same ordered pair twice has no effect. Self-links are
/// accepted; it is up to the edge layer to forbid them.
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::NodeStore;
///
/// let mut store = NodeStore::new();
/// let a = store.add_node('a');
/// let b = store.add_node('b');
/// assert_eq!(store.add_node('a'), a);
///
/// store.link(a, b);
/// assert!(store.has_link(a, b));
///
/// let detached = store.remove_node(b).unwrap();
/// assert_eq!(detached.predecessors, vec![a]);
/// assert!(!store.has_link(a, b));
/// ```
#[derive(Debug, Clone)]
pub struct NodeStore<N> {
    slots: Vec<Option<NodeSlot<N>>>,
    index: FxHashMap<N, NodeId>,
}

impl<N: GraphNode> NodeStore<N> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        NodeStore {
            slots: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty store with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(nodes);
        NodeStore {
            slots: Vec::with_capacity(nodes),
            index,
        }
    }

    /// Adds a node, returning its id.
    ///
    /// Adding a node that is already present is a no-op that returns the existing id.
    pub fn add_node(&mut self, node: N) -> NodeId {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }

        let id = NodeId(self.slots.len());
        self.index.insert(node.clone(), id);
        self.slots.push(Some(NodeSlot {
            node,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        id
    }

    /// Returns the id of `node`, if present.
    #[must_use]
    pub fn id_of(&self, node: &N) -> Option<NodeId> {
        self.index.get(node).copied()
    }

    /// Returns the id of `node`, failing with [`Error::NodeNotFound`](crate::Error::NodeNotFound)
    /// if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) when `node` is not in the store.
    pub fn require(&self, node: &N) -> Result<NodeId> {
        self.id_of(node).ok_or_else(|| node_not_found!(node))
    }

    /// Returns `true` if `node` is in the store.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the node value stored under `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.slot(id).map(|slot| &slot.node)
    }

    /// Iterates over all node values in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.slots.iter().flatten().map(|slot| &slot.node)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Successor ids of `id` in link order; empty for unknown ids.
    #[must_use]
    pub fn outgoing(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map_or(&[], |slot| slot.outgoing.as_slice())
    }

    /// Predecessor ids of `id` in link order; empty for unknown ids.
    #[must_use]
    pub fn incoming(&self, id: NodeId) -> &[NodeId] {
        self.slot(id).map_or(&[], |slot| slot.incoming.as_slice())
    }

    /// Returns `true` if `from` links to `to`.
    #[must_use]
    pub fn has_link(&self, from: NodeId, to: NodeId) -> bool {
        self.outgoing(from).contains(&to)
    }

    /// Links `from` to `to`.
    ///
    /// Returns `false` without changing anything if the link already exists or either id is not
    /// live.
    pub fn link(&mut self, from: NodeId, to: NodeId) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) || self.has_link(from, to) {
            return false;
        }

        if let Some(Some(slot)) = self.slots.get_mut(from.0) {
            slot.outgoing.push(to);
        }
        if let Some(Some(slot)) = self.slots.get_mut(to.0) {
            slot.incoming.push(from);
        }
        true
    }

    /// Removes the link from `from` to `to`, returning whether it existed.
    pub fn unlink(&mut self, from: NodeId, to: NodeId) -> bool {
        if !self.has_link(from, to) {
            return false;
        }

        if let Some(Some(slot)) = self.slots.get_mut(from.0) {
            slot.outgoing.retain(|&n| n != to);
        }
        if let Some(Some(slot)) = self.slots.get_mut(to.0) {
            slot.incoming.retain(|&n| n != from);
        }
        true
    }

    /// Removes a node and every link touching it.
    ///
    /// Returns `None` if `id` is not live.
    pub fn remove_node(&mut self, id: NodeId) -> Option<Detached<N>> {
        let slot = self.slots.get_mut(id.0)?.take()?;
        self.index.remove(&slot.node);

        for &succ in &slot.outgoing {
            if let Some(Some(other)) = self.slots.get_mut(succ.0) {
                other.incoming.retain(|&n| n != id);
            }
        }
        for &pred in &slot.incoming {
            if let Some(Some(other)) = self.slots.get_mut(pred.0) {
                other.outgoing.retain(|&n| n != id);
            }
        }

        trace!(
            node = ?slot.node,
            successors = slot.outgoing.len(),
            predecessors = slot.incoming.len(),
            "removed node"
        );

        Some(Detached {
            id,
            node: slot.node,
            successors: slot.outgoing,
            predecessors: slot.incoming,
        })
    }

    /// Drops every node and link and resets id numbering.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
    }

    /// Builds a new store holding only `members` and the links among them.
    ///
    /// Members are inserted in the given order; duplicates and dead ids are skipped. The second
    /// element of the result maps every old id (by index) to its id in the new store.
    #[must_use]
    pub fn induced(&self, members: &[NodeId]) -> (NodeStore<N>, Vec<Option<NodeId>>) {
        let mut store = NodeStore::with_capacity(members.len());
        let mut remap = vec![None; self.slots.len()];

        for &old in members {
            if let Some(node) = self.node(old) {
                if remap[old.0].is_none() {
                    remap[old.0] = Some(store.add_node(node.clone()));
                }
            }
        }

        for &old in members {
            let Some(from) = remap.get(old.0).copied().flatten() else {
                continue;
            };
            for &succ in self.outgoing(old) {
                if let Some(to) = remap[succ.0] {
                    store.link(from, to);
                }
            }
        }

        (store, remap)
    }

    fn slot(&self, id: NodeId) -> Option<&NodeSlot<N>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }
}

impl<N: GraphNode> Default for NodeStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GraphNode> GraphBase for NodeStore<N> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn node_bound(&self) -> usize {
        self.slots.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| NodeId(index))
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.slot(node).is_some()
    }
}

impl<N: GraphNode> Successors for NodeStore<N> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.outgoing(node).iter().copied()
    }
}

impl<N: GraphNode> Predecessors for NodeStore<N> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.incoming(node).iter().copied()
    }
}
