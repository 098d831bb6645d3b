//! Multi-Edge Layer: parallel edges and self-edges, each addressed by an [`EdgeId`].
//!
//! Edge records live in an arena that is the single source of truth for
//! `(source, target, payload, weight)`. A pair index lists the handles of every edge between two
//! nodes in insertion order. Removed records leave a hole so that handles are never reused.

use rustc_hash::FxHashMap;

use crate::{
    error::edge_not_found,
    graph::{
        edge::next_owner, layer::remapped, Directed, Direction, EdgeId, EdgeLayer, Graph,
        GraphNode, NodeId, Weight, WeightedEdge, WeightedSuccessors,
    },
    Result,
};

/// One edge record in a [`MultiEdges`] arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEdge<E, W> {
    /// Source node.
    pub source: NodeId,
    /// Target node.
    pub target: NodeId,
    /// Caller payload.
    pub data: E,
    /// Edge weight, `()` for unweighted graphs.
    pub weight: W,
}

/// Handle-keyed edge arena.
///
/// Every slot remembers the handle it was issued under. Cloning draws a fresh owner token for
/// the copy, so copied edges keep answering to their old handles while edges added afterwards
/// on either side get handles the other side rejects.
#[derive(Debug)]
pub struct MultiEdges<E, W = ()> {
    owner: u64,
    arena: Vec<Option<Slot<E, W>>>,
    by_pair: FxHashMap<(NodeId, NodeId), Vec<EdgeId>>,
    live: usize,
}

#[derive(Debug, Clone)]
struct Slot<E, W> {
    id: EdgeId,
    record: MultiEdge<E, W>,
}

impl<E, W> MultiEdges<E, W> {
    /// Returns the record behind `id`, if `id` was issued for this arena's slot and is still live.
    #[must_use]
    pub fn get(&self, id: EdgeId) -> Option<&MultiEdge<E, W>> {
        self.arena
            .get(id.index())
            .and_then(Option::as_ref)
            .filter(|slot| slot.id == id)
            .map(|slot| &slot.record)
    }

    /// Handles of every edge from `from` to `to`, in insertion order.
    #[must_use]
    pub fn pair(&self, from: NodeId, to: NodeId) -> &[EdgeId] {
        self.by_pair.get(&(from, to)).map_or(&[], Vec::as_slice)
    }

    /// Iterates over every live handle in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.arena.iter().flatten().map(|slot| slot.id)
    }

    pub(crate) fn insert(&mut self, record: MultiEdge<E, W>) -> EdgeId {
        let id = EdgeId::new(self.owner, self.arena.len());
        self.by_pair
            .entry((record.source, record.target))
            .or_default()
            .push(id);
        self.arena.push(Some(Slot { id, record }));
        self.live += 1;
        id
    }

    pub(crate) fn remove(&mut self, id: EdgeId) -> Option<MultiEdge<E, W>> {
        self.get(id)?;
        let Slot { record, .. } = self.arena.get_mut(id.index())?.take()?;
        self.live -= 1;

        let key = (record.source, record.target);
        if let Some(ids) = self.by_pair.get_mut(&key) {
            ids.retain(|&other| other != id);
            if ids.is_empty() {
                self.by_pair.remove(&key);
            }
        }
        Some(record)
    }

    fn drop_pair(&mut self, from: NodeId, to: NodeId) {
        if let Some(ids) = self.by_pair.remove(&(from, to)) {
            for id in ids {
                if let Some(slot) = self.arena.get_mut(id.index()) {
                    if slot.take().is_some() {
                        self.live -= 1;
                    }
                }
            }
        }
    }
}

impl<E: Clone, W: Clone> Clone for MultiEdges<E, W> {
    fn clone(&self) -> Self {
        MultiEdges {
            owner: next_owner(),
            arena: self.arena.clone(),
            by_pair: self.by_pair.clone(),
            live: self.live,
        }
    }
}

impl<E, W> Default for MultiEdges<E, W> {
    fn default() -> Self {
        MultiEdges {
            owner: next_owner(),
            arena: Vec::new(),
            by_pair: FxHashMap::default(),
            live: 0,
        }
    }
}

impl<E, W> EdgeLayer for MultiEdges<E, W> {
    fn edge_count(&self) -> usize {
        self.live
    }

    fn detach(&mut self, node: NodeId, successors: &[NodeId], predecessors: &[NodeId]) {
        for &succ in successors {
            self.drop_pair(node, succ);
        }
        for &pred in predecessors {
            self.drop_pair(pred, node);
        }
    }

    fn clear(&mut self) {
        self.arena.clear();
        self.by_pair.clear();
        self.live = 0;
        self.owner = next_owner();
    }

    fn induced(&self, remap: &[Option<NodeId>]) -> Self
    where
        Self: Clone,
    {
        let mut copy = self.clone();
        copy.by_pair.clear();
        copy.live = 0;

        for entry in &mut copy.arena {
            let Some(slot) = entry else {
                continue;
            };
            let record = &mut slot.record;
            match (remapped(remap, record.source), remapped(remap, record.target)) {
                (Some(source), Some(target)) => {
                    record.source = source;
                    record.target = target;
                    copy.by_pair
                        .entry((source, target))
                        .or_default()
                        .push(slot.id);
                    copy.live += 1;
                }
                _ => *entry = None,
            }
        }
        copy
    }
}

impl<N: GraphNode, E, W, D: Direction> Graph<N, MultiEdges<E, W>, D> {
    /// Returns `true` if at least one edge leads from `v` to `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent.
    pub fn has_edge(&self, v: &N, u: &N) -> Result<bool> {
        Ok(!self.edge_ids(v, u)?.is_empty())
    }

    /// Handles of every edge from `v` to `u`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent.
    pub fn edge_ids(&self, v: &N, u: &N) -> Result<&[EdgeId]> {
        let from = self.store.require(v)?;
        let to = self.store.require(u)?;
        Ok(self.edges.pair(from, to))
    }

    /// Returns the payload of edge `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`](crate::Error::EdgeNotFound) if the handle is unknown,
    /// removed, or issued by another graph (or before a [`clear`](Graph::clear)).
    pub fn edge_data(&self, id: EdgeId) -> Result<&E> {
        Ok(&self.multi_record(id)?.data)
    }

    /// Returns the `(source, target)` nodes of edge `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`](crate::Error::EdgeNotFound) for unknown handles.
    pub fn endpoints(&self, id: EdgeId) -> Result<(&N, &N)> {
        let record = self.multi_record(id)?;
        match (
            self.store.node(record.source),
            self.store.node(record.target),
        ) {
            (Some(source), Some(target)) => Ok((source, target)),
            _ => Err(edge_not_found!(id)),
        }
    }

    /// Iterates over the handles of every edge in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.ids()
    }

    /// Removes edge `id`, returning its payload.
    ///
    /// The adjacency link between the endpoints disappears once their last parallel edge is gone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`](crate::Error::EdgeNotFound) for unknown handles.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<E> {
        let record = self.edges.remove(id).ok_or_else(|| edge_not_found!(id))?;
        if self.edges.pair(record.source, record.target).is_empty() {
            self.store.unlink(record.source, record.target);
        }
        Ok(record.data)
    }

    fn multi_record(&self, id: EdgeId) -> Result<&MultiEdge<E, W>> {
        self.edges.get(id).ok_or_else(|| edge_not_found!(id))
    }

    fn insert_multi(&mut self, from: NodeId, to: NodeId, data: E, weight: W) -> EdgeId {
        self.store.link(from, to);
        self.edges.insert(MultiEdge {
            source: from,
            target: to,
            data,
            weight,
        })
    }

    fn require_pairs<'a>(
        &self,
        pairs: impl Iterator<Item = (&'a N, &'a N)>,
    ) -> Result<Vec<(NodeId, NodeId)>>
    where
        N: 'a,
    {
        pairs
            .map(|(v, u)| Ok((self.store.require(v)?, self.store.require(u)?)))
            .collect()
    }
}

impl<N: GraphNode, E, D: Direction> Graph<N, MultiEdges<E, Weight>, D> {
    /// Returns the weight of edge `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`](crate::Error::EdgeNotFound) for unknown handles.
    pub fn weight(&self, id: EdgeId) -> Result<Weight> {
        Ok(self.multi_record(id)?.weight)
    }

    /// Weights of every edge from `v` to `u`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent.
    pub fn weights(&self, v: &N, u: &N) -> Result<Vec<Weight>> {
        Ok(self
            .edge_ids(v, u)?
            .iter()
            .filter_map(|&id| self.edges.get(id).map(|record| record.weight))
            .collect())
    }
}

impl<N: GraphNode, E> Graph<N, MultiEdges<E, ()>, Directed> {
    /// Adds an edge from `v` to `u` and returns its handle.
    ///
    /// Parallel edges and self-edges are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent.
    pub fn add_edge(&mut self, v: &N, u: &N, data: E) -> Result<EdgeId> {
        let from = self.store.require(v)?;
        let to = self.store.require(u)?;
        Ok(self.insert_multi(from, to, data, ()))
    }

    /// Adds several edges, returning their handles in order.
    ///
    /// All endpoints are checked first; on error nothing is inserted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if any endpoint is absent.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, E)>) -> Result<Vec<EdgeId>> {
        let batch: Vec<_> = edges.into_iter().collect();
        let pairs = self.require_pairs(batch.iter().map(|(v, u, _)| (v, u)))?;
        Ok(pairs
            .into_iter()
            .zip(batch)
            .map(|((from, to), (_, _, data))| self.insert_multi(from, to, data, ()))
            .collect())
    }
}

impl<N: GraphNode, E> Graph<N, MultiEdges<E, Weight>, Directed> {
    /// Adds a weighted edge from `v` to `u` and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphcore::DirectedWeightedMultiGraph;
    ///
    /// let mut graph: DirectedWeightedMultiGraph<char> = DirectedWeightedMultiGraph::new();
    /// graph.add_nodes(['a', 'b']);
    /// let slow = graph.add_edge(&'a', &'b', 5, ())?;
    /// let fast = graph.add_edge(&'a', &'b', 2, ())?;
    ///
    /// assert_eq!(graph.weights(&'a', &'b')?, vec![5, 2]);
    /// assert_eq!(graph.dijkstra_path(&'a', &'b')?, vec![fast]);
    /// # let _ = slow;
    /// # Ok::<(), graphcore::Error>(())
    /// ```
    pub fn add_edge(&mut self, v: &N, u: &N, weight: Weight, data: E) -> Result<EdgeId> {
        let from = self.store.require(v)?;
        let to = self.store.require(u)?;
        Ok(self.insert_multi(from, to, data, weight))
    }

    /// Adds several weighted edges, returning their handles in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if any endpoint is absent;
    /// nothing is inserted in that case.
    pub fn add_edges(
        &mut self,
        edges: impl IntoIterator<Item = (N, N, Weight, E)>,
    ) -> Result<Vec<EdgeId>> {
        let batch: Vec<_> = edges.into_iter().collect();
        let pairs = self.require_pairs(batch.iter().map(|(v, u, _, _)| (v, u)))?;
        Ok(pairs
            .into_iter()
            .zip(batch)
            .map(|((from, to), (_, _, weight, data))| self.insert_multi(from, to, data, weight))
            .collect())
    }
}

impl<N: GraphNode, E, D: Direction> WeightedSuccessors for Graph<N, MultiEdges<E, Weight>, D> {
    type Edge<'a>
        = EdgeId
    where
        Self: 'a;

    fn weighted_edges(&self, node: NodeId) -> impl Iterator<Item = WeightedEdge<Self::Edge<'_>>> {
        self.store
            .outgoing(node)
            .iter()
            .flat_map(move |&target| {
                self.edges.pair(node, target).iter().filter_map(move |&id| {
                    let record = self.edges.get(id)?;
                    Some(WeightedEdge {
                        target,
                        edge: id,
                        weight: record.weight,
                    })
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::{DirectedMultiGraph, DirectedWeightedMultiGraph, Error};

    fn ab() -> DirectedMultiGraph<char, &'static str> {
        let mut graph = DirectedMultiGraph::new();
        graph.add_nodes(['a', 'b']);
        graph
    }

    #[test]
    fn test_parallel_and_self_edges() {
        let mut graph = ab();
        let first = graph.add_edge(&'a', &'b', "first").unwrap();
        let second = graph.add_edge(&'a', &'b', "second").unwrap();
        let loop_edge = graph.add_edge(&'a', &'a', "loop").unwrap();

        assert_ne!(first, second);
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.edge_ids(&'a', &'b').unwrap(), &[first, second]);
        assert_eq!(graph.edge_data(loop_edge), Ok(&"loop"));
        assert_eq!(graph.endpoints(second), Ok((&'a', &'b')));
        assert_eq!(graph.neighbors(&'a').unwrap().count(), 2);
    }

    #[test]
    fn test_remove_parallel_edge_keeps_link() {
        let mut graph = ab();
        let first = graph.add_edge(&'a', &'b', "first").unwrap();
        let second = graph.add_edge(&'a', &'b', "second").unwrap();

        assert_eq!(graph.remove_edge(first), Ok("first"));
        assert!(graph.has_edge(&'a', &'b').unwrap());
        assert!(matches!(graph.edge_data(first), Err(Error::EdgeNotFound(_))));

        assert_eq!(graph.remove_edge(second), Ok("second"));
        assert!(!graph.has_edge(&'a', &'b').unwrap());
        assert_eq!(graph.neighbors(&'a').unwrap().count(), 0);
    }

    #[test]
    fn test_handles_do_not_cross_graphs() {
        let mut one = ab();
        let mut two = ab();
        let id = one.add_edge(&'a', &'b', "one").unwrap();
        two.add_edge(&'a', &'b', "two").unwrap();

        assert!(matches!(two.edge_data(id), Err(Error::EdgeNotFound(_))));
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut graph = ab();
        let id = graph.add_edge(&'a', &'b', "x").unwrap();
        graph.clear();
        graph.add_nodes(['a', 'b']);
        graph.add_edge(&'a', &'b', "y").unwrap();

        assert!(matches!(graph.edge_data(id), Err(Error::EdgeNotFound(_))));
    }

    #[test]
    fn test_clone_keeps_handles() {
        let mut graph = ab();
        let id = graph.add_edge(&'a', &'b', "x").unwrap();
        let mut copy = graph.clone();
        assert_eq!(copy.edge_data(id), Ok(&"x"));

        copy.remove_edge(id).unwrap();
        assert_eq!(graph.edge_data(id), Ok(&"x"));
    }

    #[test]
    fn test_clone_issues_distinct_handles() {
        let mut graph = ab();
        let shared = graph.add_edge(&'a', &'b', "shared").unwrap();
        let mut copy = graph.clone();

        let from_copy = copy.add_edge(&'a', &'b', "copy").unwrap();
        let from_graph = graph.add_edge(&'b', &'a', "graph").unwrap();

        assert_ne!(from_copy, from_graph);
        assert!(matches!(graph.edge_data(from_copy), Err(Error::EdgeNotFound(_))));
        assert!(matches!(copy.edge_data(from_graph), Err(Error::EdgeNotFound(_))));
        assert!(matches!(graph.remove_edge(from_copy), Err(Error::EdgeNotFound(_))));
        assert_eq!(graph.edge_data(from_graph), Ok(&"graph"));

        assert_eq!(copy.edges().collect::<Vec<_>>(), vec![shared, from_copy]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![shared, from_graph]);
    }

    #[test]
    fn test_subgraph_keeps_retained_handles() {
        let mut graph = ab();
        graph.add_node('c');
        let kept = graph.add_edge(&'a', &'b', "kept").unwrap();
        let dropped = graph.add_edge(&'b', &'c', "dropped").unwrap();

        let mut sub = graph.subgraph(&['a', 'b']).unwrap();
        assert_eq!(sub.edge_data(kept), Ok(&"kept"));
        assert!(sub.edge_data(dropped).is_err());
        assert_eq!(sub.edge_ids(&'a', &'b').unwrap(), &[kept]);

        let added = sub.add_edge(&'b', &'a', "sub").unwrap();
        assert!(graph.edge_data(added).is_err());
    }

    #[test]
    fn test_remove_node_drops_edges() {
        let mut graph = ab();
        graph.add_node('c');
        let ab = graph.add_edge(&'a', &'b', "ab").unwrap();
        let bc = graph.add_edge(&'b', &'c', "bc").unwrap();
        let ca = graph.add_edge(&'c', &'a', "ca").unwrap();

        graph.remove_node(&'b').unwrap();
        assert_eq!(graph.size(), 1);
        assert!(graph.edge_data(ab).is_err());
        assert!(graph.edge_data(bc).is_err());
        assert_eq!(graph.edge_data(ca), Ok(&"ca"));
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![ca]);
    }

    #[test]
    fn test_add_edges_checks_all_endpoints() {
        let mut graph = ab();
        let result = graph.add_edges([('a', 'b', "x"), ('b', 'z', "y")]);
        assert!(matches!(result, Err(Error::NodeNotFound(_))));
        assert_eq!(graph.size(), 0);

        let ids = graph.add_edges([('a', 'b', "x"), ('b', 'a', "y")]).unwrap();
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_weights() {
        let mut graph: DirectedWeightedMultiGraph<u8> = DirectedWeightedMultiGraph::new();
        graph.add_nodes([1, 2]);
        let heavy = graph.add_edge(&1, &2, 9, ()).unwrap();
        graph.add_edge(&1, &2, -1, ()).unwrap();

        assert_eq!(graph.weight(heavy), Ok(9));
        assert_eq!(graph.weights(&1, &2), Ok(vec![9, -1]));
        assert_eq!(graph.weights(&2, &1), Ok(vec![]));
        assert!(matches!(graph.weights(&1, &3), Err(Error::NodeNotFound(_))));
    }
}
