//! Simple-Edge Layer: at most one edge per ordered pair, no self-edges.
//!
//! Records are keyed by the `(source, target)` pair of node ids. Payload and weight live in a
//! [`SimpleEdge`]; unweighted graphs use `()` as the weight type so the record costs nothing
//! extra.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    error::edge_not_found,
    graph::{
        layer::remapped, Directed, Direction, EdgeLayer, Graph, GraphBase, GraphNode, NodeId,
        Weight, WeightedEdge, WeightedSuccessors,
    },
    Error, Result,
};

/// Payload and weight attached to one simple edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleEdge<E, W> {
    /// Caller payload.
    pub data: E,
    /// Edge weight, `()` for unweighted graphs.
    pub weight: W,
}

/// Edge layer keyed by ordered node pair.
#[derive(Debug, Clone)]
pub struct SimpleEdges<E, W = ()> {
    records: FxHashMap<(NodeId, NodeId), SimpleEdge<E, W>>,
}

impl<E, W> SimpleEdges<E, W> {
    /// Returns the record for `(from, to)`.
    #[must_use]
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<&SimpleEdge<E, W>> {
        self.records.get(&(from, to))
    }

    /// Returns `true` if a record exists for `(from, to)`.
    #[must_use]
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.records.contains_key(&(from, to))
    }

    pub(crate) fn insert(&mut self, from: NodeId, to: NodeId, record: SimpleEdge<E, W>) {
        self.records.insert((from, to), record);
    }

    pub(crate) fn remove(&mut self, from: NodeId, to: NodeId) -> Option<SimpleEdge<E, W>> {
        self.records.remove(&(from, to))
    }
}

impl<E, W> Default for SimpleEdges<E, W> {
    fn default() -> Self {
        SimpleEdges {
            records: FxHashMap::default(),
        }
    }
}

impl<E, W> EdgeLayer for SimpleEdges<E, W> {
    fn edge_count(&self) -> usize {
        self.records.len()
    }

    fn detach(&mut self, node: NodeId, successors: &[NodeId], predecessors: &[NodeId]) {
        for &succ in successors {
            self.records.remove(&(node, succ));
        }
        for &pred in predecessors {
            self.records.remove(&(pred, node));
        }
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn induced(&self, remap: &[Option<NodeId>]) -> Self
    where
        Self: Clone,
    {
        let records = self
            .clone()
            .records
            .into_iter()
            .filter_map(|((from, to), record)| {
                Some(((remapped(remap, from)?, remapped(remap, to)?), record))
            })
            .collect();
        SimpleEdges { records }
    }
}

impl<N: GraphNode, E, W, D: Direction> Graph<N, SimpleEdges<E, W>, D> {
    /// Returns `true` if an edge from `v` to `u` exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is absent.
    pub fn has_edge(&self, v: &N, u: &N) -> Result<bool> {
        let (from, to) = self.endpoints_of(v, u)?;
        Ok(self.edges.contains(from, to))
    }

    /// Returns the payload of the edge from `v` to `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is absent and [`Error::EdgeNotFound`] if
    /// there is no such edge.
    pub fn edge_data(&self, v: &N, u: &N) -> Result<&E> {
        Ok(&self.record(v, u)?.data)
    }

    /// Iterates over every stored directed edge as `(source, target)`.
    ///
    /// Edges come grouped by source in node insertion order. Undirected graphs report both
    /// directions of each logical edge.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.store.node_ids().flat_map(move |id| {
            let source = self.store.node(id);
            self.store
                .outgoing(id)
                .iter()
                .filter_map(move |&target| Some((source?, self.store.node(target)?)))
        })
    }

    /// Removes the edge from `v` to `u`, returning its payload.
    ///
    /// On undirected graphs the mirrored edge is removed too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is absent and [`Error::EdgeNotFound`] if
    /// there is no such edge. Nothing is removed on error.
    pub fn remove_edge(&mut self, v: &N, u: &N) -> Result<E> {
        let (from, to) = self.endpoints_of(v, u)?;
        if !self.edges.contains(from, to) || (D::MIRRORED && !self.edges.contains(to, from)) {
            return Err(edge_not_found!((v, u)));
        }

        if D::MIRRORED {
            self.edges.remove(to, from);
            self.store.unlink(to, from);
        }
        self.store.unlink(from, to);
        self.edges
            .remove(from, to)
            .map(|record| record.data)
            .ok_or_else(|| edge_not_found!((v, u)))
    }

    pub(crate) fn record(&self, v: &N, u: &N) -> Result<&SimpleEdge<E, W>> {
        let (from, to) = self.endpoints_of(v, u)?;
        self.edges
            .get(from, to)
            .ok_or_else(|| edge_not_found!((v, u)))
    }

    fn endpoints_of(&self, v: &N, u: &N) -> Result<(NodeId, NodeId)> {
        Ok((self.store.require(v)?, self.store.require(u)?))
    }

    /// Validates a new edge: both nodes present, distinct, and not yet connected.
    pub(crate) fn check_new_edge(&self, v: &N, u: &N) -> Result<(NodeId, NodeId)> {
        let (from, to) = self.endpoints_of(v, u)?;
        if from == to {
            return Err(Error::SelfEdgeNotAllowed(format!("{v:?}")));
        }
        if self.edges.contains(from, to) {
            return Err(Error::EdgeAlreadyExists(format!("{:?}", (v, u))));
        }
        Ok((from, to))
    }

    /// Validates a batch of new edges against the graph and against each other.
    pub(crate) fn check_new_edges<'a>(
        &self,
        pairs: impl Iterator<Item = (&'a N, &'a N)>,
    ) -> Result<Vec<(NodeId, NodeId)>>
    where
        N: 'a,
    {
        let mut pending = FxHashSet::default();
        let mut checked = Vec::new();
        for (v, u) in pairs {
            let (from, to) = self.check_new_edge(v, u)?;
            if !pending.insert((from, to)) {
                return Err(Error::EdgeAlreadyExists(format!("{:?}", (v, u))));
            }
            if D::MIRRORED {
                pending.insert((to, from));
            }
            checked.push((from, to));
        }
        Ok(checked)
    }

    /// Stores one directed record and its adjacency link.
    pub(crate) fn insert_record(&mut self, from: NodeId, to: NodeId, data: E, weight: W) {
        self.store.link(from, to);
        self.edges.insert(from, to, SimpleEdge { data, weight });
    }
}

impl<N: GraphNode, E, D: Direction> Graph<N, SimpleEdges<E, Weight>, D> {
    /// Returns the weight of the edge from `v` to `u`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is absent and [`Error::EdgeNotFound`] if
    /// there is no such edge.
    pub fn weight(&self, v: &N, u: &N) -> Result<Weight> {
        Ok(self.record(v, u)?.weight)
    }
}

impl<N: GraphNode, E> Graph<N, SimpleEdges<E, ()>, Directed> {
    /// Adds an edge from `v` to `u` carrying `data`.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is absent
    /// - [`Error::SelfEdgeNotAllowed`] if `v == u`
    /// - [`Error::EdgeAlreadyExists`] if the pair is already connected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphcore::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<char, &str> = DirectedGraph::new();
    /// graph.add_nodes(['a', 'b']);
    /// graph.add_edge(&'a', &'b', "ab")?;
    ///
    /// assert_eq!(graph.edge_data(&'a', &'b')?, &"ab");
    /// assert!(!graph.has_edge(&'b', &'a')?);
    /// # Ok::<(), graphcore::Error>(())
    /// ```
    pub fn add_edge(&mut self, v: &N, u: &N, data: E) -> Result<()> {
        let (from, to) = self.check_new_edge(v, u)?;
        self.insert_record(from, to, data, ());
        Ok(())
    }

    /// Adds several edges at once.
    ///
    /// Every edge is validated before any is inserted, so on error the graph is unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge), including duplicates within the batch.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, E)>) -> Result<()> {
        let batch: Vec<_> = edges.into_iter().collect();
        let checked = self.check_new_edges(batch.iter().map(|(v, u, _)| (v, u)))?;
        for ((from, to), (_, _, data)) in checked.into_iter().zip(batch) {
            self.insert_record(from, to, data, ());
        }
        Ok(())
    }
}

impl<N: GraphNode, E> Graph<N, SimpleEdges<E, Weight>, Directed> {
    /// Adds an edge from `v` to `u` with the given weight and payload.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if either node is absent
    /// - [`Error::SelfEdgeNotAllowed`] if `v == u`
    /// - [`Error::EdgeAlreadyExists`] if the pair is already connected
    pub fn add_edge(&mut self, v: &N, u: &N, weight: Weight, data: E) -> Result<()> {
        let (from, to) = self.check_new_edge(v, u)?;
        self.insert_record(from, to, data, weight);
        Ok(())
    }

    /// Adds several weighted edges at once; nothing is inserted if any edge is invalid.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge), including duplicates within the batch.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, Weight, E)>) -> Result<()> {
        let batch: Vec<_> = edges.into_iter().collect();
        let checked = self.check_new_edges(batch.iter().map(|(v, u, _, _)| (v, u)))?;
        for ((from, to), (_, _, weight, data)) in checked.into_iter().zip(batch) {
            self.insert_record(from, to, data, weight);
        }
        Ok(())
    }
}

impl<N: GraphNode, E, D: Direction> WeightedSuccessors for Graph<N, SimpleEdges<E, Weight>, D> {
    type Edge<'a>
        = (&'a N, &'a N)
    where
        Self: 'a;

    fn weighted_edges(&self, node: NodeId) -> impl Iterator<Item = WeightedEdge<Self::Edge<'_>>> {
        let source = self.store.node(node);
        self.store.outgoing(node).iter().filter_map(move |&target| {
            let record = self.edges.get(node, target)?;
            Some(WeightedEdge {
                target,
                edge: (source?, self.store.node(target)?),
                weight: record.weight,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{DirectedGraph, DirectedWeightedGraph, Error};

    fn abc() -> DirectedGraph<char, u32> {
        let mut graph = DirectedGraph::new();
        graph.add_nodes(['a', 'b', 'c']);
        graph
    }

    #[test]
    fn test_add_edge_and_lookup() {
        let mut graph = abc();
        graph.add_edge(&'a', &'b', 1).unwrap();
        graph.add_edge(&'b', &'c', 2).unwrap();

        assert_eq!(graph.edge_data(&'a', &'b'), Ok(&1));
        assert!(graph.has_edge(&'b', &'c').unwrap());
        assert!(!graph.has_edge(&'c', &'b').unwrap());
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let mut graph = abc();
        graph.add_edge(&'a', &'b', 1).unwrap();
        assert!(matches!(
            graph.add_edge(&'a', &'b', 2),
            Err(Error::EdgeAlreadyExists(_))
        ));
        assert_eq!(graph.neighbors(&'a').unwrap().count(), 1);
        assert_eq!(graph.edge_data(&'a', &'b'), Ok(&1));
    }

    #[test]
    fn test_self_edge_rejected() {
        let mut graph = abc();
        assert!(matches!(
            graph.add_edge(&'a', &'a', 0),
            Err(Error::SelfEdgeNotAllowed(_))
        ));
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_missing_endpoint() {
        let mut graph = abc();
        assert!(matches!(
            graph.add_edge(&'a', &'z', 0),
            Err(Error::NodeNotFound(_))
        ));
        assert!(matches!(graph.has_edge(&'z', &'a'), Err(Error::NodeNotFound(_))));
        assert!(matches!(
            graph.edge_data(&'a', &'c'),
            Err(Error::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_add_edges_is_atomic() {
        let mut graph = abc();
        let result = graph.add_edges([('a', 'b', 1), ('b', 'c', 2), ('a', 'b', 3)]);
        assert!(matches!(result, Err(Error::EdgeAlreadyExists(_))));
        assert_eq!(graph.size(), 0);

        graph.add_edges([('a', 'b', 1), ('b', 'c', 2)]).unwrap();
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = abc();
        graph.add_edge(&'a', &'b', 7).unwrap();
        assert_eq!(graph.remove_edge(&'a', &'b'), Ok(7));
        assert!(!graph.has_edge(&'a', &'b').unwrap());
        assert_eq!(graph.neighbors(&'a').unwrap().count(), 0);
        assert!(matches!(
            graph.remove_edge(&'a', &'b'),
            Err(Error::EdgeNotFound(_))
        ));
    }

    #[test]
    fn test_edges_listing_order() {
        let mut graph = abc();
        graph
            .add_edges([('b', 'c', 0), ('a', 'c', 0), ('a', 'b', 0)])
            .unwrap();
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(&'a', &'c'), (&'a', &'b'), (&'b', &'c')]);
    }

    #[test]
    fn test_weight_lookup() {
        let mut graph: DirectedWeightedGraph<&str> = DirectedWeightedGraph::new();
        graph.add_nodes(["x", "y"]);
        graph.add_edge(&"x", &"y", -4, ()).unwrap();
        assert_eq!(graph.weight(&"x", &"y"), Ok(-4));
        assert!(matches!(graph.weight(&"y", &"x"), Err(Error::EdgeNotFound(_))));
    }

    #[test]
    fn test_remove_node_drops_records() {
        let mut graph = abc();
        graph
            .add_edges([('a', 'b', 1), ('b', 'c', 2), ('c', 'a', 3)])
            .unwrap();
        graph.remove_node(&'b').unwrap();
        assert_eq!(graph.size(), 1);
        assert_eq!(graph.edge_data(&'c', &'a'), Ok(&3));

        graph.add_node('b');
        assert!(!graph.has_edge(&'a', &'b').unwrap());
        graph.add_edge(&'a', &'b', 4).unwrap();
        assert_eq!(graph.edge_data(&'a', &'b'), Ok(&4));
    }
}
