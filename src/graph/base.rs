//! The [`Graph`] composition root and the operations every variant shares.

use std::marker::PhantomData;

use tracing::debug;

use crate::{
    error::node_not_found,
    graph::{
        algorithms, Directed, Direction, EdgeLayer, GraphBase, GraphNode, NodeId, NodeStore,
        Predecessors, ShortestPaths, Successors, Weight, WeightedSuccessors,
    },
    Error, Result,
};

/// A graph over node values of type `N`.
///
/// The node set and adjacency live in a [`NodeStore`]; the edge layer `L` holds payloads,
/// weights and handles; the marker `D` selects whether edge mutations are mirrored. Use the
/// aliases in [`crate::graph`] rather than spelling out the parameters.
///
/// Nodes are addressed by value. Every operation that takes a node fails with
/// [`Error::NodeNotFound`](crate::Error::NodeNotFound) before changing anything if the node is
/// absent.
///
/// Traversals that return iterators borrow the graph, so it cannot be mutated while one is
/// being consumed. No operation keeps state between calls.
///
/// # Examples
///
/// ```rust
/// use graphcore::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_nodes(["parse", "check", "emit"]);
/// graph.add_edge(&"parse", &"check", ())?;
/// graph.add_edge(&"check", &"emit", ())?;
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.size(), 2);
/// assert_eq!(graph.topological_sort(), vec![&"parse", &"check", &"emit"]);
/// assert!(!graph.is_cyclic());
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N, L, D = Directed> {
    pub(crate) store: NodeStore<N>,
    pub(crate) edges: L,
    direction: PhantomData<D>,
}

impl<N: GraphNode, L: EdgeLayer, D: Direction> Graph<N, L, D> {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Graph {
            store: NodeStore::new(),
            edges: L::default(),
            direction: PhantomData,
        }
    }

    /// Creates an empty graph with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            store: NodeStore::with_capacity(nodes),
            edges: L::default(),
            direction: PhantomData,
        }
    }

    /// Adds a node and returns its id. Adding a node that is already present changes nothing.
    pub fn add_node(&mut self, node: N) -> NodeId {
        self.store.add_node(node)
    }

    /// Adds every node of `nodes`, skipping the ones already present.
    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) {
        for node in nodes {
            self.store.add_node(node);
        }
    }

    /// Returns `true` if `node` is in the graph.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.store.contains(node)
    }

    /// Iterates over the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.store.nodes()
    }

    /// Number of nodes.
    #[must_use]
    pub fn order(&self) -> usize {
        self.store.len()
    }

    /// Number of edges. Each undirected edge counts once.
    #[must_use]
    pub fn size(&self) -> usize {
        if D::MIRRORED {
            self.edges.edge_count() / 2
        } else {
            self.edges.edge_count()
        }
    }

    /// Nodes reachable from `node` over one edge, in the order they were first connected.
    ///
    /// Parallel edges to the same neighbor are reported once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is absent.
    pub fn neighbors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_> {
        let id = self.store.require(node)?;
        Ok(self.resolve(self.store.outgoing(id).iter().copied()))
    }

    /// Nodes with an edge into `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is absent.
    pub fn predecessors(&self, node: &N) -> Result<impl Iterator<Item = &N> + '_> {
        let id = self.store.require(node)?;
        Ok(self.resolve(self.store.incoming(id).iter().copied()))
    }

    /// Number of distinct neighbors of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is absent.
    pub fn degree(&self, node: &N) -> Result<usize> {
        let id = self.store.require(node)?;
        Ok(self.store.outgoing(id).len())
    }

    /// Removes `node` and every edge touching it, returning the stored node value.
    ///
    /// Ids of the remaining nodes do not change.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is absent.
    pub fn remove_node(&mut self, node: &N) -> Result<N> {
        let id = self.store.require(node)?;
        let detached = self
            .store
            .remove_node(id)
            .ok_or_else(|| node_not_found!(node))?;
        self.edges
            .detach(id, &detached.successors, &detached.predecessors);

        debug!(
            node = ?detached.node,
            edges = self.edges.edge_count(),
            "removed node and incident edges"
        );
        Ok(detached.node)
    }

    /// Drops every node and edge.
    ///
    /// Node ids restart from zero and previously issued edge handles stop resolving.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.store.len(),
            edges = self.edges.edge_count(),
            "clearing graph"
        );
        self.store.clear();
        self.edges.clear();
    }

    /// Returns the id of `node`, for use with [`algorithms`].
    #[must_use]
    pub fn node_id(&self, node: &N) -> Option<NodeId> {
        self.store.id_of(node)
    }

    /// Returns the node stored under `id`.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&N> {
        self.store.node(id)
    }

    /// The underlying node store.
    #[must_use]
    pub fn store(&self) -> &NodeStore<N> {
        &self.store
    }

    /// Builds a new graph holding `nodes` and the edges among them.
    ///
    /// Nodes keep the order given, duplicates are ignored. Edge handles of retained
    /// multigraph edges stay valid in the new graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if any node is absent.
    pub fn subgraph(&self, nodes: &[N]) -> Result<Self>
    where
        L: Clone,
    {
        let members = nodes
            .iter()
            .map(|node| self.store.require(node))
            .collect::<Result<Vec<_>>>()?;
        let (store, remap) = self.store.induced(&members);
        Ok(Graph {
            store,
            edges: self.edges.induced(&remap),
            direction: PhantomData,
        })
    }

    /// Depth-first pre-order over the whole graph. See [`algorithms::preorder_dfs`].
    pub fn preorder_dfs(&self) -> impl Iterator<Item = &N> + '_ {
        self.resolve(algorithms::preorder_dfs(self))
    }

    /// Depth-first post-order over the whole graph. See [`algorithms::postorder_dfs`].
    #[must_use]
    pub fn postorder_dfs(&self) -> Vec<&N> {
        self.resolve(algorithms::postorder_dfs(self)).collect()
    }

    /// Breadth-first discovery order. Roots are not yielded unless reached by an edge; see
    /// [`algorithms::bfs`].
    pub fn bfs(&self) -> impl Iterator<Item = &N> + '_ {
        self.resolve(algorithms::bfs(self))
    }

    /// Lexicographic breadth-first order. See [`algorithms::lexicographic_bfs`].
    #[must_use]
    pub fn lexicographic_bfs(&self) -> Vec<&N> {
        self.resolve(algorithms::lexicographic_bfs(self)).collect()
    }

    /// Strongly connected components in completion order.
    /// See [`algorithms::strongly_connected_components`].
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<&N>> {
        algorithms::strongly_connected_components(self)
            .into_iter()
            .map(|component| self.resolve(component).collect())
            .collect()
    }

    /// Returns `true` if the graph has a cycle, self-edges included.
    ///
    /// This is stricter than asking for a strongly connected component with more than one node:
    /// a multigraph whose only cycle is a self-edge has nothing but single-node components and
    /// still counts as cyclic. Simple graphs reject self-edges, so there the two rules agree.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        algorithms::is_cyclic(self)
    }

    /// Reverse depth-first post-order; only a topological order if the graph is acyclic.
    /// See [`algorithms::topological_sort`].
    #[must_use]
    pub fn topological_sort(&self) -> Vec<&N> {
        self.resolve(algorithms::topological_sort(self)).collect()
    }

    /// A topological order, or `None` if the graph is cyclic.
    #[must_use]
    pub fn checked_topological_sort(&self) -> Option<Vec<&N>> {
        algorithms::checked_topological_sort(self).map(|order| self.resolve(order).collect())
    }

    /// Every elementary cycle, each listed once. See [`algorithms::simple_cycles`].
    #[must_use]
    pub fn simple_cycles(&self) -> Vec<Vec<&N>> {
        algorithms::simple_cycles(self)
            .into_iter()
            .map(|cycle| self.resolve(cycle).collect())
            .collect()
    }

    fn resolve<'a>(
        &'a self,
        ids: impl IntoIterator<Item = NodeId> + 'a,
    ) -> impl Iterator<Item = &'a N> + 'a {
        ids.into_iter().filter_map(move |id| self.store.node(id))
    }
}

impl<N: GraphNode, L: EdgeLayer, D: Direction> Graph<N, L, D>
where
    Self: WeightedSuccessors,
{
    /// Single-source shortest paths with Dijkstra's algorithm.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source` is absent
    /// - [`Error::NegativeWeightNotSupported`](crate::Error::NegativeWeightNotSupported) if any
    ///   edge of the graph has a negative weight
    pub fn dijkstra(
        &self,
        source: &N,
    ) -> Result<ShortestPaths<'_, N, <Self as WeightedSuccessors>::Edge<'_>>> {
        let id = self.store.require(source)?;
        let tree = algorithms::dijkstra(self, id)?;
        Ok(ShortestPaths::new(&self.store, self.stored(id, source)?, tree))
    }

    /// Edges of a shortest path from `source` to `target` by Dijkstra's algorithm.
    ///
    /// Empty if `target` is unreachable or equal to `source`.
    ///
    /// # Errors
    ///
    /// Same as [`dijkstra`](Self::dijkstra), plus `NodeNotFound` for an absent `target`.
    pub fn dijkstra_path(
        &self,
        source: &N,
        target: &N,
    ) -> Result<Vec<<Self as WeightedSuccessors>::Edge<'_>>> {
        self.store.require(target)?;
        Ok(self.dijkstra(source)?.path_to(target))
    }

    /// Single-source shortest paths with the Bellman-Ford algorithm. Negative weights are
    /// allowed.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source` is absent
    /// - [`Error::NegativeCycleDetected`](crate::Error::NegativeCycleDetected) if a negative
    ///   cycle is reachable from `source`
    pub fn bellman_ford(
        &self,
        source: &N,
    ) -> Result<ShortestPaths<'_, N, <Self as WeightedSuccessors>::Edge<'_>>> {
        let id = self.store.require(source)?;
        let tree = algorithms::bellman_ford(self, id).map_err(|err| match err {
            Error::NegativeCycleDetected(_) => Error::NegativeCycleDetected(format!("{source:?}")),
            other => other,
        })?;
        Ok(ShortestPaths::new(&self.store, self.stored(id, source)?, tree))
    }

    /// Edges of a shortest path from `source` to `target` by the Bellman-Ford algorithm.
    ///
    /// # Errors
    ///
    /// Same as [`bellman_ford`](Self::bellman_ford), plus `NodeNotFound` for an absent `target`.
    pub fn bellman_ford_path(
        &self,
        source: &N,
        target: &N,
    ) -> Result<Vec<<Self as WeightedSuccessors>::Edge<'_>>> {
        self.store.require(target)?;
        Ok(self.bellman_ford(source)?.path_to(target))
    }

    /// Edges of a path from `start` to `end` found by A*.
    ///
    /// `heuristic(node, end)` estimates the remaining cost. It is not checked for admissibility;
    /// an overestimating heuristic can produce a longer path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `start` or `end` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphcore::DirectedWeightedGraph;
    ///
    /// let mut graph: DirectedWeightedGraph<(i64, i64)> = DirectedWeightedGraph::new();
    /// graph.add_nodes([(0, 0), (1, 0), (1, 1)]);
    /// graph.add_edges([
    ///     ((0, 0), (1, 0), 1, ()),
    ///     ((1, 0), (1, 1), 1, ()),
    ///     ((0, 0), (1, 1), 3, ()),
    /// ])?;
    ///
    /// let manhattan = |a: &(i64, i64), b: &(i64, i64)| (a.0 - b.0).abs() + (a.1 - b.1).abs();
    /// let path = graph.astar_path(&(0, 0), &(1, 1), manhattan)?;
    /// assert_eq!(path.len(), 2);
    /// # Ok::<(), graphcore::Error>(())
    /// ```
    pub fn astar_path<H>(
        &self,
        start: &N,
        end: &N,
        mut heuristic: H,
    ) -> Result<Vec<<Self as WeightedSuccessors>::Edge<'_>>>
    where
        H: FnMut(&N, &N) -> Weight,
    {
        let from = self.store.require(start)?;
        let to = self.store.require(end)?;
        let store = &self.store;
        let path = algorithms::astar(self, from, to, |node, goal| {
            match (store.node(node), store.node(goal)) {
                (Some(node), Some(goal)) => heuristic(node, goal),
                _ => 0,
            }
        })?;
        Ok(path.unwrap_or_default())
    }

    fn stored(&self, id: NodeId, node: &N) -> Result<&N> {
        self.store.node(id).ok_or_else(|| node_not_found!(node))
    }
}

impl<N: GraphNode, L: EdgeLayer, D: Direction> Default for Graph<N, L, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: GraphNode, L, D> GraphBase for Graph<N, L, D> {
    fn node_count(&self) -> usize {
        self.store.node_count()
    }

    fn node_bound(&self) -> usize {
        self.store.node_bound()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        self.store.node_ids()
    }

    fn contains_node(&self, node: NodeId) -> bool {
        self.store.contains_node(node)
    }
}

impl<N: GraphNode, L, D> Successors for Graph<N, L, D> {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.store.successors(node)
    }
}

impl<N: GraphNode, L, D> Predecessors for Graph<N, L, D> {
    fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        Predecessors::predecessors(&self.store, node)
    }
}
