//! Node-keyed view over a single-source shortest-path result.

use crate::graph::{algorithms::ShortestPathTree, GraphNode, NodeStore, Weight};

/// Result of a single-source shortest-path run on a [`Graph`](crate::graph::Graph).
///
/// Wraps a [`ShortestPathTree`] and answers in terms of node values. `R` is the graph's edge
/// reference: `(&N, &N)` for simple graphs, [`EdgeId`](crate::graph::EdgeId) for multigraphs.
///
/// # Examples
///
/// ```rust
/// use graphcore::DirectedWeightedGraph;
///
/// let mut graph: DirectedWeightedGraph<&str> = DirectedWeightedGraph::new();
/// graph.add_nodes(["a", "b", "c"]);
/// graph.add_edges([("a", "b", 1, ()), ("b", "c", 2, ()), ("a", "c", 5, ())])?;
///
/// let paths = graph.dijkstra(&"a")?;
/// assert_eq!(paths.distance(&"c"), Some(3));
/// assert_eq!(paths.path_to(&"c"), vec![(&"a", &"b"), (&"b", &"c")]);
/// assert_eq!(paths.len(), 2);
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths<'g, N, R> {
    store: &'g NodeStore<N>,
    source: &'g N,
    tree: ShortestPathTree<R>,
}

impl<'g, N: GraphNode, R: Clone> ShortestPaths<'g, N, R> {
    pub(crate) fn new(store: &'g NodeStore<N>, source: &'g N, tree: ShortestPathTree<R>) -> Self {
        ShortestPaths {
            store,
            source,
            tree,
        }
    }

    /// The node the search started from.
    #[must_use]
    pub fn source(&self) -> &'g N {
        self.source
    }

    /// Shortest distance to `node`; `None` if it is unreached or not in the graph.
    #[must_use]
    pub fn distance(&self, node: &N) -> Option<Weight> {
        self.tree.distance(self.store.id_of(node)?)
    }

    /// The previous node and the edge used to reach `node`.
    ///
    /// `None` for the source, for unreached nodes and for nodes not in the graph.
    #[must_use]
    pub fn predecessor(&self, node: &N) -> Option<(&'g N, &R)> {
        let (prev, edge) = self.tree.predecessor(self.store.id_of(node)?)?;
        Some((self.store.node(prev)?, edge))
    }

    /// Edges from the source to `target` in travel order.
    ///
    /// Empty when `target` is the source, is unreached, or is not in the graph.
    #[must_use]
    pub fn path_to(&self, target: &N) -> Vec<R> {
        self.store
            .id_of(target)
            .and_then(|id| self.tree.path_to(id))
            .unwrap_or_default()
    }

    /// Every reached node except the source, as `(node, incoming edge, distance)`, in node
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'g N, &R, Weight)> + '_ {
        let store = self.store;
        self.tree
            .reached()
            .filter_map(move |(node, _, edge, distance)| Some((store.node(node)?, edge, distance)))
    }

    /// Number of reached nodes, the source excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.reached().count()
    }

    /// Returns `true` if nothing besides the source was reached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.reached().next().is_none()
    }

    /// The underlying id-level tree.
    #[must_use]
    pub fn tree(&self) -> &ShortestPathTree<R> {
        &self.tree
    }
}
