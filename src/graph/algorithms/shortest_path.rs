//! Shortest paths over weighted graphs: Dijkstra, Bellman-Ford and A*.
//!
//! All three algorithms record, for every reached node, the edge through which it was reached.
//! Paths are rebuilt from those predecessor records by walking back from the target and
//! reversing. Distances use saturating arithmetic and `None` stands for "not reached".
//!
//! # Tie-breaking
//!
//! The priority queues order candidates by `(distance, NodeId)`, so among nodes with equal
//! tentative distance the one inserted first into the graph is settled first. Relaxation uses a
//! strict comparison: among equally cheap edges into a node, the first one examined wins, which
//! for parallel edges of a multigraph is the earliest inserted.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::{debug, trace};

use crate::{
    graph::{GraphBase, NodeId, Weight, WeightedSuccessors},
    Error, Result,
};

/// Single-source shortest-path result in terms of node ids.
///
/// `R` is the edge reference type of the graph the tree was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<R> {
    source: NodeId,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<(NodeId, R)>>,
}

impl<R: Clone> ShortestPathTree<R> {
    fn new(source: NodeId, bound: usize) -> Self {
        let mut distances = vec![None; bound];
        if let Some(slot) = distances.get_mut(source.index()) {
            *slot = Some(0);
        }
        ShortestPathTree {
            source,
            distances,
            predecessors: vec![None; bound],
        }
    }

    /// The node the search started from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Shortest distance to `node`, or `None` if it was not reached.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<Weight> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// The node and edge through which `node` was reached.
    ///
    /// `None` for the source and for unreached nodes.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<(NodeId, &R)> {
        self.predecessors
            .get(node.index())
            .and_then(Option::as_ref)
            .map(|(prev, edge)| (*prev, edge))
    }

    /// Edges from the source to `target`, in travel order.
    ///
    /// `Some(vec![])` for the source itself, `None` if `target` was not reached.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<R>> {
        self.distance(target)?;

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            let (prev, edge) = self.predecessor(current)?;
            path.push(edge.clone());
            current = prev;
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Every reached node other than the source, as `(node, predecessor, edge, distance)`,
    /// in node id order.
    pub fn reached(&self) -> impl Iterator<Item = (NodeId, NodeId, &R, Weight)> + '_ {
        self.predecessors
            .iter()
            .enumerate()
            .filter_map(move |(index, entry)| {
                let (prev, edge) = entry.as_ref()?;
                let node = NodeId::new(index);
                Some((node, *prev, edge, self.distance(node)?))
            })
    }

    fn relax(&mut self, from: NodeId, edge: R, to: NodeId, weight: Weight) -> Option<Weight> {
        let candidate = self.distance(from)?.saturating_add(weight);
        let slot = self.distances.get_mut(to.index())?;
        if slot.map_or(true, |current| candidate < current) {
            *slot = Some(candidate);
            self.predecessors[to.index()] = Some((from, edge));
            Some(candidate)
        } else {
            None
        }
    }
}

fn require_node<G: GraphBase>(graph: &G, node: NodeId) -> Result<()> {
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(Error::NodeNotFound(node.to_string()))
    }
}

/// Single-source shortest paths with Dijkstra's algorithm.
///
/// The whole graph is scanned first and rejected if any edge weight is negative, whether or not
/// that edge is reachable from `source`.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` is not a live node
/// - [`Error::NegativeWeightNotSupported`] if any edge has a negative weight
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E)
pub fn dijkstra<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
) -> Result<ShortestPathTree<G::Edge<'_>>> {
    require_node(graph, source)?;
    for node in graph.node_ids() {
        if let Some(edge) = graph.weighted_edges(node).find(|edge| edge.weight < 0) {
            debug!(weight = edge.weight, "rejected negative weight for Dijkstra");
            return Err(Error::NegativeWeightNotSupported(edge.weight));
        }
    }

    let mut tree = ShortestPathTree::new(source, graph.node_bound());
    let mut settled = vec![false; graph.node_bound()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, node))) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        for edge in graph.weighted_edges(node) {
            if settled[edge.target.index()] {
                continue;
            }
            let weight = edge.weight;
            let target = edge.target;
            if let Some(candidate) = tree.relax(node, edge.edge, target, weight) {
                trace!(from = %node, to = %target, distance, candidate, "relaxed edge");
                heap.push(Reverse((candidate, target)));
            }
        }
    }

    Ok(tree)
}

/// Single-source shortest paths with the Bellman-Ford algorithm.
///
/// Negative weights are allowed. Every edge (every handle, for multigraphs) is relaxed in up to
/// `|V|` passes, stopping early once a pass changes nothing. One more full pass follows; if it can
/// still relax an edge, a negative cycle is reachable from `source`.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` is not a live node
/// - [`Error::NegativeCycleDetected`] if a negative-weight cycle is reachable from `source`
///
/// # Complexity
///
/// - Time: O(V * E)
/// - Space: O(V)
pub fn bellman_ford<G: WeightedSuccessors>(
    graph: &G,
    source: NodeId,
) -> Result<ShortestPathTree<G::Edge<'_>>> {
    require_node(graph, source)?;

    let mut tree = ShortestPathTree::new(source, graph.node_bound());
    let mut passes = 0;
    for _ in 0..graph.node_count() {
        passes += 1;
        let mut changed = false;
        for node in graph.node_ids() {
            if tree.distance(node).is_none() {
                continue;
            }
            for edge in graph.weighted_edges(node) {
                let target = edge.target;
                changed |= tree.relax(node, edge.edge, target, edge.weight).is_some();
            }
        }
        if !changed {
            break;
        }
    }
    trace!(passes, "bellman-ford relaxation finished");

    for node in graph.node_ids() {
        let Some(distance) = tree.distance(node) else {
            continue;
        };
        for edge in graph.weighted_edges(node) {
            let candidate = distance.saturating_add(edge.weight);
            if tree.distance(edge.target).map_or(true, |current| candidate < current) {
                debug!(source = %source, "negative cycle detected");
                return Err(Error::NegativeCycleDetected(source.to_string()));
            }
        }
    }

    Ok(tree)
}

/// Point-to-point shortest path with the A* algorithm.
///
/// `heuristic(node, end)` estimates the remaining cost from `node`. It is trusted as given: a
/// heuristic that overestimates yields a possibly suboptimal path, not an error. With a heuristic
/// of zero everywhere the search settles nodes in the same order as [`dijkstra`].
///
/// # Returns
///
/// The edges from `start` to `end`, `Some(vec![])` when `start == end`, and `None` when `end` is
/// unreachable.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` or `end` is not a live node.
pub fn astar<G, H>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    mut heuristic: H,
) -> Result<Option<Vec<G::Edge<'_>>>>
where
    G: WeightedSuccessors,
    H: FnMut(NodeId, NodeId) -> Weight,
{
    require_node(graph, start)?;
    require_node(graph, end)?;
    if start == end {
        return Ok(Some(Vec::new()));
    }

    let mut tree = ShortestPathTree::new(start, graph.node_bound());
    let mut closed = vec![false; graph.node_bound()];
    let mut open = BinaryHeap::new();
    open.push(Reverse((heuristic(start, end), start)));

    while let Some(Reverse((_, node))) = open.pop() {
        if node == end {
            return Ok(tree.path_to(end));
        }
        if closed[node.index()] {
            continue;
        }
        closed[node.index()] = true;

        for edge in graph.weighted_edges(node) {
            let target = edge.target;
            if closed[target.index()] {
                continue;
            }
            if let Some(g_score) = tree.relax(node, edge.edge, target, edge.weight) {
                let f_score = g_score.saturating_add(heuristic(target, end));
                open.push(Reverse((f_score, target)));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeStore, Successors, WeightedEdge};

    /// Minimal weighted graph: a store plus one weight per link.
    struct Weighted {
        store: NodeStore<usize>,
        weights: Vec<(usize, usize, Weight)>,
    }

    impl Weighted {
        fn new(count: usize, edges: &[(usize, usize, Weight)]) -> Self {
            let mut store = NodeStore::new();
            for node in 0..count {
                store.add_node(node);
            }
            for &(from, to, _) in edges {
                store.link(NodeId::new(from), NodeId::new(to));
            }
            Weighted {
                store,
                weights: edges.to_vec(),
            }
        }
    }

    impl GraphBase for Weighted {
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

    impl Successors for Weighted {
        fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.store.successors(node)
        }
    }

    impl WeightedSuccessors for Weighted {
        type Edge<'a> = usize;

        fn weighted_edges(
            &self,
            node: NodeId,
        ) -> impl Iterator<Item = WeightedEdge<Self::Edge<'_>>> {
            self.weights
                .iter()
                .enumerate()
                .filter(move |(_, (from, _, _))| *from == node.index())
                .map(|(index, &(_, to, weight))| WeightedEdge {
                    target: NodeId::new(to),
                    edge: index,
                    weight,
                })
        }
    }

    fn n(index: usize) -> NodeId {
        NodeId::new(index)
    }

    // a..h mapped to 0..7
    fn scenario() -> Weighted {
        Weighted::new(
            8,
            &[
                (0, 1, 2),
                (0, 2, 3),
                (0, 4, 4),
                (1, 3, 2),
                (1, 4, 1),
                (2, 6, 4),
                (2, 7, 11),
                (3, 2, 3),
                (3, 5, 2),
                (3, 7, 3),
                (4, 5, 5),
                (5, 3, 2),
                (5, 7, 6),
                (6, 7, 7),
                (7, 5, 1),
            ],
        )
    }

    #[test]
    fn test_dijkstra_distances() {
        let graph = scenario();
        let tree = dijkstra(&graph, n(0)).unwrap();
        let distances: Vec<_> = (0..8).map(|i| tree.distance(n(i))).collect();
        assert_eq!(
            distances,
            vec![
                Some(0),
                Some(2),
                Some(3),
                Some(4),
                Some(3),
                Some(6),
                Some(7),
                Some(7)
            ]
        );
        assert_eq!(tree.predecessor(n(7)).map(|(prev, _)| prev), Some(n(3)));
        assert_eq!(tree.path_to(n(7)), Some(vec![0, 3, 9]));
        assert_eq!(tree.reached().count(), 7);
    }

    #[test]
    fn test_dijkstra_rejects_negative_weight() {
        let graph = Weighted::new(3, &[(0, 1, 1), (2, 1, -1)]);
        assert_eq!(
            dijkstra(&graph, n(0)),
            Err(Error::NegativeWeightNotSupported(-1))
        );
    }

    #[test]
    fn test_dijkstra_unreachable() {
        let graph = Weighted::new(3, &[(0, 1, 1)]);
        let tree = dijkstra(&graph, n(0)).unwrap();
        assert_eq!(tree.distance(n(2)), None);
        assert_eq!(tree.path_to(n(2)), None);
        assert_eq!(tree.path_to(n(0)), Some(vec![]));
    }

    #[test]
    fn test_dijkstra_tie_prefers_first_edge() {
        let graph = Weighted::new(2, &[(0, 1, 3), (0, 1, 3)]);
        let tree = dijkstra(&graph, n(0)).unwrap();
        assert_eq!(tree.path_to(n(1)), Some(vec![0]));
    }

    #[test]
    fn test_dijkstra_missing_source() {
        let graph = Weighted::new(1, &[]);
        assert!(matches!(dijkstra(&graph, n(4)), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_bellman_ford_matches_dijkstra() {
        let graph = scenario();
        let fast = dijkstra(&graph, n(0)).unwrap();
        let slow = bellman_ford(&graph, n(0)).unwrap();
        for i in 0..8 {
            assert_eq!(fast.distance(n(i)), slow.distance(n(i)));
        }
    }

    #[test]
    fn test_bellman_ford_negative_edge() {
        let graph = Weighted::new(4, &[(0, 1, 4), (0, 2, 1), (2, 1, -2), (1, 3, 1)]);
        let tree = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(tree.distance(n(1)), Some(-1));
        assert_eq!(tree.distance(n(3)), Some(0));
        assert_eq!(tree.path_to(n(3)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_bellman_ford_negative_cycle() {
        let graph = Weighted::new(3, &[(0, 1, 1), (1, 2, -2), (2, 1, 1)]);
        assert!(matches!(
            bellman_ford(&graph, n(0)),
            Err(Error::NegativeCycleDetected(_))
        ));
    }

    #[test]
    fn test_bellman_ford_unreachable_negative_cycle() {
        let graph = Weighted::new(3, &[(0, 1, 1), (2, 2, -1)]);
        let tree = bellman_ford(&graph, n(0)).unwrap();
        assert_eq!(tree.distance(n(1)), Some(1));
        assert_eq!(tree.distance(n(2)), None);
    }

    #[test]
    fn test_astar_zero_heuristic() {
        let graph = scenario();
        let path = astar(&graph, n(0), n(7), |_, _| 0).unwrap();
        let expected = dijkstra(&graph, n(0)).unwrap().path_to(n(7));
        assert_eq!(path, expected);
    }

    #[test]
    fn test_astar_same_node() {
        let graph = scenario();
        assert_eq!(astar(&graph, n(3), n(3), |_, _| 0), Ok(Some(vec![])));
    }

    #[test]
    fn test_astar_unreachable() {
        let graph = Weighted::new(3, &[(0, 1, 1)]);
        assert_eq!(astar(&graph, n(0), n(2), |_, _| 0), Ok(None));
    }

    #[test]
    fn test_astar_misleading_heuristic_still_finds_a_path() {
        let graph = Weighted::new(3, &[(0, 1, 1), (1, 2, 1), (0, 2, 5)]);
        let path = astar(&graph, n(0), n(2), |node, _| if node == n(1) { 100 } else { 0 })
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![2]);
    }
}
