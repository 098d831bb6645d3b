//! Topological ordering of directed graphs.
//!
//! A topological ordering lists nodes so that for every edge `(u, v)`, `u` comes before `v`.
//! Such an order only exists for acyclic graphs.
//!
//! - [`topological_sort`] is the reverse of the depth-first post-order. It never fails: on a
//!   cyclic graph it still returns every node once, but the order is then not topological.
//! - [`checked_topological_sort`] uses Kahn's algorithm and returns `None` for cyclic graphs.

use std::collections::VecDeque;

use crate::graph::{algorithms::postorder_dfs, NodeId, Predecessors, Successors};

/// Returns every node in reverse depth-first post-order.
///
/// Acyclicity is not checked. Callers that need a guarantee should test
/// [`is_cyclic`](crate::graph::algorithms::is_cyclic) first or use
/// [`checked_topological_sort`].
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{algorithms::topological_sort, NodeStore};
///
/// let mut store = NodeStore::new();
/// let a = store.add_node("a");
/// let b = store.add_node("b");
/// let c = store.add_node("c");
/// store.link(a, c);
/// store.link(c, b);
///
/// assert_eq!(topological_sort(&store), vec![a, c, b]);
/// ```
pub fn topological_sort<G: Successors>(graph: &G) -> Vec<NodeId> {
    let mut order = postorder_dfs(graph);
    order.reverse();
    order
}

/// Computes a topological ordering with Kahn's algorithm.
///
/// Nodes with no remaining incoming edges are emitted in insertion order, then removed, until
/// none are left.
///
/// # Returns
///
/// `Some` ordering if the graph is acyclic, `None` if some nodes could never be emitted because
/// they lie on or behind a cycle (self-edges included).
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn checked_topological_sort<G>(graph: &G) -> Option<Vec<NodeId>>
where
    G: Successors + Predecessors,
{
    let mut in_degree = vec![0usize; graph.node_bound()];
    for node in graph.node_ids() {
        in_degree[node.index()] = graph.predecessors(node).count();
    }

    let mut queue: VecDeque<NodeId> = graph
        .node_ids()
        .filter(|node| in_degree[node.index()] == 0)
        .collect();
    let mut result = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        result.push(node);
        for succ in graph.successors(node) {
            let degree = &mut in_degree[succ.index()];
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                queue.push_back(succ);
            }
        }
    }

    (result.len() == graph.node_count()).then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeStore;

    fn store_with(nodes: &[char], links: &[(char, char)]) -> NodeStore<char> {
        let mut store = NodeStore::new();
        for &node in nodes {
            store.add_node(node);
        }
        for &(from, to) in links {
            let from = store.add_node(from);
            let to = store.add_node(to);
            store.link(from, to);
        }
        store
    }

    fn names(store: &NodeStore<char>, ids: &[NodeId]) -> String {
        ids.iter().filter_map(|&id| store.node(id).copied()).collect()
    }

    #[test]
    fn test_topological_sort_with_back_edge() {
        let store = store_with(
            &['a', 'b', 'c', 'd'],
            &[('a', 'b'), ('a', 'c'), ('b', 'a'), ('b', 'd')],
        );
        assert_eq!(names(&store, &topological_sort(&store)), "acbd");
    }

    #[test]
    fn test_topological_sort_forest() {
        let store = store_with(
            &['a', 'b', 'c', 'd', 'e', 'f', 'g', 't', 'm'],
            &[
                ('a', 'b'),
                ('a', 'c'),
                ('a', 'd'),
                ('b', 'f'),
                ('b', 'g'),
                ('c', 'g'),
                ('e', 't'),
                ('t', 'm'),
            ],
        );
        assert_eq!(names(&store, &topological_sort(&store)), "etmadcbgf");
    }

    #[test]
    fn test_topological_sort_respects_edges() {
        let links = [('d', 'a'), ('a', 'c'), ('b', 'c'), ('d', 'b')];
        let store = store_with(&['a', 'b', 'c', 'd'], &links);
        let order = topological_sort(&store);
        let position = |id: NodeId| order.iter().position(|&n| n == id).unwrap();
        for (from, to) in links {
            let from = store.id_of(&from).unwrap();
            let to = store.id_of(&to).unwrap();
            assert!(position(from) < position(to));
        }
    }

    #[test]
    fn test_topological_sort_cyclic_is_permissive() {
        let store = store_with(&['a', 'b', 'c'], &[('a', 'b'), ('b', 'c'), ('c', 'a')]);
        assert_eq!(topological_sort(&store).len(), 3);
    }

    #[test]
    fn test_checked_topological_sort_dag() {
        let store = store_with(
            &['a', 'b', 'c', 'd'],
            &[('a', 'b'), ('a', 'c'), ('b', 'd'), ('c', 'd')],
        );
        let order = checked_topological_sort(&store).unwrap();
        assert_eq!(names(&store, &order), "abcd");
    }

    #[test]
    fn test_checked_topological_sort_cycle() {
        let store = store_with(&['a', 'b', 'c'], &[('a', 'b'), ('b', 'c'), ('c', 'b')]);
        assert!(checked_topological_sort(&store).is_none());
    }

    #[test]
    fn test_checked_topological_sort_self_loop() {
        let store = store_with(&['a'], &[('a', 'a')]);
        assert!(checked_topological_sort(&store).is_none());
    }

    #[test]
    fn test_checked_topological_sort_empty() {
        let store: NodeStore<char> = NodeStore::new();
        assert_eq!(checked_topological_sort(&store), Some(Vec::new()));
    }
}
