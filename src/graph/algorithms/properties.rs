//! Structural predicates for undirected graphs.
//!
//! The functions here read adjacency through [`Successors`] only. They are meant for symmetric
//! adjacency, where every link has its mirror, which is what
//! [`UndirectedGraph`](crate::UndirectedGraph) maintains. On asymmetric input they answer for
//! the relation as stored, without symmetrizing it.

use tracing::trace;

use crate::graph::{algorithms::lexicographic_bfs, NodeId, Successors};

/// Returns `true` if every two distinct nodes of `members` are adjacent.
///
/// Repeated members are ignored. An empty or single-node set is a clique.
pub fn is_clique<G: Successors>(graph: &G, members: &[NodeId]) -> bool {
    members.iter().enumerate().all(|(i, &a)| {
        members[i + 1..]
            .iter()
            .filter(|&&b| b != a)
            .all(|&b| graph.successors(a).any(|succ| succ == b))
    })
}

/// Returns `true` if the graph is chordal: every cycle of four or more nodes has a chord.
///
/// The check takes the [`lexicographic_bfs`] order and tests whether its reverse is a perfect
/// elimination ordering. For each node `v`, let `earlier(v)` be its neighbors that come before it
/// in the LexBFS order and `p` the last of them. The ordering is perfect when, for every `v`,
/// `earlier(v)` minus `p` is contained in the neighborhood of `p`.
///
/// # Complexity
///
/// - Time: O(V * (V + E)), dominated by the ordering
/// - Space: O(V)
pub fn is_chordal<G: Successors>(graph: &G) -> bool {
    let order = lexicographic_bfs(graph);
    let mut position = vec![usize::MAX; graph.node_bound()];
    for (index, node) in order.iter().enumerate() {
        position[node.index()] = index;
    }

    for &node in &order {
        let here = position[node.index()];
        let earlier: Vec<NodeId> = graph
            .successors(node)
            .filter(|succ| *succ != node && position[succ.index()] < here)
            .collect();
        let Some(&parent) = earlier.iter().max_by_key(|succ| position[succ.index()]) else {
            continue;
        };

        for &other in &earlier {
            if other != parent && !graph.successors(parent).any(|succ| succ == other) {
                trace!(node = %node, parent = %parent, missing = %other, "not chordal");
                return false;
            }
        }
    }
    true
}

/// Returns `true` if the nodes can be two-colored so that no edge joins equal colors.
///
/// Coloring restarts in every connected component, seeded in insertion order. The empty graph is
/// bipartite; a self-edge makes a graph non-bipartite.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn is_bipartite<G: Successors>(graph: &G) -> bool {
    let mut color: Vec<Option<bool>> = vec![None; graph.node_bound()];
    let mut stack = Vec::new();

    for root in graph.node_ids() {
        if color[root.index()].is_some() {
            continue;
        }
        color[root.index()] = Some(false);
        stack.push(root);

        while let Some(node) = stack.pop() {
            let Some(side) = color[node.index()] else {
                continue;
            };
            for succ in graph.successors(node) {
                match color[succ.index()] {
                    Some(other) if other == side => return false,
                    Some(_) => {}
                    None => {
                        color[succ.index()] = Some(!side);
                        stack.push(succ);
                    }
                }
            }
        }
    }
    true
}
