//! Graph traversal algorithms.
//!
//! All traversals cover the whole graph: every undiscovered node is used as a root, in node
//! insertion order, once the previous root's reach is exhausted.
//!
//! # Algorithms
//!
//! - [`preorder_dfs`] - Iterative depth-first search, nodes yielded on first discovery
//! - [`postorder_dfs`] - Depth-first search, nodes emitted after all their descendants
//! - [`bfs`] - Breadth-first search, yielding nodes as they are discovered through an edge
//! - [`lexicographic_bfs`] - Lexicographic breadth-first ordering by partition refinement
//!
//! # Iteration vs Collection
//!
//! [`preorder_dfs`] and [`bfs`] return lazy iterators that borrow the graph, so the graph cannot
//! be mutated while one is being consumed. Each call starts from fresh scratch state.
//! [`postorder_dfs`] and [`lexicographic_bfs`] need the full traversal anyway and return vectors.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use crate::graph::{NodeId, Successors};

/// Depth-first pre-order iterator over every node of a graph.
///
/// Nodes are marked discovered when they are popped from the explicit stack, so the order is a
/// true depth-first pre-order. Successors are explored in adjacency order.
pub struct PreorderDfs<'g, G: Successors> {
    graph: &'g G,
    roots: std::vec::IntoIter<NodeId>,
    stack: Vec<NodeId>,
    discovered: Vec<bool>,
}

impl<G: Successors> Iterator for PreorderDfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while let Some(node) = self.stack.pop() {
                if self.discovered[node.index()] {
                    continue;
                }
                self.discovered[node.index()] = true;

                // Reversed so the first successor ends on top of the stack
                let start = self.stack.len();
                let discovered = &self.discovered;
                self.stack.extend(
                    self.graph
                        .successors(node)
                        .filter(|succ| !discovered[succ.index()]),
                );
                self.stack[start..].reverse();

                return Some(node);
            }

            let root = self.roots.next()?;
            if !self.discovered[root.index()] {
                self.stack.push(root);
            }
        }
    }
}

/// Returns a depth-first pre-order iterator over every node.
///
/// Each node appears exactly once.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E) for the discovered set and the stack
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{algorithms::preorder_dfs, NodeStore};
///
/// let mut store = NodeStore::new();
/// let a = store.add_node('a');
/// let b = store.add_node('b');
/// let c = store.add_node('c');
/// store.link(a, c);
/// store.link(c, b);
///
/// assert_eq!(preorder_dfs(&store).collect::<Vec<_>>(), vec![a, c, b]);
/// ```
pub fn preorder_dfs<G: Successors>(graph: &G) -> PreorderDfs<'_, G> {
    PreorderDfs {
        graph,
        roots: graph.node_ids().collect::<Vec<_>>().into_iter(),
        stack: Vec::new(),
        discovered: vec![false; graph.node_bound()],
    }
}

/// Returns every node in depth-first post-order.
///
/// A node is emitted after all of its descendants that were still undiscovered when the node
/// was entered. The reverse of this order is a topological order on acyclic graphs.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn postorder_dfs<G: Successors>(graph: &G) -> Vec<NodeId> {
    #[derive(Clone, Copy)]
    enum State {
        Enter,
        Exit,
    }

    let mut visited = vec![false; graph.node_bound()];
    let mut result = Vec::with_capacity(graph.node_count());
    let mut stack = Vec::new();

    for root in graph.node_ids() {
        if visited[root.index()] {
            continue;
        }
        stack.push((root, State::Enter));

        while let Some((node, state)) = stack.pop() {
            match state {
                State::Enter => {
                    if visited[node.index()] {
                        continue;
                    }
                    visited[node.index()] = true;
                    stack.push((node, State::Exit));

                    let successors: Vec<NodeId> = graph
                        .successors(node)
                        .filter(|succ| !visited[succ.index()])
                        .collect();
                    for &succ in successors.iter().rev() {
                        stack.push((succ, State::Enter));
                    }
                }
                State::Exit => result.push(node),
            }
        }
    }

    result
}

/// Breadth-first iterator over the nodes reachable through at least one edge.
///
/// See [`bfs`] for the exact visiting rules.
pub struct Bfs<'g, G: Successors> {
    graph: &'g G,
    roots: std::vec::IntoIter<NodeId>,
    queue: VecDeque<NodeId>,
    ready: VecDeque<NodeId>,
    discovered: Vec<bool>,
}

impl<G: Successors> Iterator for Bfs<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.ready.pop_front() {
                return Some(node);
            }

            if let Some(current) = self.queue.pop_front() {
                for succ in self.graph.successors(current) {
                    if !self.discovered[succ.index()] {
                        self.discovered[succ.index()] = true;
                        self.queue.push_back(succ);
                        self.ready.push_back(succ);
                    }
                }
                continue;
            }

            let root = self.roots.next()?;
            if !self.discovered[root.index()] {
                self.queue.push_back(root);
            }
        }
    }
}

/// Returns a breadth-first iterator, seeded from every undiscovered node in insertion order.
///
/// A node is yielded once, at the moment it is first discovered through an outgoing edge of an
/// already expanded node. Roots themselves are expanded but not yielded, so a node without
/// incoming edges never appears (unless a cycle leads back to it). Combine with the node list
/// when every node is needed.
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{algorithms::bfs, NodeStore};
///
/// let mut store = NodeStore::new();
/// let a = store.add_node('a');
/// let b = store.add_node('b');
/// let c = store.add_node('c');
/// store.link(a, b);
/// store.link(a, c);
///
/// assert_eq!(bfs(&store).collect::<Vec<_>>(), vec![b, c]);
/// ```
pub fn bfs<G: Successors>(graph: &G) -> Bfs<'_, G> {
    Bfs {
        graph,
        roots: graph.node_ids().collect::<Vec<_>>().into_iter(),
        queue: VecDeque::new(),
        ready: VecDeque::new(),
        discovered: vec![false; graph.node_bound()],
    }
}

struct Group {
    id: usize,
    members: Vec<NodeId>,
}

/// Returns the lexicographic breadth-first order of every node.
///
/// Nodes start out in a single group in insertion order. The first node of the first group is
/// repeatedly removed and emitted; each of its still-grouped neighbors then moves out of its
/// group into a new group placed immediately before it. Neighbors leaving the same group for
/// the same pivot share one new group.
///
/// On an undirected graph the reverse of this order is a perfect elimination ordering exactly
/// when the graph is chordal.
///
/// # Complexity
///
/// - Time: O(V * (V + E)) with the linear group scans used here
/// - Space: O(V)
pub fn lexicographic_bfs<G: Successors>(graph: &G) -> Vec<NodeId> {
    let mut member_of: Vec<Option<usize>> = vec![None; graph.node_bound()];
    let initial: Vec<NodeId> = graph.node_ids().collect();
    for node in &initial {
        member_of[node.index()] = Some(0);
    }

    let mut groups = Vec::new();
    if !initial.is_empty() {
        groups.push(Group {
            id: 0,
            members: initial,
        });
    }
    let mut next_id = 1;
    let mut order = Vec::with_capacity(graph.node_count());

    while let Some(first) = groups.first_mut() {
        let pivot = first.members.remove(0);
        if first.members.is_empty() {
            groups.remove(0);
        }
        member_of[pivot.index()] = None;
        order.push(pivot);

        let mut split: FxHashMap<usize, usize> = FxHashMap::default();
        for neighbor in graph.successors(pivot) {
            let Some(old_id) = member_of[neighbor.index()] else {
                continue;
            };
            let Some(old_pos) = groups.iter().position(|group| group.id == old_id) else {
                continue;
            };

            let new_id = match split.get(&old_id) {
                Some(&id) => id,
                None => {
                    let id = next_id;
                    next_id += 1;
                    groups.insert(
                        old_pos,
                        Group {
                            id,
                            members: Vec::new(),
                        },
                    );
                    split.insert(old_id, id);
                    id
                }
            };

            let Some(old_pos) = groups.iter().position(|group| group.id == old_id) else {
                continue;
            };
            groups[old_pos].members.retain(|&member| member != neighbor);
            if groups[old_pos].members.is_empty() {
                groups.remove(old_pos);
            }
            if let Some(new_group) = groups.iter_mut().find(|group| group.id == new_id) {
                new_group.members.push(neighbor);
                member_of[neighbor.index()] = Some(new_id);
            }
        }
    }

    order
}
