//! Cycle detection and enumeration for directed graphs.
//!
//! - [`is_cyclic`] answers whether any cycle exists, from the strongly connected components.
//! - [`simple_cycles`] lists every elementary cycle with Johnson's algorithm.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::graph::{
    algorithms::strongly_connected_components, GraphBase, NodeId, NodeStore, Successors,
};

/// Returns `true` if the graph contains a cycle.
///
/// A graph is cyclic when a strongly connected component has more than one node, or when a
/// single-node component has an edge to itself.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
pub fn is_cyclic<G: Successors>(graph: &G) -> bool {
    strongly_connected_components(graph)
        .iter()
        .any(|component| is_cyclic_component(graph, component))
}

fn is_cyclic_component<G: Successors>(graph: &G, component: &[NodeId]) -> bool {
    match component {
        [] => false,
        [single] => graph.successors(*single).any(|succ| succ == *single),
        _ => true,
    }
}

/// Lists every elementary cycle of a directed graph (Johnson's algorithm).
///
/// The search works on a pruned copy of the graph, one strongly connected component at a time.
/// For each component it starts from the earliest-inserted node, runs an explicit-stack
/// depth-first search that emits the current path whenever it returns to that node, then deletes
/// the start node and splits the remainder into new components.
///
/// Each cycle is reported once, as a path starting at its earliest-processed node and listed in
/// edge order, so `[a, b, c]` stands for `a -> b -> c -> a`. Self-edges yield single-node cycles.
///
/// # Complexity
///
/// - Time: O((V + E) * (C + 1)) for C cycles
/// - Space: O(V + E) plus the output
///
/// The number of cycles can be exponential in the size of the graph; the enumeration has no
/// bound or cancellation.
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{algorithms::simple_cycles, NodeStore};
///
/// let mut store = NodeStore::new();
/// let ids: Vec<_> = (0..3).map(|n| store.add_node(n)).collect();
/// for (from, to) in [(0, 1), (0, 2), (1, 2), (2, 0), (2, 1)] {
///     store.link(ids[from], ids[to]);
/// }
///
/// let cycles = simple_cycles(&store);
/// assert_eq!(
///     cycles,
///     vec![vec![ids[0], ids[1], ids[2]], vec![ids[0], ids[2]], vec![ids[1], ids[2]]]
/// );
/// ```
pub fn simple_cycles<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let mut working: NodeStore<NodeId> = NodeStore::with_capacity(graph.node_count());
    for node in graph.node_ids() {
        working.add_node(node);
    }
    for node in graph.node_ids() {
        let from = working.add_node(node);
        for succ in graph.successors(node) {
            let to = working.add_node(succ);
            working.link(from, to);
        }
    }

    let mut pending = cyclic_components(&working);
    let mut seen: FxHashSet<Vec<NodeId>> = FxHashSet::default();
    let mut cycles = Vec::new();

    while let Some(mut component) = pending.pop() {
        let Some(start) = component.node_ids().next() else {
            continue;
        };

        for path in search_component(&component, start) {
            let cycle: Vec<NodeId> = path
                .iter()
                .filter_map(|&id| component.node(id).copied())
                .collect();
            if seen.insert(cycle.clone()) {
                trace!(length = cycle.len(), "found elementary cycle");
                cycles.push(cycle);
            }
        }

        component.remove_node(start);
        pending.extend(cyclic_components(&component));
    }

    debug!(cycles = cycles.len(), "enumerated elementary cycles");
    cycles
}

/// Splits a working copy into induced copies of its cyclic components.
///
/// Members keep their relative insertion order, so the first live id of each copy is the
/// earliest-inserted node of the component.
fn cyclic_components(working: &NodeStore<NodeId>) -> Vec<NodeStore<NodeId>> {
    strongly_connected_components(working)
        .into_iter()
        .filter(|component| is_cyclic_component(working, component))
        .map(|mut component| {
            component.sort_unstable();
            working.induced(&component).0
        })
        .collect()
}

/// Johnson's circuit search from `start` inside one strongly connected component.
///
/// Returns every path (in component ids) that closes back to `start`.
fn search_component(component: &NodeStore<NodeId>, start: NodeId) -> Vec<Vec<NodeId>> {
    let bound = component.node_bound();
    let mut blocked = vec![false; bound];
    let mut closed = vec![false; bound];
    let mut waiting: Vec<Vec<NodeId>> = vec![Vec::new(); bound];
    let mut found = Vec::new();

    // Reversed so that popping explores successors in adjacency order
    let frontier =
        |node: NodeId| -> Vec<NodeId> { component.outgoing(node).iter().rev().copied().collect() };

    let mut path = vec![start];
    let mut stack = vec![(start, frontier(start))];
    blocked[start.index()] = true;

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let node = frame.0;

        if let Some(next) = frame.1.pop() {
            if next == start {
                found.push(path.clone());
                for &member in &path {
                    closed[member.index()] = true;
                }
            } else if !blocked[next.index()] {
                path.push(next);
                stack.push((next, frontier(next)));
                closed[next.index()] = false;
                blocked[next.index()] = true;
            }
            continue;
        }

        if closed[node.index()] {
            unblock(node, &mut blocked, &mut waiting);
        } else {
            for &succ in component.outgoing(node) {
                let dependents = &mut waiting[succ.index()];
                if !dependents.contains(&node) {
                    dependents.push(node);
                }
            }
        }
        stack.pop();
        path.pop();
    }

    found
}

/// Unblocks `node` and, transitively, every node waiting on an unblocked node.
fn unblock(node: NodeId, blocked: &mut [bool], waiting: &mut [Vec<NodeId>]) {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if blocked[current.index()] {
            blocked[current.index()] = false;
            stack.append(&mut waiting[current.index()]);
        }
    }
}
