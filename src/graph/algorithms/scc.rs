//! Strongly Connected Components (SCC) using an iterative Tarjan search.
//!
//! A strongly connected component is a maximal set of nodes such that there is a path from every
//! node to every other node in the set. The search keeps its own work stack instead of
//! recursing, so arbitrarily deep graphs cannot overflow the call stack.
//!
//! # Use Cases
//!
//! - **Cycle detection**: any component with more than one node, or with a self-edge, is cyclic
//! - **Cycle enumeration**: Johnson's algorithm searches one component at a time
//! - **Dependency analysis**: detecting circular dependencies

use tracing::debug;

use crate::graph::{NodeId, Successors};

/// Computes the strongly connected components of a directed graph.
///
/// Every node receives an increasing preorder number on first visit. Once all successors of a
/// node are finished, its low-link becomes the smallest preorder number reachable through its
/// unassigned successors. A node whose low-link equals its own number closes a component made of
/// itself plus every waiting node with a larger number.
///
/// # Returns
///
/// One vector per component; each lists its closing node first. Components come in the order
/// they are completed, which is a **reverse topological order** of the condensation: if an edge
/// leads from component A to component B, B appears before A.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust
/// use graphcore::graph::{algorithms::strongly_connected_components, NodeStore};
///
/// let mut store = NodeStore::new();
/// let a = store.add_node('a');
/// let b = store.add_node('b');
/// let c = store.add_node('c');
/// store.link(a, b);
/// store.link(b, a);
/// store.link(b, c);
///
/// let sccs = strongly_connected_components(&store);
/// assert_eq!(sccs, vec![vec![c], vec![a, b]]);
/// ```
pub fn strongly_connected_components<G: Successors>(graph: &G) -> Vec<Vec<NodeId>> {
    let bound = graph.node_bound();
    let mut preorder: Vec<Option<usize>> = vec![None; bound];
    let mut lowlink = vec![0usize; bound];
    let mut assigned = vec![false; bound];
    let mut adjacency: Vec<Vec<NodeId>> = vec![Vec::new(); bound];
    let mut cursor = vec![0usize; bound];

    let mut counter = 0usize;
    let mut waiting: Vec<NodeId> = Vec::new();
    let mut work: Vec<NodeId> = Vec::new();
    let mut components = Vec::new();

    for root in graph.node_ids() {
        if assigned[root.index()] {
            continue;
        }
        work.push(root);

        while let Some(&v) = work.last() {
            let vi = v.index();
            if preorder[vi].is_none() {
                counter += 1;
                preorder[vi] = Some(counter);
                adjacency[vi] = graph.successors(v).collect();
            }

            let mut descended = false;
            while cursor[vi] < adjacency[vi].len() {
                let w = adjacency[vi][cursor[vi]];
                cursor[vi] += 1;
                if preorder[w.index()].is_none() {
                    work.push(w);
                    descended = true;
                    break;
                }
            }
            if descended {
                continue;
            }

            let Some(v_pre) = preorder[vi] else {
                continue;
            };
            let mut low = v_pre;
            for &w in &adjacency[vi] {
                if assigned[w.index()] {
                    continue;
                }
                let Some(w_pre) = preorder[w.index()] else {
                    continue;
                };
                low = low.min(if w_pre > v_pre {
                    lowlink[w.index()]
                } else {
                    w_pre
                });
            }
            lowlink[vi] = low;
            work.pop();

            if low == v_pre {
                assigned[vi] = true;
                let mut component = vec![v];
                while let Some(&top) = waiting.last() {
                    if preorder[top.index()].is_some_and(|p| p > v_pre) {
                        waiting.pop();
                        assigned[top.index()] = true;
                        component.push(top);
                    } else {
                        break;
                    }
                }
                components.push(component);
            } else {
                waiting.push(v);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        components = components.len(),
        "computed strongly connected components"
    );
    components
}
