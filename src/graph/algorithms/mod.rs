//! Graph algorithms over node ids.
//!
//! Everything here is generic over the traits in [`crate::graph`]: [`Successors`] for the
//! structural algorithms, [`Predecessors`] for Kahn's ordering and [`WeightedSuccessors`] for
//! shortest paths. Inputs and outputs are [`NodeId`]s; the methods on
//! [`Graph`](crate::graph::Graph) translate them back into node values.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`preorder_dfs`] - Depth-first pre-order over the whole graph
//! - [`postorder_dfs`] - Depth-first post-order over the whole graph
//! - [`bfs`] - Breadth-first discovery order
//! - [`lexicographic_bfs`] - Lexicographic breadth-first order
//!
//! ## Connectivity
//!
//! - [`strongly_connected_components`] - Iterative Tarjan
//! - [`is_cyclic`] - Cycle detection
//! - [`topological_sort`] - Reverse post-order, unchecked
//! - [`checked_topological_sort`] - Kahn's algorithm, `None` on cycles
//! - [`simple_cycles`] - Johnson's elementary cycle enumeration
//!
//! ## Shortest Paths
//!
//! - [`dijkstra`] - Non-negative weights
//! - [`bellman_ford`] - Arbitrary weights, negative cycle detection
//! - [`astar`] - Point-to-point with a caller heuristic
//!
//! ## Undirected Properties
//!
//! - [`is_clique`], [`is_chordal`], [`is_bipartite`]
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | General traversal |
//! | SCC | O(V + E) | Cycle detection, condensation |
//! | Johnson | O((V + E)(C + 1)) | Listing every cycle |
//! | Dijkstra | O((V + E) log V) | Non-negative shortest paths |
//! | Bellman-Ford | O(V E) | Negative weights |
//!
//! # Examples
//!
//! ```rust
//! use graphcore::graph::{algorithms, NodeStore};
//!
//! let mut store = NodeStore::new();
//! let a = store.add_node("a");
//! let b = store.add_node("b");
//! let c = store.add_node("c");
//! store.link(a, b);
//! store.link(b, c);
//!
//! assert_eq!(algorithms::preorder_dfs(&store).collect::<Vec<_>>(), vec![a, b, c]);
//! assert!(!algorithms::is_cyclic(&store));
//!
//! store.link(c, a);
//! assert_eq!(algorithms::simple_cycles(&store), vec![vec![a, b, c]]);
//! ```
//!
//! [`Successors`]: crate::graph::Successors
//! [`Predecessors`]: crate::graph::Predecessors
//! [`WeightedSuccessors`]: crate::graph::WeightedSuccessors
//! [`NodeId`]: crate::graph::NodeId

mod cycles;
mod properties;
mod scc;
mod shortest_path;
mod topological;
mod traversal;

pub use cycles::{is_cyclic, simple_cycles};
pub use properties::{is_bipartite, is_chordal, is_clique};
pub use scc::strongly_connected_components;
pub use shortest_path::{astar, bellman_ford, dijkstra, ShortestPathTree};
pub use topological::{checked_topological_sort, topological_sort};
pub use traversal::{bfs, lexicographic_bfs, postorder_dfs, preorder_dfs, Bfs, PreorderDfs};
