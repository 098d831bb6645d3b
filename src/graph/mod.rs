//! Generic in-memory graphs and the algorithms that run over them.
//!
//! Callers bring their own node type and edge payload; the graph maintains adjacency and
//! exposes traversal, connectivity, cycle enumeration and shortest paths.
//!
//! # Architecture
//!
//! A graph is assembled from independent capabilities instead of a class hierarchy:
//!
//! - **Store**: [`NodeStore`] owns node values and the directed adjacency relation
//! - **Edge layer**: [`SimpleEdges`] (one edge per ordered pair, no self-edges) or
//!   [`MultiEdges`] (parallel and self-edges, each with an [`EdgeId`] handle); the layer's
//!   weight parameter is `()` or [`Weight`]
//! - **Direction**: [`Directed`] or [`Undirected`], the latter mirroring every edge mutation
//! - **Algorithms**: [`algorithms`], written against the [`GraphBase`], [`Successors`],
//!   [`Predecessors`] and [`WeightedSuccessors`] traits
//!
//! [`Graph<N, L, D>`](Graph) ties them together. The aliases below name the supported
//! combinations:
//!
//! | Alias | Edge layer | Direction |
//! |-------|------------|-----------|
//! | [`DirectedGraph`] | `SimpleEdges<E>` | [`Directed`] |
//! | [`DirectedMultiGraph`] | `MultiEdges<E>` | [`Directed`] |
//! | [`DirectedWeightedGraph`] | `SimpleEdges<E, Weight>` | [`Directed`] |
//! | [`DirectedWeightedMultiGraph`] | `MultiEdges<E, Weight>` | [`Directed`] |
//! | [`UndirectedGraph`] | `SimpleEdges<E>` | [`Undirected`] |
//! | [`UndirectedWeightedGraph`] | `SimpleEdges<E, Weight>` | [`Undirected`] |
//!
//! # Determinism
//!
//! Nodes iterate in insertion order and neighbors in the order they were first connected.
//! Every algorithm seeds and breaks ties from those orders, so results are reproducible.
//!
//! # Thread Safety
//!
//! Graphs are [`Send`] and [`Sync`] when their node and payload types are. There is no internal
//! locking: mutation needs `&mut`, and callers sharing a graph must serialize access themselves.
//!
//! # Usage Examples
//!
//! ```rust
//! use graphcore::DirectedWeightedGraph;
//!
//! let mut graph: DirectedWeightedGraph<char> = DirectedWeightedGraph::new();
//! graph.add_nodes(['a', 'b', 'c', 'd']);
//! graph.add_edges([
//!     ('a', 'b', 1, ()),
//!     ('b', 'c', 1, ()),
//!     ('a', 'c', 4, ()),
//!     ('c', 'd', 1, ()),
//! ])?;
//!
//! let paths = graph.dijkstra(&'a')?;
//! assert_eq!(paths.distance(&'d'), Some(3));
//! assert_eq!(
//!     graph.dijkstra_path(&'a', &'d')?,
//!     vec![(&'a', &'b'), (&'b', &'c'), (&'c', &'d')]
//! );
//! # Ok::<(), graphcore::Error>(())
//! ```

mod base;
mod direction;
mod edge;
mod layer;
mod multi;
mod node;
mod paths;
mod simple;
mod store;
mod traits;
mod undirected;

pub mod algorithms;

pub use base::Graph;
pub use direction::{Directed, Direction, Undirected};
pub use edge::EdgeId;
pub use layer::EdgeLayer;
pub use multi::{MultiEdge, MultiEdges};
pub use node::{GraphNode, NodeId};
pub use paths::ShortestPaths;
pub use simple::{SimpleEdge, SimpleEdges};
pub use store::{Detached, NodeStore};
pub use traits::{GraphBase, Predecessors, Successors, WeightedEdge, WeightedSuccessors};

/// Signed edge weight. Distances saturate instead of overflowing.
pub type Weight = i64;

/// Directed graph with at most one edge per ordered pair and no self-edges.
pub type DirectedGraph<N, E = ()> = Graph<N, SimpleEdges<E>, Directed>;

/// Directed graph allowing parallel edges and self-edges, addressed by [`EdgeId`].
pub type DirectedMultiGraph<N, E = ()> = Graph<N, MultiEdges<E>, Directed>;

/// [`DirectedGraph`] whose edges carry a [`Weight`].
pub type DirectedWeightedGraph<N, E = ()> = Graph<N, SimpleEdges<E, Weight>, Directed>;

/// [`DirectedMultiGraph`] whose edges carry a [`Weight`].
pub type DirectedWeightedMultiGraph<N, E = ()> = Graph<N, MultiEdges<E, Weight>, Directed>;

/// Undirected graph: every edge is stored in both directions.
pub type UndirectedGraph<N, E = ()> = Graph<N, SimpleEdges<E>, Undirected>;

/// [`UndirectedGraph`] whose edges carry a [`Weight`].
pub type UndirectedWeightedGraph<N, E = ()> = Graph<N, SimpleEdges<E, Weight>, Undirected>;
