// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graphcore
//!
//! Generic in-memory graphs with the classic analysis algorithms on top. Callers choose the node
//! type and the edge payload; `graphcore` keeps the adjacency consistent under insertion and
//! removal and runs traversal, connectivity, cycle enumeration and shortest-path algorithms over
//! it.
//!
//! ## Features
//!
//! - **Simple and multi graphs** - one edge per ordered pair, or parallel edges with handles
//! - **Directed and undirected** - undirected edges are mirrored atomically
//! - **Weighted variants** - signed integer weights with Dijkstra, Bellman-Ford and A*
//! - **Iterative algorithms** - Tarjan SCC, DFS and Johnson's cycle search use explicit stacks
//! - **Deterministic output** - insertion-ordered nodes and neighbors drive every tie-break
//!
//! ## Quick Start
//!
//! ```rust
//! use graphcore::prelude::*;
//!
//! let mut graph: DirectedGraph<u32> = DirectedGraph::new();
//! graph.add_nodes([0, 1, 2]);
//! graph.add_edges([(0, 1, ()), (0, 2, ()), (1, 2, ()), (2, 0, ()), (2, 1, ())])?;
//!
//! assert!(graph.is_cyclic());
//! assert_eq!(
//!     graph.simple_cycles(),
//!     vec![vec![&0, &1, &2], vec![&0, &2], vec![&1, &2]]
//! );
//! # Ok::<(), graphcore::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph types, edge layers and the index-level traits
//! - [`graph::algorithms`] - Algorithms over [`graph::NodeId`]s, usable with any
//!   [`graph::Successors`] implementor
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`Result`]. Validation happens before mutation, so a failed
//! call leaves the graph untouched.
//!
//! ## Logging
//!
//! Cascading mutations and algorithm summaries are reported through [`tracing`] at `debug` and
//! `trace` level. The library installs no subscriber.

mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use graphcore::prelude::*;
///
/// let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
/// graph.add_nodes(["a", "b"]);
/// graph.add_edge(&"a", &"b", ())?;
/// assert!(graph.is_complete());
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

pub mod graph;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `graphcore` Error type
///
/// The single error type of the crate. Every kind carries a rendering of the node, edge or
/// weight that caused it.
///
/// # Examples
///
/// ```rust
/// use graphcore::{DirectedWeightedGraph, Error};
///
/// let mut graph: DirectedWeightedGraph<char> = DirectedWeightedGraph::new();
/// graph.add_nodes(['a', 'b']);
/// graph.add_edge(&'a', &'b', -1, ())?;
///
/// match graph.dijkstra(&'a') {
///     Err(Error::NegativeWeightNotSupported(weight)) => assert_eq!(weight, -1),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), Error>(())
/// ```
pub use error::Error;

pub use graph::{
    DirectedGraph, DirectedMultiGraph, DirectedWeightedGraph, DirectedWeightedMultiGraph, EdgeId,
    Graph, NodeId, ShortestPaths, UndirectedGraph, UndirectedWeightedGraph, Weight,
};
