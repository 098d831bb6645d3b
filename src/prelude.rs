//! # graphcore Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graphcore library. Import this module to get the graph aliases, the index-level
//! traits and the error type in one line.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graphcore operations
pub use crate::Error;

/// The result type used throughout graphcore
pub use crate::Result;

/// Signed edge weight
pub use crate::Weight;

// ================================================================================================
// Graph Variants
// ================================================================================================

/// The graph type and its direction markers
pub use crate::graph::{Directed, Graph, Undirected};

/// Aliases for the supported combinations of edge layer and direction
pub use crate::graph::{
    DirectedGraph, DirectedMultiGraph, DirectedWeightedGraph, DirectedWeightedMultiGraph,
    UndirectedGraph, UndirectedWeightedGraph,
};

// ================================================================================================
// Identifiers and Results
// ================================================================================================

/// Node and edge identifiers
pub use crate::graph::{EdgeId, NodeId};

/// Single-source shortest-path results
pub use crate::graph::{algorithms::ShortestPathTree, ShortestPaths};

// ================================================================================================
// Traits
// ================================================================================================

/// Index-level traits the algorithms are written against
pub use crate::graph::{GraphBase, Predecessors, Successors, WeightedSuccessors};

/// Node value bound
pub use crate::graph::GraphNode;
