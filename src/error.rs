use thiserror::Error;

use crate::graph::Weight;

macro_rules! node_not_found {
    ($node:expr) => {
        crate::Error::NodeNotFound(format!("{:?}", $node))
    };
}

macro_rules! edge_not_found {
    ($edge:expr) => {
        crate::Error::EdgeNotFound(format!("{:?}", $edge))
    };
}

pub(crate) use edge_not_found;
pub(crate) use node_not_found;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure is raised before the graph is mutated, so an `Err` always leaves the graph in
/// the state it had before the call. The library performs no recovery of its own.
///
/// # Error Categories
///
/// ## Structural Errors
/// - [`Error::NodeNotFound`] - An operation referenced a node that is not in the graph
/// - [`Error::EdgeNotFound`] - A query referenced an edge pair or handle that does not exist
/// - [`Error::EdgeAlreadyExists`] - A simple graph already has an edge for the ordered pair
/// - [`Error::SelfEdgeNotAllowed`] - A simple graph rejected an edge from a node to itself
///
/// ## Algorithm Errors
/// - [`Error::NegativeWeightNotSupported`] - Dijkstra was run on a graph with a negative weight
/// - [`Error::NegativeCycleDetected`] - Bellman-Ford reached a negative-weight cycle
///
/// # Examples
///
/// ```rust
/// use graphcore::{DirectedGraph, Error};
///
/// let mut graph: DirectedGraph<&str> = DirectedGraph::new();
/// graph.add_nodes(["a", "b"]);
/// graph.add_edge(&"a", &"b", ())?;
///
/// match graph.add_edge(&"a", &"b", ()) {
///     Err(Error::EdgeAlreadyExists(edge)) => println!("duplicate edge {edge}"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// # Ok::<(), graphcore::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The referenced node is not part of the graph.
    ///
    /// The payload is the `Debug` rendering of the node value (or of the raw
    /// [`NodeId`](crate::graph::NodeId) for index-level algorithm calls).
    #[error("Node {0} does not exist in the graph")]
    NodeNotFound(String),

    /// The referenced edge does not exist.
    ///
    /// For simple graphs the payload renders the `(source, target)` pair, for multigraphs it
    /// renders the edge handle. Handles from a cleared or a different graph land here too.
    #[error("Edge {0} does not exist in the graph")]
    EdgeNotFound(String),

    /// A simple graph already holds an edge for this ordered pair.
    #[error("Edge {0} already exists in the graph")]
    EdgeAlreadyExists(String),

    /// A simple graph does not accept an edge from a node to itself.
    #[error("Self-edge on {0} is not allowed in a simple graph")]
    SelfEdgeNotAllowed(String),

    /// Dijkstra's algorithm found an edge with a negative weight.
    #[error("Dijkstra does not support negative edge weights (found weight {0})")]
    NegativeWeightNotSupported(Weight),

    /// Bellman-Ford could still relax an edge after `|V|` passes.
    ///
    /// The payload renders the source node the search was started from.
    #[error("Negative-weight cycle reachable from {0}")]
    NegativeCycleDetected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = node_not_found!("a");
        assert_eq!(err.to_string(), "Node \"a\" does not exist in the graph");

        let err = edge_not_found!((1, 2));
        assert_eq!(err.to_string(), "Edge (1, 2) does not exist in the graph");

        let err = Error::NegativeWeightNotSupported(-3);
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(node_not_found!(7), Error::NodeNotFound("7".to_string()));
        assert_ne!(
            Error::EdgeAlreadyExists("x".to_string()),
            Error::SelfEdgeNotAllowed("x".to_string())
        );
    }
}
