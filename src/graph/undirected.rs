//! Undirected Overlay: mirrored edge mutation and structural predicates.
//!
//! An undirected graph stores each logical edge as two directed records, `(v, u)` and `(u, v)`,
//! holding clones of the same payload and the same weight. Both are inserted after a single
//! validation, and [`remove_edge`](Graph::remove_edge) drops both or neither, so the adjacency
//! stays symmetric. Every directed algorithm therefore runs unchanged over the mirrored
//! adjacency.

use crate::{
    graph::{algorithms, EdgeLayer, Graph, GraphNode, SimpleEdges, Undirected, Weight},
    Result,
};

impl<N: GraphNode, E: Clone> Graph<N, SimpleEdges<E, ()>, Undirected> {
    /// Connects `v` and `u` in both directions.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent
    /// - [`Error::SelfEdgeNotAllowed`](crate::Error::SelfEdgeNotAllowed) if `v == u`
    /// - [`Error::EdgeAlreadyExists`](crate::Error::EdgeAlreadyExists) if the nodes are already
    ///   connected, in either orientation
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graphcore::UndirectedGraph;
    ///
    /// let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
    /// graph.add_nodes([1, 2]);
    /// graph.add_edge(&1, &2, ())?;
    ///
    /// assert!(graph.has_edge(&2, &1)?);
    /// assert_eq!(graph.size(), 1);
    /// assert!(graph.add_edge(&2, &1, ()).is_err());
    /// # Ok::<(), graphcore::Error>(())
    /// ```
    pub fn add_edge(&mut self, v: &N, u: &N, data: E) -> Result<()> {
        let (from, to) = self.check_new_edge(v, u)?;
        self.insert_record(from, to, data.clone(), ());
        self.insert_record(to, from, data, ());
        Ok(())
    }

    /// Adds several undirected edges; nothing is inserted if any edge is invalid.
    ///
    /// `(a, b)` and `(b, a)` in the same batch count as a duplicate.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge).
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, E)>) -> Result<()> {
        let batch: Vec<_> = edges.into_iter().collect();
        let checked = self.check_new_edges(batch.iter().map(|(v, u, _)| (v, u)))?;
        for ((from, to), (_, _, data)) in checked.into_iter().zip(batch) {
            self.insert_record(from, to, data.clone(), ());
            self.insert_record(to, from, data, ());
        }
        Ok(())
    }
}

impl<N: GraphNode, E: Clone> Graph<N, SimpleEdges<E, Weight>, Undirected> {
    /// Connects `v` and `u` in both directions with the given weight and payload.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if either node is absent
    /// - [`Error::SelfEdgeNotAllowed`](crate::Error::SelfEdgeNotAllowed) if `v == u`
    /// - [`Error::EdgeAlreadyExists`](crate::Error::EdgeAlreadyExists) if the nodes are already
    ///   connected
    pub fn add_edge(&mut self, v: &N, u: &N, weight: Weight, data: E) -> Result<()> {
        let (from, to) = self.check_new_edge(v, u)?;
        self.insert_record(from, to, data.clone(), weight);
        self.insert_record(to, from, data, weight);
        Ok(())
    }

    /// Adds several weighted undirected edges; nothing is inserted if any edge is invalid.
    ///
    /// # Errors
    ///
    /// Same as [`add_edge`](Self::add_edge).
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N, Weight, E)>) -> Result<()> {
        let batch: Vec<_> = edges.into_iter().collect();
        let checked = self.check_new_edges(batch.iter().map(|(v, u, _, _)| (v, u)))?;
        for ((from, to), (_, _, weight, data)) in checked.into_iter().zip(batch) {
            self.insert_record(from, to, data.clone(), weight);
            self.insert_record(to, from, data, weight);
        }
        Ok(())
    }
}

impl<N: GraphNode, L: EdgeLayer> Graph<N, L, Undirected> {
    /// Returns `true` if every two distinct nodes are connected.
    ///
    /// Graphs with fewer than two nodes are complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let order = self.order();
        self.size() == order * order.saturating_sub(1) / 2
    }

    /// Returns `true` if every two distinct nodes of `nodes` are connected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) if any node is absent.
    pub fn is_clique(&self, nodes: &[N]) -> Result<bool> {
        let members = nodes
            .iter()
            .map(|node| self.store.require(node))
            .collect::<Result<Vec<_>>>()?;
        Ok(algorithms::is_clique(self, &members))
    }

    /// Returns `true` if every cycle of four or more nodes has a chord.
    /// See [`algorithms::is_chordal`].
    #[must_use]
    pub fn is_chordal(&self) -> bool {
        algorithms::is_chordal(self)
    }

    /// Returns `true` if the nodes split into two sides with every edge crossing between them.
    /// See [`algorithms::is_bipartite`].
    #[must_use]
    pub fn is_bipartite(&self) -> bool {
        algorithms::is_bipartite(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, UndirectedGraph, UndirectedWeightedGraph};

    fn complete(count: u32) -> UndirectedGraph<u32> {
        let mut graph = UndirectedGraph::new();
        graph.add_nodes(0..count);
        for a in 0..count {
            for b in a + 1..count {
                graph.add_edge(&a, &b, ()).unwrap();
            }
        }
        graph
    }

    #[test]
    fn test_edges_are_mirrored() {
        let mut graph: UndirectedGraph<char, &str> = UndirectedGraph::new();
        graph.add_nodes(['a', 'b']);
        graph.add_edge(&'a', &'b', "ab").unwrap();

        assert_eq!(graph.edge_data(&'b', &'a'), Ok(&"ab"));
        assert_eq!(graph.neighbors(&'b').unwrap().collect::<Vec<_>>(), vec![&'a']);
        assert_eq!(graph.size(), 1);
        assert!(matches!(
            graph.add_edge(&'b', &'a', "ba"),
            Err(Error::EdgeAlreadyExists(_))
        ));
    }

    #[test]
    fn test_remove_edge_removes_both_directions() {
        let mut graph: UndirectedGraph<char, &str> = UndirectedGraph::new();
        graph.add_nodes(['a', 'b', 'c']);
        graph.add_edges([('a', 'b', "ab"), ('b', 'c', "bc")]).unwrap();

        assert_eq!(graph.remove_edge(&'b', &'a'), Ok("ab"));
        assert!(!graph.has_edge(&'a', &'b').unwrap());
        assert!(!graph.has_edge(&'b', &'a').unwrap());
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn test_add_edges_rejects_mirrored_duplicate() {
        let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
        graph.add_nodes(['a', 'b']);
        let result = graph.add_edges([('a', 'b', ()), ('b', 'a', ())]);
        assert!(matches!(result, Err(Error::EdgeAlreadyExists(_))));
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_remove_node_drops_both_directions() {
        let mut graph = complete(3);
        graph.remove_node(&1).unwrap();
        assert_eq!(graph.size(), 1);
        assert!(graph.has_edge(&2, &0).unwrap());
    }

    #[test]
    fn test_is_complete() {
        assert!(complete(4).is_complete());
        assert!(complete(1).is_complete());
        assert!(UndirectedGraph::<u8>::new().is_complete());

        let mut graph = complete(4);
        graph.remove_edge(&0, &3).unwrap();
        assert!(!graph.is_complete());
    }

    #[test]
    fn test_is_clique() {
        let mut graph = complete(4);
        graph.add_node(9);
        graph.add_edge(&9, &0, ()).unwrap();

        assert_eq!(graph.is_clique(&[0, 1, 2, 3]), Ok(true));
        assert_eq!(graph.is_clique(&[0, 9]), Ok(true));
        assert_eq!(graph.is_clique(&[1, 9]), Ok(false));
        assert!(matches!(graph.is_clique(&[0, 42]), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_is_chordal() {
        let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
        graph.add_nodes(['a', 'b', 'c', 'd']);
        graph
            .add_edges([('a', 'b', ()), ('b', 'c', ()), ('c', 'd', ()), ('d', 'a', ())])
            .unwrap();
        assert!(!graph.is_chordal());

        graph.add_edge(&'a', &'c', ()).unwrap();
        assert!(graph.is_chordal());
        assert!(complete(5).is_chordal());
    }

    #[test]
    fn test_is_bipartite() {
        let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
        graph.add_nodes([1, 2, 3, 4, 5, 6]);
        graph
            .add_edges([(1, 4, ()), (1, 5, ()), (2, 5, ()), (2, 6, ()), (3, 6, ())])
            .unwrap();
        assert!(graph.is_bipartite());

        graph.add_edge(&4, &5, ()).unwrap();
        assert!(!graph.is_bipartite());
        assert!(!complete(3).is_bipartite());
    }

    #[test]
    fn test_weighted_undirected_paths() {
        let mut graph: UndirectedWeightedGraph<char> = UndirectedWeightedGraph::new();
        graph.add_nodes(['a', 'b', 'c', 'd']);
        graph
            .add_edges([('a', 'b', 2, ()), ('b', 'c', 2, ()), ('a', 'c', 5, ())])
            .unwrap();

        assert_eq!(graph.weight(&'c', &'a'), Ok(5));
        assert_eq!(
            graph.dijkstra_path(&'c', &'a').unwrap(),
            vec![(&'c', &'b'), (&'b', &'a')]
        );
        assert_eq!(graph.dijkstra(&'a').unwrap().distance(&'d'), None);
        assert!(graph.dijkstra_path(&'a', &'d').unwrap().is_empty());
    }
}
