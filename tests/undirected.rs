//! Undirected graph integration tests: size, degree and the structural predicates.

use graphcore::prelude::*;

fn house_with_roof() -> UndirectedGraph<char> {
    let mut graph = UndirectedGraph::new();
    graph.add_nodes(['a', 'b', 'c', 'd', 'e']);
    graph
        .add_edges([
            ('a', 'b', ()),
            ('a', 'c', ()),
            ('a', 'd', ()),
            ('b', 'c', ()),
            ('b', 'd', ()),
            ('c', 'd', ()),
            ('c', 'e', ()),
        ])
        .unwrap();
    graph
}

#[test]
fn size_counts_logical_edges() {
    let graph = house_with_roof();
    assert_eq!(graph.size(), 7);
    assert_eq!(graph.order(), 5);
}

#[test]
fn degree() {
    let graph = house_with_roof();
    let degrees: Vec<usize> = ['a', 'b', 'c', 'd', 'e']
        .iter()
        .map(|node| graph.degree(node).unwrap())
        .collect();
    assert_eq!(degrees, vec![3, 3, 4, 3, 1]);
    assert!(matches!(graph.degree(&'x'), Err(Error::NodeNotFound(_))));
}

#[test]
fn clique() {
    let graph = house_with_roof();
    assert_eq!(graph.is_clique(&['a', 'b', 'c', 'd']), Ok(true));
    assert_eq!(graph.is_clique(&['a', 'b', 'c', 'd', 'e']), Ok(false));
    assert_eq!(graph.is_clique(&['e']), Ok(true));
    assert_eq!(graph.is_clique(&[]), Ok(true));
}

#[test]
fn chordal() {
    let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
    graph.add_nodes(['a', 'b', 'c', 'd', 'e']);
    graph
        .add_edges([
            ('a', 'b', ()),
            ('a', 'c', ()),
            ('b', 'c', ()),
            ('b', 'd', ()),
            ('b', 'e', ()),
            ('c', 'd', ()),
            ('d', 'e', ()),
        ])
        .unwrap();
    assert!(graph.is_chordal());

    // A pendant node cannot close a cycle
    graph.add_node('f');
    graph.add_edge(&'a', &'f', ()).unwrap();
    assert!(graph.is_chordal());

    // a-b-e-f-a has no chord
    graph.add_edge(&'e', &'f', ()).unwrap();
    assert!(!graph.is_chordal());
}

#[test]
fn chordless_square() {
    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
    graph.add_nodes([1, 2, 3, 4]);
    graph
        .add_edges([(1, 2, ()), (2, 3, ()), (3, 4, ()), (4, 1, ())])
        .unwrap();
    assert!(!graph.is_chordal());

    graph.add_edge(&2, &4, ()).unwrap();
    assert!(graph.is_chordal());
}

#[test]
fn complete() {
    let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
    graph.add_nodes(['a', 'b', 'c', 'd']);
    graph
        .add_edges([
            ('a', 'b', ()),
            ('a', 'c', ()),
            ('a', 'd', ()),
            ('b', 'c', ()),
            ('b', 'd', ()),
            ('c', 'd', ()),
        ])
        .unwrap();
    assert!(graph.is_complete());

    graph.remove_edge(&'b', &'c').unwrap();
    assert!(!graph.is_complete());
}

#[test]
fn bipartite() {
    let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
    graph.add_nodes(['a', 'b', 'c', 'd', 'e']);
    graph
        .add_edges([('a', 'b', ()), ('a', 'c', ()), ('b', 'd', ()), ('c', 'e', ())])
        .unwrap();
    assert!(graph.is_bipartite());

    graph.add_edge(&'a', &'e', ()).unwrap();
    assert!(!graph.is_bipartite());
}

#[test]
fn bipartite_checks_every_component() {
    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
    graph.add_nodes([1, 2, 3, 4, 5]);
    graph.add_edge(&1, &2, ()).unwrap();
    assert!(graph.is_bipartite());

    graph
        .add_edges([(3, 4, ()), (4, 5, ()), (5, 3, ())])
        .unwrap();
    assert!(!graph.is_bipartite());
    assert!(UndirectedGraph::<u8>::new().is_bipartite());
}

#[test]
fn mirrored_adjacency_is_symmetric() {
    let graph = house_with_roof();
    for node in graph.nodes() {
        for neighbor in graph.neighbors(node).unwrap() {
            assert!(graph.has_edge(neighbor, node).unwrap());
        }
        let forward: Vec<&char> = graph.neighbors(node).unwrap().collect();
        let backward: Vec<&char> = graph.predecessors(node).unwrap().collect();
        assert_eq!(forward.len(), backward.len());
    }
}

#[test]
fn undirected_graph_is_cyclic_through_mirrored_edges() {
    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
    graph.add_nodes([1, 2]);
    graph.add_edge(&1, &2, ()).unwrap();

    assert!(graph.is_cyclic());
    assert_eq!(graph.strongly_connected_components().len(), 1);
}

#[test]
fn remove_node_keeps_symmetry() {
    let mut graph = house_with_roof();
    graph.remove_node(&'c').unwrap();

    assert_eq!(graph.size(), 3);
    assert_eq!(graph.degree(&'e'), Ok(0));
    assert!(!graph.is_complete());
    assert_eq!(graph.is_clique(&['a', 'b', 'd']), Ok(true));
}
