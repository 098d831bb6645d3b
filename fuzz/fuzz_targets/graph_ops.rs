#![no_main]

use graphcore::{DirectedWeightedMultiGraph, UndirectedGraph};
use libfuzzer_sys::fuzz_target;

// Each 3-byte chunk is one operation: opcode, then two node values in 0..16.
fuzz_target!(|data: &[u8]| {
    let mut multi: DirectedWeightedMultiGraph<u8> = DirectedWeightedMultiGraph::new();
    let mut undirected: UndirectedGraph<u8> = UndirectedGraph::new();

    for chunk in data.chunks_exact(3) {
        let (a, b) = (chunk[1] % 16, chunk[2] % 16);
        match chunk[0] % 6 {
            0 => {
                multi.add_node(a);
                undirected.add_node(a);
            }
            1 => {
                let _ = multi.add_edge(&a, &b, i64::from(chunk[0] >> 3) - 8, ());
                let _ = undirected.add_edge(&a, &b, ());
            }
            2 => {
                let _ = multi.remove_node(&a);
                let _ = undirected.remove_node(&a);
            }
            3 => {
                if let Ok(ids) = multi.edge_ids(&a, &b) {
                    if let Some(&id) = ids.first() {
                        let _ = multi.remove_edge(id);
                    }
                }
                let _ = undirected.remove_edge(&a, &b);
            }
            4 => {
                let _ = multi.dijkstra(&a);
                let _ = multi.bellman_ford(&a);
                let _ = multi.astar_path(&a, &b, |_, _| 0);
            }
            _ => {
                let _ = multi.strongly_connected_components();
                let _ = multi.topological_sort();
                let _ = undirected.is_chordal();
                let _ = undirected.is_bipartite();
            }
        }
    }

    assert_eq!(multi.edges().count(), multi.size());
    assert_eq!(undirected.edges().count(), undirected.size() * 2);
    for (v, u) in undirected.edges() {
        assert!(matches!(undirected.has_edge(u, v), Ok(true)));
    }
    if multi.order() <= 8 {
        let _ = multi.simple_cycles();
    }
});
