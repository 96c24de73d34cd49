use dijkstra_sssp::algorithm::dijkstra::Dijkstra;
use dijkstra_sssp::algorithm::traits::ShortestPathAlgorithm;
use dijkstra_sssp::graph::AdjacencyGraph;
use dijkstra_sssp::graph::{Graph, MutableGraph};
use dijkstra_sssp::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test helper: the diamond graph. Vertices 0..=3 are connected by the
// undirected edges (0,1,4), (1,2,1), (0,2,10), (2,3,2); vertex 4 is
// isolated. Shortest distances from 0 are [0, 4, 5, 7].
fn diamond_graph() -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::with_vertices(5).unwrap();
    graph.add_edge_undirected(0, 1, 4).unwrap();
    graph.add_edge_undirected(1, 2, 1).unwrap();
    graph.add_edge_undirected(0, 2, 10).unwrap();
    graph.add_edge_undirected(2, 3, 2).unwrap();
    graph
}

// Test helper: random graph with a spanning chain so everything stays
// reachable from vertex 0
fn random_graph(vertices: usize, extra_edges: usize, seed: u64) -> AdjacencyGraph<i64> {
    let mut graph = AdjacencyGraph::with_vertices(vertices).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 1..vertices {
        graph.add_edge(v - 1, v, rng.gen_range(1..50)).unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..50)).unwrap();
        }
    }

    graph
}

// O(V^2) scan-based reference implementation for cross-checking
fn naive_shortest_distances(graph: &AdjacencyGraph<i64>, source: usize) -> Vec<Option<i64>> {
    let n = graph.vertex_count();
    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut finalized = vec![false; n];
    distances[source] = Some(0);

    loop {
        let mut best: Option<(usize, i64)> = None;
        for v in 0..n {
            if finalized[v] {
                continue;
            }
            if let Some(d) = distances[v] {
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((v, d));
                }
            }
        }
        let (u, dist_u) = match best {
            Some(pair) => pair,
            None => break,
        };
        finalized[u] = true;
        for (v, w) in graph.outgoing_edges(u) {
            let candidate = dist_u + w;
            if distances[v].map_or(true, |d| candidate < d) {
                distances[v] = Some(candidate);
            }
        }
    }

    distances
}

// Test the diamond scenario end to end: distances, path, continuity, cost
#[test]
fn test_diamond_distances_and_path() {
    let graph = diamond_graph();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.vertex_count(), 5);
    assert_eq!(result.distances[0], Some(0), "Source distance should be 0");
    assert_eq!(result.distances[1], Some(4), "Direct edge 0-1 should win");
    assert_eq!(
        result.distances[2],
        Some(5),
        "Route 0-1-2 should beat the direct 0-2 edge"
    );
    assert_eq!(
        result.distances[3],
        Some(7),
        "Distance to 3 should accumulate along 0-1-2-3"
    );

    let path = result.path_to(3).unwrap();
    assert_eq!(path, vec![0, 1, 2, 3], "Path should follow the cheap route");

    // Path continuity: only existing edges
    for i in 1..path.len() {
        assert!(
            graph.has_edge(path[i - 1], path[i]),
            "Path should only use existing edges"
        );
    }

    // Path cost equals the reported distance
    let cost: u32 = (1..path.len())
        .map(|i| graph.edge_weight(path[i - 1], path[i]).unwrap())
        .sum();
    assert_eq!(
        Some(cost),
        result.distances[3],
        "Path cost should match the distance table"
    );
}

// Test that an isolated vertex stays unreachable with an empty path
#[test]
fn test_isolated_vertex_unreachable() {
    let graph = diamond_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[4], None, "Isolated vertex should be unreachable");
    assert_eq!(result.predecessors[4], None, "Unreached vertex has no predecessor");
    assert!(!result.is_reached(4));
    assert_eq!(
        result.path_to(4).unwrap(),
        Vec::<usize>::new(),
        "Unreachable destination should yield an empty path, not an error"
    );
}

// Test that the path to the source itself is the single-vertex sequence
#[test]
fn test_path_to_source() {
    let graph = diamond_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.path_to(0).unwrap(), vec![0]);
    assert_eq!(result.predecessors[0], None, "Source has no predecessor");
}

// Test directed asymmetry: an edge 0 -> 1 says nothing about 1 -> 0
#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = AdjacencyGraph::<i64>::with_vertices(2).unwrap();
    graph.add_edge(0, 1, 5).unwrap();
    let dijkstra = Dijkstra::new();

    let forward = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(forward.distances[1], Some(5));

    let backward = dijkstra.compute_shortest_paths(&graph, 1).unwrap();
    assert_eq!(
        backward.distances[0], None,
        "0 should be unreachable from 1 over a directed edge"
    );
    assert_eq!(backward.distances[1], Some(0), "Source still reaches itself");
}

// Test lazy deletion: a vertex queued repeatedly with improving distances
// must settle at the best one, with stale entries skipped
#[test]
fn test_stale_heap_entries_are_skipped() {
    let mut graph = AdjacencyGraph::<i64>::with_vertices(4).unwrap();
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(0, 2, 4).unwrap();
    graph.add_edge(0, 3, 10).unwrap();
    graph.add_edge(1, 3, 6).unwrap();
    graph.add_edge(2, 3, 1).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    // Vertex 3 is queued at 10, improved to 7, then improved to 5
    assert_eq!(result.distances[3], Some(5), "Best of three queued routes should win");
    assert_eq!(result.predecessors[3], Some(2), "Winning route arrives through 2");
    assert_eq!(result.distances[1], Some(1));
    assert_eq!(result.distances[2], Some(4));
    assert_eq!(result.path_to(3).unwrap(), vec![0, 2, 3]);
}

// Test that zero-weight edges propagate without special casing
#[test]
fn test_zero_weight_edges() {
    let mut graph = AdjacencyGraph::<u32>::with_vertices(3).unwrap();
    graph.add_edge(0, 1, 0).unwrap();
    graph.add_edge(1, 2, 0).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[1], Some(0));
    assert_eq!(result.distances[2], Some(0));
    assert_eq!(result.path_to(2).unwrap(), vec![0, 1, 2]);
}

// Test the smallest legal graph
#[test]
fn test_single_vertex_graph() {
    let graph = AdjacencyGraph::<i64>::with_vertices(1).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances, vec![Some(0)]);
    assert_eq!(result.path_to(0).unwrap(), vec![0]);
}

// Test a source with no outgoing edges
#[test]
fn test_source_with_no_outgoing_edges() {
    let mut graph = AdjacencyGraph::<i64>::with_vertices(3).unwrap();
    graph.add_edge(0, 1, 2).unwrap();
    graph.add_edge(1, 2, 2).unwrap();

    // Vertex 2 is a sink
    let result = Dijkstra::new().compute_shortest_paths(&graph, 2).unwrap();

    assert_eq!(result.distances[2], Some(0));
    assert_eq!(result.distances[0], None);
    assert_eq!(result.distances[1], None);
}

// Test that recomputing over an unchanged graph is idempotent
#[test]
fn test_recompute_is_idempotent() {
    let graph = random_graph(50, 150, 11);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, 0).unwrap();
    let second = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(first.distances, second.distances, "Distance tables should be identical");
    assert_eq!(
        first.predecessors, second.predecessors,
        "Predecessor tables should be identical"
    );
}

// Test the shortest-path tree law: every reached vertex is one relaxed
// edge beyond its predecessor
#[test]
fn test_predecessor_tree_is_tight() {
    let graph = random_graph(80, 240, 3);
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[0], Some(0));
    assert_eq!(result.predecessors[0], None);

    for v in 1..graph.vertex_count() {
        let distance = match result.distances[v] {
            Some(distance) => distance,
            None => {
                assert_eq!(result.predecessors[v], None, "Unreached vertex has no predecessor");
                continue;
            }
        };
        let predecessor = result.predecessors[v].expect("Reached vertex must have a predecessor");
        let pred_distance = result.distances[predecessor].expect("Predecessor must be reached");
        let weight = graph
            .edge_weight(predecessor, v)
            .expect("Tree edge must exist in the graph");
        assert_eq!(
            pred_distance + weight,
            distance,
            "Vertex {} should sit exactly one edge beyond its predecessor",
            v
        );
    }
}

// Test the heap engine against a scan-based reference on seeded graphs
#[test]
fn test_matches_naive_reference_on_random_graphs() {
    let _ = env_logger::builder().is_test(true).try_init();

    for seed in [1, 7, 42] {
        let graph = random_graph(60, 200, seed);
        let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
        let reference = naive_shortest_distances(&graph, 0);

        assert_eq!(
            result.distances, reference,
            "Heap and scan implementations disagree for seed {}",
            seed
        );
    }
}

// Test that an uninitialized graph is rejected before any work happens
#[test]
fn test_uninitialized_graph_is_rejected() {
    let graph: AdjacencyGraph<i64> = AdjacencyGraph::new();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0);

    assert!(
        matches!(result, Err(Error::NotInitialized)),
        "Expected NotInitialized, got {:?}",
        result
    );
}

// Test that an out-of-range source is rejected
#[test]
fn test_invalid_source_is_rejected() {
    let graph = AdjacencyGraph::<i64>::with_vertices(3).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 7);

    assert!(
        matches!(result, Err(Error::InvalidSource(7, 3))),
        "Expected InvalidSource, got {:?}",
        result
    );
}
