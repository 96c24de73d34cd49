use std::time::{Duration, Instant};

use rand::Rng;

use dijkstra_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use dijkstra_sssp::graph::{AdjacencyGraph, Graph, MutableGraph};

// Generates a random directed graph with roughly edge_factor * n edges
fn generate_random_graph(num_vertices: usize, edge_factor: f64) -> AdjacencyGraph<i64> {
    let mut graph = AdjacencyGraph::with_vertices(num_vertices).unwrap();
    let mut rng = rand::thread_rng();

    let num_edges = (edge_factor * num_vertices as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_vertices);
        let v = rng.gen_range(0..num_vertices);
        // Skip self-loops; weights stay strictly positive
        if u != v {
            let weight = rng.gen_range(1..100);
            graph.add_edge(u, v, weight).unwrap();
        }
    }

    graph
}

// Times one full computation and reports how much of the graph was reached
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &AdjacencyGraph<i64>,
    source: usize,
) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<i64, AdjacencyGraph<i64>>,
{
    println!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source).unwrap();
    let duration = start.elapsed();

    let reached = result.distances.iter().filter(|d| d.is_some()).count();
    println!("  - Reached {} vertices in {:?}", reached, duration);

    (duration, reached)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra over random directed graphs");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let build_start = Instant::now();
        let graph = generate_random_graph(size, edge_factor);
        let build_time = build_start.elapsed();

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (compute_time, reached) = benchmark_algorithm(&dijkstra, &graph, 0);
        results.push((size, graph.edge_count(), build_time, compute_time, reached));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<12} | {:<12} | {:<10}",
        "Vertices", "Edges", "Build (ms)", "Compute (ms)", "Reached"
    );
    println!("-----------------------------------------------------");

    for (size, edges, build_time, compute_time, reached) in &results {
        println!(
            "{:<10} | {:<10} | {:<12} | {:<12} | {:<10}",
            size,
            edges,
            build_time.as_millis(),
            compute_time.as_millis(),
            reached
        );
    }
}
