//! Single-source shortest paths over non-negative integer edge weights.
//!
//! This library implements the classic Dijkstra algorithm with a binary-heap
//! priority queue and lazy deletion of stale entries. All state lives in an
//! explicit [`SsspSession`] that owns a graph and the most recent computation
//! result; there are no globals. The same engine backs the Rust API, a
//! C-callable surface (`ffi` feature, built as a cdylib) and Python bindings
//! (`python` feature).

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
pub mod session;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use session::SsspSession;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    #[error("Vertex {0} out of range: graph has {1} vertices")]
    VertexOutOfRange(usize, usize),

    #[error("Invalid source vertex {0}: graph has {1} vertices")]
    InvalidSource(usize, usize),

    #[error("Graph not initialized: no vertices declared")]
    NotInitialized,

    #[error("No computation available: run compute first")]
    NoComputationAvailable,

    #[error("Negative weight on edge {0} -> {1}")]
    NegativeWeight(usize, usize),

    #[error("Distance overflow while relaxing edge {0} -> {1}")]
    WeightOverflow(usize, usize),

    #[error("Computation cancelled")]
    Cancelled,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
