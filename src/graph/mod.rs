pub mod adjacency;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use traits::{Graph, MutableGraph};
