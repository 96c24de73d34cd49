use std::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt};

use crate::graph::Graph;
use crate::{Error, Result};

/// Distance and predecessor tables produced by one shortest-path run.
///
/// Both tables are indexed by vertex id. `None` in `distances` means the
/// vertex was never reached; such vertices also carry no predecessor. The
/// source has distance zero and no predecessor, and every other reached
/// vertex chains back to the source through `predecessors`.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Distances from the source to each vertex
    pub distances: Vec<Option<W>>,

    /// Predecessor of each vertex in the shortest-path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Number of vertices the tables cover
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if the vertex was reached from the source
    pub fn is_reached(&self, vertex: usize) -> bool {
        self.distances
            .get(vertex)
            .map_or(false, |distance| distance.is_some())
    }

    /// Distance from the source to `vertex`; `Ok(None)` means unreachable
    pub fn distance_to(&self, vertex: usize) -> Result<Option<W>> {
        if vertex >= self.distances.len() {
            return Err(Error::VertexOutOfRange(vertex, self.distances.len()));
        }
        Ok(self.distances[vertex])
    }

    /// Full vertex sequence from the source to `destination`, both ends
    /// included. An unreachable destination yields an empty path, which is
    /// a normal outcome rather than an error.
    pub fn path_to(&self, destination: usize) -> Result<Vec<usize>> {
        if destination >= self.distances.len() {
            return Err(Error::VertexOutOfRange(destination, self.distances.len()));
        }
        if self.distances[destination].is_none() {
            return Ok(Vec::new());
        }

        // Walk predecessors back to the source, then flip. A reached vertex
        // always chains to the source; the length bound guards a table
        // someone mutated by hand.
        let mut path = vec![destination];
        let mut current = destination;
        while current != self.source && path.len() <= self.distances.len() {
            match self.predecessors[current] {
                Some(predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => break,
            }
        }
        path.reverse();
        Ok(path)
    }
}

/// Trait for single-source shortest path engines
pub trait ShortestPathAlgorithm<W, G>
where
    W: PrimInt + CheckedAdd + Debug,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
