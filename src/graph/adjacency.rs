use std::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt};

use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A bounded directed graph backed by per-vertex adjacency vectors.
///
/// Vertex ids are dense indices `0..vertex_count`, fixed by [`reset`]
/// (or [`with_vertices`]) until the next reset. Parallel edges and
/// self-loops are stored as given; neither disturbs a shortest-path run.
///
/// [`reset`]: MutableGraph::reset
/// [`with_vertices`]: AdjacencyGraph::with_vertices
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Declared vertex bound; 0 means not initialized
    vertex_count: usize,

    /// Outgoing edges per vertex: `outgoing[v]` holds `(target, weight)`
    outgoing: Vec<Vec<(usize, W)>>,

    /// Total number of directed edges
    edge_count: usize,
}

impl<W> AdjacencyGraph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Creates an empty, uninitialized graph (0 vertices)
    pub fn new() -> Self {
        AdjacencyGraph {
            vertex_count: 0,
            outgoing: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph initialized for vertex ids `0..vertex_count`
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        let mut graph = Self::new();
        graph.reset(vertex_count)?;
        Ok(graph)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::VertexOutOfRange(vertex, self.vertex_count))
        }
    }

    fn check_edge(&self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if weight < W::zero() {
            return Err(Error::NegativeWeight(from, to));
        }
        Ok(())
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: W) {
        self.outgoing[from].push((to, weight));
        self.edge_count += 1;
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing.get(from).and_then(|edges| {
            edges
                .iter()
                .filter(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
                .min()
        })
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    fn reset(&mut self, vertex_count: usize) -> Result<()> {
        if vertex_count == 0 {
            return Err(Error::InvalidVertexCount(vertex_count));
        }
        self.vertex_count = vertex_count;
        self.outgoing = vec![Vec::new(); vertex_count];
        self.edge_count = 0;
        Ok(())
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.push_edge(from, to, weight);
        Ok(())
    }

    fn add_edge_undirected(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.check_edge(from, to, weight)?;
        self.push_edge(from, to, weight);
        self.push_edge(to, from, weight);
        Ok(())
    }

    fn clear(&mut self) {
        for edges in &mut self.outgoing {
            edges.clear();
        }
        self.edge_count = 0;
    }
}
