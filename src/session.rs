use std::fmt::Debug;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use num_traits::{CheckedAdd, PrimInt};

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{AdjacencyGraph, Graph, MutableGraph};
use crate::{Error, Result};

/// A graph plus the tables of its most recent shortest-path run.
///
/// The session is the single entry point for callers that populate a graph,
/// compute from a source and then query distances and paths. Queries fail
/// with [`Error::NoComputationAvailable`] until a compute succeeds, and a
/// failed compute discards whatever result was installed before it, so
/// callers can never read tables that do not match the last request.
///
/// A session is not internally synchronized; concurrent use needs one
/// session per thread or external locking.
#[derive(Debug)]
pub struct SsspSession<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    graph: AdjacencyGraph<W>,
    result: Option<ShortestPathResult<W>>,
}

impl<W> SsspSession<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Creates a session for vertex ids `0..vertex_count`
    pub fn new(vertex_count: usize) -> Result<Self> {
        Ok(SsspSession {
            graph: AdjacencyGraph::with_vertices(vertex_count)?,
            result: None,
        })
    }

    /// Reinitializes the graph for a new vertex bound, discarding all edges
    /// and any computed tables. A failed reset leaves the session untouched.
    pub fn reset(&mut self, vertex_count: usize) -> Result<()> {
        self.graph.reset(vertex_count)?;
        self.result = None;
        Ok(())
    }

    /// Drops all edges and any computed tables; the vertex bound stays
    pub fn clear(&mut self) {
        self.graph.clear();
        self.result = None;
    }

    /// Adds one directed edge
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge(from, to, weight)
    }

    /// Adds an undirected edge as two directed edges
    pub fn add_edge_undirected(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.graph.add_edge_undirected(from, to, weight)
    }

    /// Runs Dijkstra from `source` and installs the resulting tables.
    /// Recomputing with the same source over an unchanged graph produces
    /// identical tables.
    pub fn compute(&mut self, source: usize) -> Result<()> {
        self.run(Dijkstra::new(), source)
    }

    /// Like [`compute`], but aborts with [`Error::Cancelled`] once the flag
    /// is observed set (checked once per heap pop).
    ///
    /// [`compute`]: SsspSession::compute
    pub fn compute_with_cancel(&mut self, source: usize, cancel: Arc<AtomicBool>) -> Result<()> {
        self.run(Dijkstra::new().with_cancel_flag(cancel), source)
    }

    fn run(&mut self, engine: Dijkstra, source: usize) -> Result<()> {
        // A failed run must not leave an older result queryable
        self.result = None;
        self.result = Some(engine.compute_shortest_paths(&self.graph, source)?);
        Ok(())
    }

    fn current(&self) -> Result<&ShortestPathResult<W>> {
        self.result.as_ref().ok_or(Error::NoComputationAvailable)
    }

    /// Distance from the computed source to `vertex`; `Ok(None)` means
    /// unreachable
    pub fn distance_to(&self, vertex: usize) -> Result<Option<W>> {
        self.current()?.distance_to(vertex)
    }

    /// The full distance table of the last computation, indexed by vertex
    pub fn distances(&self) -> Result<&[Option<W>]> {
        Ok(&self.current()?.distances)
    }

    /// Vertex sequence from the computed source to `destination`; empty if
    /// the destination was never reached
    pub fn path_to(&self, destination: usize) -> Result<Vec<usize>> {
        self.current()?.path_to(destination)
    }

    /// Source vertex of the last computation
    pub fn source(&self) -> Result<usize> {
        Ok(self.current()?.source)
    }

    /// The tables of the last computation, if one succeeded
    pub fn result(&self) -> Option<&ShortestPathResult<W>> {
        self.result.as_ref()
    }

    /// Declared vertex bound
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of directed edges currently stored
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Read access to the underlying graph
    pub fn graph(&self) -> &AdjacencyGraph<W> {
        &self.graph
    }
}
