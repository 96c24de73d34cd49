use std::fmt::Debug;

use num_traits::{CheckedAdd, PrimInt};

use crate::Result;

/// Trait representing a weighted directed graph with contiguous vertex ids
/// `0..vertex_count`.
pub trait Graph<W>: Debug
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a vertex as
    /// `(target, weight)` pairs, in insertion order. Targets yielded by an
    /// implementation must be valid vertex ids below `vertex_count`.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex id is within the declared bound
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if at least one edge `from -> to` exists
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Weight of the edge `from -> to`; the smallest weight if parallel
    /// edges exist, `None` if there is no such edge.
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// Trait for populating a bounded graph
pub trait MutableGraph<W>: Graph<W>
where
    W: PrimInt + CheckedAdd + Debug,
{
    /// Reinitializes the graph for vertex ids `0..vertex_count`, discarding
    /// every edge. Fails without touching the graph if `vertex_count` is 0.
    fn reset(&mut self, vertex_count: usize) -> Result<()>;

    /// Adds one directed edge. Fails without inserting anything if either
    /// endpoint is out of range or the weight is negative.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Adds a pair of directed edges `from -> to` and `to -> from` with the
    /// same weight. Validation happens before either insert, so a failure
    /// leaves no half-connected edge behind.
    fn add_edge_undirected(&mut self, from: usize, to: usize, weight: W) -> Result<()>;

    /// Drops all edges while keeping the vertex bound
    fn clear(&mut self);
}
