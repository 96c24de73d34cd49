use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};
use num_traits::{CheckedAdd, PrimInt};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a binary min-heap and lazy deletion.
///
/// Improved vertices are re-pushed rather than decreased in place; a
/// per-vertex finalized flag lets stale heap entries be skipped on pop.
/// Runs single-threaded in O((V + E) log V).
#[derive(Debug, Default)]
pub struct Dijkstra {
    cancel: Option<Arc<AtomicBool>>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { cancel: None }
    }

    /// Attaches a cooperative cancellation flag, checked once per heap pop.
    /// A computation that observes the flag aborts with
    /// [`Error::Cancelled`] and yields no partial tables.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: PrimInt + CheckedAdd + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if n == 0 {
            return Err(Error::NotInitialized);
        }
        if !graph.has_vertex(source) {
            return Err(Error::InvalidSource(source, n));
        }

        let started = Instant::now();
        debug!(
            "computing shortest paths from {} over {} vertices and {} edges",
            source,
            n,
            graph.edge_count()
        );

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];

        // Distance to source is 0
        distances[source] = Some(W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        let mut settled = 0usize;
        while let Some((u, dist_u)) = queue.pop() {
            if self.cancelled() {
                warn!("computation cancelled after settling {} vertices", settled);
                return Err(Error::Cancelled);
            }

            // Stale entry: u was already settled through a cheaper route
            if finalized[u] {
                continue;
            }
            finalized[u] = true;
            settled += 1;
            trace!("settled vertex {} at distance {:?}", u, dist_u);

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(u) {
                if weight < W::zero() {
                    warn!("negative weight on edge {} -> {}, aborting", u, v);
                    return Err(Error::NegativeWeight(u, v));
                }
                let new_dist = match dist_u.checked_add(&weight) {
                    Some(distance) => distance,
                    None => {
                        warn!("distance overflow relaxing edge {} -> {}, aborting", u, v);
                        return Err(Error::WeightOverflow(u, v));
                    }
                };

                let improves = match distances[v] {
                    None => true,
                    Some(current) => new_dist < current,
                };

                if improves {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        debug!(
            "settled {} of {} vertices in {:?}",
            settled,
            n,
            started.elapsed()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
