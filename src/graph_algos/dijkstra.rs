use crate::collections::IndexedMinHeap;
use crate::graph::DirectedGraph;
use super::DistanceTable;

use std::{cmp::Ordering, fmt::Debug};
use num_traits::Zero;


/// Progress of a vertex through the search
/// A vertex moves Unvisited -> Queued -> Finalized exactly once; with
/// non-negative weights a finalized distance never improves again
#[derive(Clone, Copy, Debug)]
enum VertexState {
    Unvisited,
    Queued(usize), // handle of the heap entry tracking this vertex
    Finalized,
}

/// Heap entry for a reached vertex
/// - ordering only considers the distance from the source
/// - predecessor rides along so the entry carries everything the table
///   records when the vertex is finalized
#[derive(Debug)]
struct VertexDistance<C> {
    vertex: usize,
    distance: C,
    predecessor: usize,
}

impl<C: Ord> Ord for VertexDistance<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}
impl<C: Ord> PartialOrd for VertexDistance<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: PartialEq> PartialEq for VertexDistance<C> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl<C: PartialEq> Eq for VertexDistance<C> {}


/// Single source shortest paths using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Vertices are settled in non-decreasing distance order; an improvement to
/// an already queued vertex is applied in place through its heap handle
/// instead of queueing a duplicate entry
pub fn shortest_paths<C>(graph: &DirectedGraph<C>, source: usize) -> DistanceTable<C>
where
    C: Zero + Ord + Copy + Debug,
{
    let n = graph.vertex_count();
    assert!(source < n, "source vertex {source} out of range for {n} vertices");

    let mut states = vec![VertexState::Unvisited; n];
    let mut table = DistanceTable::new(n, source);

    // One heap slot per vertex is enough - each vertex is queued at most once
    let mut heap: IndexedMinHeap<VertexDistance<C>> = IndexedMinHeap::new(n);

    // Seed with the source at distance zero, its own predecessor
    let handle = heap.insert(VertexDistance {
        vertex: source,
        distance: C::zero(),
        predecessor: source,
    });
    states[source] = VertexState::Queued(handle);

    while !heap.is_empty() {

        // The minimal queued distance cannot improve anymore - settle it
        let entry = heap.extract_min();
        states[entry.vertex] = VertexState::Finalized;
        table.record(entry.vertex, entry.distance, entry.predecessor);

        // Relax the outgoing edges
        for edge in graph.out_edges(entry.vertex) {
            let candidate = entry.distance + edge.weight;

            match states[edge.to] {
                VertexState::Unvisited => {
                    // First path found to this vertex - queue it
                    let handle = heap.insert(VertexDistance {
                        vertex: edge.to,
                        distance: candidate,
                        predecessor: entry.vertex,
                    });
                    states[edge.to] = VertexState::Queued(handle);
                }
                VertexState::Queued(handle) => {
                    // Already queued - keep the shorter of the two distances
                    let queued = heap.get_mut(handle);
                    if candidate < queued.distance {
                        queued.distance = candidate;
                        queued.predecessor = entry.vertex;
                        heap.reposition(handle);
                    }
                }
                VertexState::Finalized => {
                    // Settled distances never change again
                }
            }
        }
    }

    table
}
