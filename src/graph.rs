use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::hash::Hash;
use num_traits::Zero;


/// Weighted edge out of a vertex
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<C> {
    pub to: usize,
    pub weight: C,
}

/// Weighted directed graph over dense zero-based vertex ids
/// Out edges of a vertex keep their insertion order
#[derive(Clone, Debug)]
pub struct DirectedGraph<C> {
    adjacency: Vec<Vec<Edge<C>>>,
}

impl<C: Zero + Ord + Copy> DirectedGraph<C> {

    /// Create a graph with `vertex_count` vertices and no edges
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Create a graph from (from, to, weight) triples
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize, C)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Add a directed edge
    /// Vertex ids out of range are caller bugs; a negative weight is
    /// rejected here so the search never sees one
    pub fn add_edge(&mut self, from: usize, to: usize, weight: C) -> Result<(), GraphError> {
        let n = self.vertex_count();
        assert!(from < n, "from vertex {from} out of range for {n} vertices");
        assert!(to < n, "to vertex {to} out of range for {n} vertices");

        if weight < C::zero() {
            return Err(GraphError::InvalidWeight);
        }

        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Outgoing edges of a vertex, in insertion order
    pub fn out_edges(&self, vertex: usize) -> &[Edge<C>] {
        assert!(vertex < self.vertex_count(), "vertex {vertex} out of range for {} vertices", self.vertex_count());
        &self.adjacency[vertex]
    }
}


/// Build a `DirectedGraph` from arbitrary hashable node labels
/// Labels are interned to dense vertex ids in first-seen order, so the
/// search works on plain indices while callers keep their own node type
pub struct GraphBuilder<N, C> {
    labels: FxIndexMap<N, ()>,
    edges: Vec<(usize, usize, C)>,
}

impl<N, C> GraphBuilder<N, C>
where
    N: Eq + Hash,
    C: Zero + Ord + Copy,
{

    pub fn new() -> Self {
        Self {
            labels: FxIndexMap::default(),
            edges: Vec::new(),
        }
    }

    /// Intern a label, returning the dense vertex id assigned to it
    pub fn intern(&mut self, label: N) -> usize {
        self.labels.insert_full(label, ()).0
    }

    /// Add a directed edge between two labels, interning both
    pub fn add_edge(&mut self, from: N, to: N, weight: C) -> Result<(), GraphError> {
        if weight < C::zero() {
            return Err(GraphError::InvalidWeight);
        }
        let from = self.intern(from);
        let to = self.intern(to);
        self.edges.push((from, to, weight));
        Ok(())
    }

    /// Consume the builder, returning the graph and the id -> label table
    pub fn build(self) -> (DirectedGraph<C>, Vec<N>) {
        let mut graph = DirectedGraph::new(self.labels.len());
        for (from, to, weight) in self.edges {
            // Ids and weights were validated on the way in
            graph.adjacency[from].push(Edge { to, weight });
        }
        let labels = self.labels.into_keys().collect();
        (graph, labels)
    }
}
