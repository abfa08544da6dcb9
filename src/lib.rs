
pub mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use collections::IndexedMinHeap;
pub use errors::{GraphError, SearchError};
pub use graph::{DirectedGraph, Edge, GraphBuilder};
pub use graph_algos::{DistanceTable, format_trace, path_to, shortest_paths};
