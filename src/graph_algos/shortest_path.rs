use crate::errors::SearchError;
use super::DistanceTable;

use std::fmt::{Display, Write};


/// Construct the shortest path from the source to the target vertex
/// Returns the ordered path as (vertex, distance from source) pairs, source
/// first; a target the search never reached is a normal UnreachableTarget
/// outcome, while a target id out of range is a caller bug
pub fn path_to<C>(table: &DistanceTable<C>, target: usize) -> Result<Vec<(usize, C)>, SearchError>
where
    C: Copy,
{
    let n = table.vertex_count();
    assert!(target < n, "target vertex {target} out of range for {n} vertices");

    let mut path = Vec::new();
    let mut current = target;

    // Trace back from target to source
    loop {
        // Add the current vertex to the path
        if let Some(distance) = table.distance(current) {
            path.push((current, distance));
        } else {
            return Err(SearchError::UnreachableTarget);
        }

        if current == table.source() {
            break;
        }

        match table.predecessor(current) {
            Some(previous) => current = previous,
            None => return Err(SearchError::UnreachableTarget),
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


/// Render a path in the trace format: one line per vertex from the target
/// back to the source, each as `n<vertex> <distance>`, the source line
/// closing the trace with its zero distance
pub fn format_trace<C>(path: &[(usize, C)]) -> String
where
    C: Display,
{
    let mut out = String::new();
    for (vertex, distance) in path.iter().rev() {
        writeln!(out, "n{vertex} {distance}").unwrap(); // writing to a String does not fail
    }
    out
}
