
#[derive(Debug)]
pub enum GraphError {
    InvalidWeight, // Edge weight is negative - rejected at construction, before any search runs
}

#[derive(Debug)]
pub enum SearchError {
    UnreachableTarget, // No path from the source reaches the target
}
