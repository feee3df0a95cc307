use thiserror::Error;

/// Errors raised while assembling a [`Graph`](crate::Graph).
///
/// A failed call leaves the graph exactly as it was before the call, with the
/// exception of [`Graph::add_edges`](crate::Graph::add_edges), which keeps the
/// edges inserted before the failing triple.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid vertex label {label:?}: labels must not be empty")]
    InvalidLabel { label: String },

    #[error("Duplicate vertex label {label}")]
    DuplicateVertex { label: String },

    #[error("Edge endpoints are identical: {label} - {label}")]
    SelfLoop { label: String },

    #[error("Vertex {label} was not found")]
    VertexNotFound { label: String },

    #[error("Invalid edge weight {weight}: weights must be positive and finite")]
    InvalidWeight { weight: f64 },

    #[error("Edge {first} - {second} already exists with weight {existing}")]
    DuplicateEdge {
        /// Canonical label of the first endpoint of the rejected edge.
        first: String,
        /// Canonical label of the second endpoint of the rejected edge.
        second: String,
        /// Weight of the edge already connecting the pair.
        existing: f64,
    },
}

/// Structural failures detected while building a spanning tree.
///
/// No partial tree is returned alongside any of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("Graph is disconnected: {branches} branches and {isolated} isolated vertices remain")]
    DisconnectedGraph {
        /// Branches still alive after every edge was processed.
        branches: usize,
        /// Vertices never touched by an accepted edge.
        isolated: usize,
    },

    #[error("No spanning branches were built for {vertices} vertices")]
    NoSpanningBranches { vertices: usize },
}

/// Umbrella error for code that both builds and solves a graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MstError {
    #[error("Graph construction error: {0}")]
    Graph(#[from] GraphError),

    #[error("Spanning tree error: {0}")]
    Solve(#[from] SolveError),
}
