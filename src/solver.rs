mod disjoint_set;
mod kruskal;
mod prim;

use crate::error::SolveError;
use crate::graph::Graph;
use crate::spanning_tree::SpanningTree;
pub use kruskal::Kruskal;
pub use prim::Prim;

/// An algorithm that builds a minimum spanning tree of a connected graph.
///
/// Implementors keep all working state local to a call, so a single graph
/// can be handed to any number of solves.
pub trait SpanningTreeSolver {
    fn solve(&self, graph: &Graph) -> Result<SpanningTree, SolveError>;
}

/// Solves `graph` with the default [`Kruskal`] configuration.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree, SolveError> {
    Kruskal::default().solve(graph)
}
