//! Minimum spanning trees of weighted undirected graphs.
//!
//! Build a [`Graph`] from labeled vertices and positively weighted edges,
//! then hand it to a [`SpanningTreeSolver`]. [`Kruskal`] is the main engine;
//! [`Prim`] is an independent reference implementation.
//!
//! ```
//! use kruskal_mst::{minimum_spanning_tree, Graph, MstError};
//!
//! fn cheapest_network() -> Result<f64, MstError> {
//!     let mut graph = Graph::new();
//!     graph.add_vertices(["A", "B", "C", "D", "E"])?;
//!     graph.add_edges([
//!         ("A", 3.0, "B"),
//!         ("A", 1.0, "E"),
//!         ("B", 5.0, "C"),
//!         ("B", 4.0, "E"),
//!         ("C", 6.0, "E"),
//!         ("C", 2.0, "D"),
//!         ("D", 7.0, "E"),
//!     ])?;
//!     Ok(minimum_spanning_tree(&graph)?.total_weight())
//! }
//!
//! assert_eq!(cheapest_network().unwrap(), 11.0);
//! ```
pub use branch::{Branch, BranchId};
pub use error::{GraphError, MstError, SolveError};
pub use graph::{Edge, EdgeId, Graph, LabelCase, Vertex, VertexId};
pub use solver::{minimum_spanning_tree, Kruskal, Prim, SpanningTreeSolver};
pub use spanning_tree::SpanningTree;

mod branch;
mod error;
mod graph;
pub mod solver;
pub mod spanning_tree;

/// Edge weight. Accepted weights are always finite and strictly positive.
pub type Weight = f64;
