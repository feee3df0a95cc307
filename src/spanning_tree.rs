use crate::graph::{Edge, EdgeId, Graph, Vertex, VertexId};
use crate::Weight;
use std::fmt;

/// The edges chosen by a solver, in the order the solver chose them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpanningTree {
    edges: Vec<EdgeId>,
    rejected: Vec<EdgeId>,
    total_weight: Weight,
}

impl SpanningTree {
    pub(crate) fn new(graph: &Graph, edges: Vec<EdgeId>, rejected: Vec<EdgeId>) -> SpanningTree {
        let total_weight = edges
            .iter()
            .filter_map(|&id| graph.edge(id))
            .map(Edge::weight)
            .sum();
        SpanningTree {
            edges,
            rejected,
            total_weight,
        }
    }

    /// Accepted edges in acceptance order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Edges that would have closed a cycle, in the order they were rejected.
    pub fn rejected(&self) -> &[EdgeId] {
        &self.rejected
    }

    /// Number of accepted edges; `V - 1` for a connected graph.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Checks whether `edge` was accepted into the tree.
    ///
    /// # Arguments
    ///
    /// * `edge` - Id of an edge of the solved graph.
    ///
    /// # Returns
    ///
    /// `true` if the solver chose the edge, `false` if it was rejected or
    /// never reached.
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.edges.contains(&edge)
    }

    /// Sum of the accepted edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Pairs the tree with the graph it was solved from for rendering.
    pub fn display<'a>(&'a self, graph: &'a Graph) -> Display<'a> {
        Display { tree: self, graph }
    }

    /// One `"<label> - <weight> - <label>"` line per accepted edge.
    pub fn render(&self, graph: &Graph) -> String {
        self.display(graph).to_string()
    }
}

/// [`fmt::Display`] adapter returned by [`SpanningTree::display`].
pub struct Display<'a> {
    tree: &'a SpanningTree,
    graph: &'a Graph,
}

impl Display<'_> {
    fn label(&self, id: VertexId) -> &str {
        self.graph.vertex(id).map_or("?", Vertex::label)
    }
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.tree.edges.iter().filter_map(|&id| self.graph.edge(id)) {
            let (first, second) = edge.endpoints();
            writeln!(
                f,
                "{} - {} - {}",
                self.label(first),
                edge.weight(),
                self.label(second)
            )?;
        }
        Ok(())
    }
}
