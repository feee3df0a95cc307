use crate::error::GraphError;
use crate::Weight;
use std::collections::{HashMap, HashSet};

/// Dense index of a vertex inside the [`Graph`] that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in [`Graph::vertices`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// Dense index of an edge inside the [`Graph`] that created it.
///
/// Two edges are the same edge only if their ids are equal; edges with the
/// same endpoints and weight in different graphs are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Position of the edge in [`Graph::edges`].
    pub fn index(self) -> usize {
        self.0
    }
}

/// How vertex labels are normalized before they are stored or looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelCase {
    #[default]
    Upper,
    Lower,
    Preserve,
}

impl LabelCase {
    fn apply(self, label: &str) -> String {
        match self {
            LabelCase::Upper => label.to_uppercase(),
            LabelCase::Lower => label.to_lowercase(),
            LabelCase::Preserve => label.to_string(),
        }
    }
}

/// A labeled vertex and the vertices it shares an edge with.
#[derive(Debug, Clone)]
pub struct Vertex {
    id: VertexId,
    label: String,
    neighbours: Vec<VertexId>,
}

impl Vertex {
    /// Returns the id the owning graph assigned to this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the canonical label, already normalized by the graph's
    /// [`LabelCase`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Adjacent vertices in edge insertion order.
    pub fn neighbours(&self) -> &[VertexId] {
        &self.neighbours
    }
}

/// An undirected weighted connection between two distinct vertices.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    first: VertexId,
    second: VertexId,
    weight: Weight,
}

impl Edge {
    /// Returns the identity of this edge. Compare edges by id, never by value.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoints in the order they were given to [`Graph::add_edge`].
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.first, self.second)
    }

    /// Returns the weight, always finite and strictly positive.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite to `vertex`, if `vertex` is an endpoint at all.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.first {
            Some(self.second)
        } else if vertex == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

fn pair_key(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An undirected weighted graph with unique vertex labels.
///
/// The graph only holds structure. Solving borrows it immutably, so one graph
/// can be solved any number of times, from any number of threads.
///
/// # Example
///
/// ```
/// use kruskal_mst::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["a", "b"]).unwrap();
/// graph.add_edge("A", 2.5, "b").unwrap();
///
/// let a = graph.vertex_id("a").unwrap();
/// let b = graph.vertex_id("B").unwrap();
/// assert_eq!(graph.weight_between(a, b), Some(2.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    labels: HashMap<String, VertexId>,
    pairs: HashMap<(VertexId, VertexId), EdgeId>,
    label_case: LabelCase,
}

impl Graph {
    /// Creates an empty graph that upper-cases labels.
    pub fn new() -> Graph {
        Graph::with_label_case(LabelCase::Upper)
    }

    /// Constructs an empty graph with a chosen label normalization.
    ///
    /// # Arguments
    ///
    /// * `label_case` - How labels are normalized on insertion and lookup.
    ///
    /// # Returns
    ///
    /// An empty `Graph`.
    pub fn with_label_case(label_case: LabelCase) -> Graph {
        Graph {
            vertices: Vec::new(),
            edges: Vec::new(),
            labels: HashMap::new(),
            pairs: HashMap::new(),
            label_case,
        }
    }

    pub fn label_case(&self) -> LabelCase {
        self.label_case
    }

    fn canonical_label(&self, label: &str) -> Result<String, GraphError> {
        if label.trim().is_empty() {
            return Err(GraphError::InvalidLabel {
                label: label.to_string(),
            });
        }
        Ok(self.label_case.apply(label))
    }

    fn insert_vertex(&mut self, label: String) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.labels.insert(label.clone(), id);
        self.vertices.push(Vertex {
            id,
            label,
            neighbours: Vec::new(),
        });
        id
    }

    /// Adds a single vertex.
    ///
    /// # Arguments
    ///
    /// * `label` - Vertex label; normalized before the uniqueness check.
    ///
    /// # Returns
    ///
    /// The id of the new vertex, `InvalidLabel` for an empty label or
    /// `DuplicateVertex` if the normalized label is taken.
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId, GraphError> {
        let label = self.canonical_label(label)?;
        if self.labels.contains_key(&label) {
            return Err(GraphError::DuplicateVertex { label });
        }
        Ok(self.insert_vertex(label))
    }

    /// Adds every label or none of them.
    ///
    /// The batch is validated as a whole first: labels must be valid, unique
    /// among themselves after normalization, and absent from the graph.
    pub fn add_vertices<I, S>(&mut self, labels: I) -> Result<Vec<VertexId>, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut batch = Vec::new();
        let mut seen = HashSet::new();
        for label in labels {
            let label = self.canonical_label(label.as_ref())?;
            if self.labels.contains_key(&label) || !seen.insert(label.clone()) {
                return Err(GraphError::DuplicateVertex { label });
            }
            batch.push(label);
        }

        Ok(batch
            .into_iter()
            .map(|label| self.insert_vertex(label))
            .collect())
    }

    /// Connects two existing vertices with a positive, finite weight.
    ///
    /// Checks run in this order: label validity, self-loop, vertex existence,
    /// weight, duplicate pair.
    pub fn add_edge(
        &mut self,
        first_label: &str,
        weight: Weight,
        second_label: &str,
    ) -> Result<EdgeId, GraphError> {
        let first_label = self.canonical_label(first_label)?;
        let second_label = self.canonical_label(second_label)?;
        if first_label == second_label {
            return Err(GraphError::SelfLoop { label: first_label });
        }

        let first = self.lookup(&first_label)?;
        let second = self.lookup(&second_label)?;

        if !weight.is_finite() || weight <= 0.0 {
            return Err(GraphError::InvalidWeight { weight });
        }

        if let Some(existing) = self.edge_between(first, second) {
            return Err(GraphError::DuplicateEdge {
                first: first_label,
                second: second_label,
                existing: existing.weight,
            });
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge {
            id,
            first,
            second,
            weight,
        });
        self.pairs.insert(pair_key(first, second), id);
        self.vertices[first.0].neighbours.push(second);
        self.vertices[second.0].neighbours.push(first);
        Ok(id)
    }

    /// Adds edges one by one; the first failure stops the batch and edges
    /// added before it stay in the graph.
    pub fn add_edges<I, A, B>(&mut self, triples: I) -> Result<Vec<EdgeId>, GraphError>
    where
        I: IntoIterator<Item = (A, Weight, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        triples
            .into_iter()
            .map(|(first, weight, second)| self.add_edge(first.as_ref(), weight, second.as_ref()))
            .collect()
    }

    fn lookup(&self, canonical: &str) -> Result<VertexId, GraphError> {
        self.labels
            .get(canonical)
            .copied()
            .ok_or_else(|| GraphError::VertexNotFound {
                label: canonical.to_string(),
            })
    }

    /// Looks a vertex up by label, normalizing the label first.
    pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id.0])
    }

    /// Finds the id of the vertex labeled `label`.
    ///
    /// # Arguments
    ///
    /// * `label` - Label in any case; it is normalized before the lookup.
    ///
    /// # Returns
    ///
    /// The vertex id, or `None` for unknown or empty labels.
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        let label = self.canonical_label(label).ok()?;
        self.labels.get(&label).copied()
    }

    /// Weight of the edge joining `first` and `second`, in either direction.
    pub fn weight_between(&self, first: VertexId, second: VertexId) -> Option<Weight> {
        self.edge_between(first, second).map(Edge::weight)
    }

    /// Finds the edge joining two vertices.
    ///
    /// # Arguments
    ///
    /// * `first` - One endpoint.
    /// * `second` - The other endpoint; the order of the two does not matter.
    ///
    /// # Returns
    ///
    /// The connecting edge, or `None` if the pair is not connected.
    pub fn edge_between(&self, first: VertexId, second: VertexId) -> Option<&Edge> {
        self.pairs
            .get(&pair_key(first, second))
            .map(|id| &self.edges[id.0])
    }

    /// Vertex by id, `None` for ids from another graph.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Edge by id, `None` for ids from another graph.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Neighbours of `id`, or an empty slice for an unknown id.
    pub fn neighbours(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::neighbours).unwrap_or(&[])
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c"]).unwrap();
        graph
    }

    #[test]
    fn labels_are_upper_cased_by_default() {
        let graph = abc();
        let labels: Vec<_> = graph.vertices().iter().map(Vertex::label).collect();
        assert_eq!(labels, ["A", "B", "C"]);
        assert!(graph.vertex_by_label("b").is_some());
    }

    #[test]
    fn preserve_case_keeps_labels_distinct() {
        let mut graph = Graph::with_label_case(LabelCase::Preserve);
        graph.add_vertex("a").unwrap();
        graph.add_vertex("A").unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(graph.vertex_by_label("x").is_none());
    }

    #[test]
    fn add_vertex_rejects_duplicates_after_normalization() {
        let mut graph = abc();
        assert_eq!(
            graph.add_vertex("A"),
            Err(GraphError::DuplicateVertex {
                label: "A".to_string()
            })
        );
        assert_eq!(
            graph.add_vertex("  "),
            Err(GraphError::InvalidLabel {
                label: "  ".to_string()
            })
        );
    }

    #[test]
    fn add_vertices_is_atomic() {
        let mut graph = abc();
        let err = graph.add_vertices(["d", "e", "D"]).unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateVertex {
                label: "D".to_string()
            }
        );
        assert_eq!(graph.vertex_count(), 3);

        let err = graph.add_vertices(["x", "c"]).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateVertex { .. }));
        assert!(graph.vertex_by_label("x").is_none());
    }

    #[test]
    fn add_edge_validates_in_order() {
        let mut graph = abc();
        assert!(matches!(
            graph.add_edge("", 1.0, "a"),
            Err(GraphError::InvalidLabel { .. })
        ));
        assert!(matches!(
            graph.add_edge("a", -1.0, "A"),
            Err(GraphError::SelfLoop { .. })
        ));
        assert_eq!(
            graph.add_edge("a", 1.0, "z"),
            Err(GraphError::VertexNotFound {
                label: "Z".to_string()
            })
        );
        for weight in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                graph.add_edge("a", weight, "b"),
                Err(GraphError::InvalidWeight { .. })
            ));
        }
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_edge_is_rejected_in_both_directions() {
        let mut graph = abc();
        graph.add_edge("a", 4.0, "b").unwrap();
        let err = graph.add_edge("B", 1.0, "A").unwrap_err();
        assert_eq!(
            err,
            GraphError::DuplicateEdge {
                first: "B".to_string(),
                second: "A".to_string(),
                existing: 4.0,
            }
        );
        assert!(graph.add_edge("a", 4.0, "b").is_err());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn add_edge_links_neighbours_symmetrically() {
        let mut graph = abc();
        graph.add_edge("a", 1.0, "b").unwrap();
        graph.add_edge("c", 2.0, "a").unwrap();
        let a = graph.vertex_id("a").unwrap();
        let b = graph.vertex_id("b").unwrap();
        let c = graph.vertex_id("c").unwrap();
        assert_eq!(graph.neighbours(a), [b, c]);
        assert_eq!(graph.neighbours(b), [a]);
        assert_eq!(graph.neighbours(c), [a]);
        assert_eq!(graph.weight_between(a, c), Some(2.0));
        assert_eq!(graph.weight_between(c, a), Some(2.0));
        assert_eq!(graph.weight_between(b, c), None);
    }

    #[test]
    fn add_edges_keeps_edges_before_the_failure() {
        let mut graph = abc();
        let err = graph
            .add_edges([("a", 1.0, "b"), ("b", 2.0, "c"), ("c", 3.0, "q"), ("a", 4.0, "c")])
            .unwrap_err();
        assert!(matches!(err, GraphError::VertexNotFound { .. }));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn edge_opposite_endpoint() {
        let mut graph = abc();
        let id = graph.add_edge("a", 1.0, "b").unwrap();
        let edge = graph.edge(id).unwrap();
        let (a, b) = edge.endpoints();
        assert_eq!(edge.opposite(a), Some(b));
        assert_eq!(edge.opposite(b), Some(a));
        assert_eq!(edge.opposite(graph.vertex_id("c").unwrap()), None);
    }
}
