use crate::graph::{EdgeId, Graph, VertexId};

/// Creation-order identifier of a [`Branch`]. Ids are never reused within a
/// solve, so a lower id always means an older branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(pub(crate) usize);

impl BranchId {
    /// Returns the raw creation counter value.
    pub fn get(self) -> usize {
        self.0
    }
}

/// A group of vertices already joined by accepted edges during a solve.
///
/// Membership is not stored; it is derived from the owned edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    id: BranchId,
    edges: Vec<EdgeId>,
}

impl Branch {
    pub(crate) fn new(id: BranchId, edge: EdgeId) -> Branch {
        Branch {
            id,
            edges: vec![edge],
        }
    }

    /// Returns the creation-order id of this branch.
    pub fn id(&self) -> BranchId {
        self.id
    }

    /// Owned edges: the branch's own edges in acceptance order, followed by
    /// the merging edge and absorbed edges for every merge it won.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn push(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    /// Moves every edge of `other` to the end of this branch.
    pub(crate) fn absorb(&mut self, other: Branch) {
        self.edges.extend(other.edges);
    }

    /// Distinct endpoints of the owned edges, in first-seen order.
    pub fn members(&self, graph: &Graph) -> Vec<VertexId> {
        let mut members = Vec::new();
        for (first, second) in self.endpoints(graph) {
            for vertex in [first, second] {
                if !members.contains(&vertex) {
                    members.push(vertex);
                }
            }
        }
        members
    }

    /// Checks whether `vertex` is an endpoint of any owned edge.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph the branch was built from.
    /// * `vertex` - The vertex to look for.
    pub fn contains_vertex(&self, graph: &Graph, vertex: VertexId) -> bool {
        self.endpoints(graph)
            .any(|(first, second)| first == vertex || second == vertex)
    }

    fn endpoints<'a>(&'a self, graph: &'a Graph) -> impl Iterator<Item = (VertexId, VertexId)> + 'a {
        self.edges
            .iter()
            .filter_map(|&id| graph.edge(id))
            .map(|edge| edge.endpoints())
    }
}
