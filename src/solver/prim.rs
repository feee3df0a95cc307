use super::SpanningTreeSolver;
use crate::error::SolveError;
use crate::graph::{EdgeId, Graph, VertexId};
use crate::spanning_tree::SpanningTree;
use crate::Weight;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Lazy Prim's algorithm, grown from the first inserted vertex.
///
/// Mostly useful as an independent check on [`Kruskal`](super::Kruskal): both
/// produce trees of the same total weight. Edges are listed in the order
/// Prim adds them and nothing is reported as rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prim;

/// Heap entry ordered so that [`BinaryHeap`] pops the lightest edge first,
/// breaking ties by insertion order.
struct Candidate {
    weight: Weight,
    edge: EdgeId,
    to: VertexId,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.edge.cmp(&self.edge))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl SpanningTreeSolver for Prim {
    fn solve(&self, graph: &Graph) -> Result<SpanningTree, SolveError> {
        let Some(start) = graph.vertices().first().map(|vertex| vertex.id()) else {
            return Err(SolveError::EmptyGraph);
        };

        let mut incident: Vec<Vec<EdgeId>> = vec![Vec::new(); graph.vertex_count()];
        for edge in graph.edges() {
            let (first, second) = edge.endpoints();
            incident[first.index()].push(edge.id());
            incident[second.index()].push(edge.id());
        }

        let mut in_tree = vec![false; graph.vertex_count()];
        let mut heap = BinaryHeap::new();
        let mut accepted = Vec::new();
        let mut reached = 1;

        enter(graph, &incident, &mut in_tree, &mut heap, start);
        while let Some(candidate) = heap.pop() {
            if in_tree[candidate.to.index()] {
                continue;
            }
            accepted.push(candidate.edge);
            reached += 1;
            enter(graph, &incident, &mut in_tree, &mut heap, candidate.to);
        }

        if reached < graph.vertex_count() {
            return Err(SolveError::DisconnectedGraph {
                branches: 1,
                isolated: graph.vertex_count() - reached,
            });
        }
        Ok(SpanningTree::new(graph, accepted, Vec::new()))
    }
}

/// Marks `vertex` as part of the tree and queues every edge leaving it.
fn enter(
    graph: &Graph,
    incident: &[Vec<EdgeId>],
    in_tree: &mut [bool],
    heap: &mut BinaryHeap<Candidate>,
    vertex: VertexId,
) {
    in_tree[vertex.index()] = true;
    for &id in &incident[vertex.index()] {
        let Some(edge) = graph.edge(id) else {
            continue;
        };
        if let Some(to) = edge.opposite(vertex) {
            heap.push(Candidate {
                weight: edge.weight(),
                edge: id,
                to,
            });
        }
    }
}
