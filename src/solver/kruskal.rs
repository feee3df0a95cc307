use super::disjoint_set::DisjointSet;
use super::SpanningTreeSolver;
use crate::branch::{Branch, BranchId};
use crate::error::SolveError;
use crate::graph::{EdgeId, Graph, VertexId};
use crate::spanning_tree::SpanningTree;

/// Kruskal's algorithm with explicit branch tracking.
///
/// Edges are visited in ascending weight order (ties keep insertion order).
/// Every accepted edge either starts a new [`Branch`], extends the branch of
/// its one visited endpoint, or merges two branches. When two branches merge,
/// the one created first survives and receives the merging edge followed by
/// all edges of the other branch. An edge whose endpoints already share a
/// branch closes a cycle and is rejected.
///
/// # Example
///
/// ```
/// use kruskal_mst::{Graph, Kruskal, SpanningTreeSolver};
///
/// let mut graph = Graph::new();
/// graph.add_vertices(["a", "b", "c"]).unwrap();
/// graph.add_edges([("a", 1.0, "b"), ("b", 2.0, "c"), ("a", 3.0, "c")]).unwrap();
///
/// let tree = Kruskal::default().solve(&graph).unwrap();
/// assert_eq!(tree.total_weight(), 3.0);
/// assert_eq!(tree.render(&graph), "A - 1 - B\nB - 2 - C\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Kruskal {
    early_exit: bool,
}

impl Default for Kruskal {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Kruskal {
    /// Constructs a new `Kruskal` solver.
    ///
    /// # Arguments
    ///
    /// * `early_exit` - Stop scanning as soon as `V - 1` edges are accepted.
    ///   The tree is the same either way; only the list of rejected edges is
    ///   shorter. [`Kruskal::default`] scans every edge.
    pub fn new(early_exit: bool) -> Kruskal {
        Kruskal { early_exit }
    }

    /// Runs the algorithm and returns the surviving branch instead of a tree.
    ///
    /// The branch keeps merge order: a surviving branch lists its own edges,
    /// then the merging edge, then the edges it absorbed. A lone vertex has a
    /// trivial spanning tree but never forms a branch, hence `Ok(None)`.
    pub fn final_branch(&self, graph: &Graph) -> Result<Option<Branch>, SolveError> {
        Ok(self.run(graph)?.branch)
    }

    fn run(&self, graph: &Graph) -> Result<Outcome, SolveError> {
        if graph.is_empty() {
            log::warn!("Cannot build a spanning tree of an empty graph");
            return Err(SolveError::EmptyGraph);
        }

        let mut run = Run::new(graph);
        for edge in sorted_edges(graph) {
            if self.early_exit && run.accepted.len() + 1 == graph.vertex_count() {
                break;
            }
            run.process(edge);
        }
        run.finish()
    }
}

impl SpanningTreeSolver for Kruskal {
    fn solve(&self, graph: &Graph) -> Result<SpanningTree, SolveError> {
        let outcome = self.run(graph)?;
        let tree = SpanningTree::new(graph, outcome.accepted, outcome.rejected);
        log::info!(
            "Spanning tree built: {} edges, {} rejected, total weight {}",
            tree.len(),
            tree.rejected().len(),
            tree.total_weight()
        );
        Ok(tree)
    }
}

/// Edge ids sorted ascending by weight. `sort_by` is stable, so equal
/// weights keep insertion order.
fn sorted_edges(graph: &Graph) -> Vec<EdgeId> {
    let mut edges: Vec<_> = graph.edges().iter().collect();
    edges.sort_by(|a, b| a.weight().total_cmp(&b.weight()));
    edges.into_iter().map(|edge| edge.id()).collect()
}

struct Outcome {
    branch: Option<Branch>,
    accepted: Vec<EdgeId>,
    rejected: Vec<EdgeId>,
}

/// State of a single solve. Nothing here outlives the call.
struct Run<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    sets: DisjointSet,
    /// Live branches, stored at the slot of their union-find representative.
    branches: Vec<Option<Branch>>,
    live: usize,
    next_branch: usize,
    accepted: Vec<EdgeId>,
    rejected: Vec<EdgeId>,
}

impl<'g> Run<'g> {
    fn new(graph: &'g Graph) -> Run<'g> {
        let vertices = graph.vertex_count();
        Run {
            graph,
            visited: vec![false; vertices],
            sets: DisjointSet::new(vertices),
            branches: vec![None; vertices],
            live: 0,
            next_branch: 0,
            accepted: Vec::new(),
            rejected: Vec::new(),
        }
    }

    fn process(&mut self, edge: EdgeId) {
        let Some((first, second)) = self.graph.edge(edge).map(|edge| edge.endpoints()) else {
            return;
        };

        match (self.visited[first.index()], self.visited[second.index()]) {
            (false, false) => self.open_branch(edge, first, second),
            (true, false) => self.extend_branch(edge, first, second),
            (false, true) => self.extend_branch(edge, second, first),
            (true, true) => self.merge_branches(edge, first, second),
        }
    }

    fn open_branch(&mut self, edge: EdgeId, first: VertexId, second: VertexId) {
        let id = BranchId(self.next_branch);
        self.next_branch += 1;
        log::debug!("Opening branch {} with edge {:?}", id.get(), edge);

        let root = self.sets.union(first.index(), second.index());
        self.branches[root] = Some(Branch::new(id, edge));
        self.live += 1;
        self.accept(edge, first, second);
    }

    fn extend_branch(&mut self, edge: EdgeId, visited: VertexId, fresh: VertexId) {
        let Some(mut branch) = self.take_branch(visited) else {
            log::error!("Visited vertex {visited:?} has no branch, skipping edge {edge:?}");
            return;
        };
        branch.push(edge);

        let root = self.sets.union(visited.index(), fresh.index());
        self.branches[root] = Some(branch);
        self.accept(edge, visited, fresh);
    }

    fn merge_branches(&mut self, edge: EdgeId, first: VertexId, second: VertexId) {
        let first_root = self.sets.find(first.index());
        let second_root = self.sets.find(second.index());
        if first_root == second_root {
            log::trace!("Rejecting edge {:?}: it closes a cycle", edge);
            self.rejected.push(edge);
            return;
        }

        let Some(a) = self.branches[first_root].take() else {
            log::error!("Visited vertex {first:?} has no branch, skipping edge {edge:?}");
            return;
        };
        let Some(b) = self.branches[second_root].take() else {
            log::error!("Visited vertex {second:?} has no branch, skipping edge {edge:?}");
            self.branches[first_root] = Some(a);
            return;
        };
        let (mut root, absorbed) = if a.id() < b.id() { (a, b) } else { (b, a) };
        log::debug!(
            "Merging branch {} into branch {} via edge {:?}",
            absorbed.id().get(),
            root.id().get(),
            edge
        );
        root.push(edge);
        root.absorb(absorbed);

        let slot = self.sets.union(first_root, second_root);
        self.branches[slot] = Some(root);
        self.live -= 1;
        self.accept(edge, first, second);
    }

    fn take_branch(&mut self, vertex: VertexId) -> Option<Branch> {
        let root = self.sets.find(vertex.index());
        self.branches[root].take()
    }

    fn accept(&mut self, edge: EdgeId, first: VertexId, second: VertexId) {
        self.visited[first.index()] = true;
        self.visited[second.index()] = true;
        self.accepted.push(edge);
    }

    fn finish(self) -> Result<Outcome, SolveError> {
        let vertices = self.graph.vertex_count();
        if self.live == 0 {
            if vertices == 1 {
                return Ok(Outcome {
                    branch: None,
                    accepted: self.accepted,
                    rejected: self.rejected,
                });
            }
            log::warn!("No spanning branches were built for {vertices} vertices");
            return Err(SolveError::NoSpanningBranches { vertices });
        }

        let isolated = self.visited.iter().filter(|&&visited| !visited).count();
        if self.live > 1 || isolated > 0 {
            log::warn!(
                "Graph is disconnected: {} branches, {isolated} isolated vertices",
                self.live
            );
            return Err(SolveError::DisconnectedGraph {
                branches: self.live,
                isolated,
            });
        }

        let branch = self.branches.into_iter().flatten().next();
        Ok(Outcome {
            branch,
            accepted: self.accepted,
            rejected: self.rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_vertices(["A", "B", "C", "D", "E"]).unwrap();
        graph
            .add_edges([
                ("A", 3.0, "B"),
                ("A", 1.0, "E"),
                ("B", 5.0, "C"),
                ("B", 4.0, "E"),
                ("C", 6.0, "E"),
                ("C", 2.0, "D"),
                ("D", 7.0, "E"),
            ])
            .unwrap();
        graph
    }

    fn edge(graph: &Graph, first: &str, second: &str) -> EdgeId {
        let first = graph.vertex_id(first).unwrap();
        let second = graph.vertex_id(second).unwrap();
        graph.edge_between(first, second).unwrap().id()
    }

    #[test]
    fn sample_graph_accepts_edges_in_weight_order() {
        let graph = sample_graph();
        let tree = Kruskal::new(false).solve(&graph).unwrap();

        let expected = [
            edge(&graph, "A", "E"),
            edge(&graph, "C", "D"),
            edge(&graph, "A", "B"),
            edge(&graph, "B", "C"),
        ];
        assert_eq!(tree.edges(), expected);
        assert_eq!(tree.total_weight(), 11.0);
        assert_eq!(
            tree.rejected(),
            [
                edge(&graph, "B", "E"),
                edge(&graph, "C", "E"),
                edge(&graph, "D", "E"),
            ]
        );
        assert_eq!(
            tree.render(&graph),
            "A - 1 - E\nC - 2 - D\nA - 3 - B\nB - 5 - C\n"
        );
    }

    #[test]
    fn default_solver_rejects_every_cycle_edge() {
        let graph = sample_graph();
        let tree = crate::minimum_spanning_tree(&graph).unwrap();
        assert_eq!(
            tree.rejected(),
            [
                edge(&graph, "B", "E"),
                edge(&graph, "C", "E"),
                edge(&graph, "D", "E"),
            ]
        );
    }

    #[test]
    fn early_exit_skips_the_trailing_cycle_edges() {
        let graph = sample_graph();
        let full = Kruskal::default().solve(&graph).unwrap();
        let early = Kruskal::new(true).solve(&graph).unwrap();

        assert_eq!(early.edges(), full.edges());
        assert_eq!(full.rejected().len(), 3);
        assert_eq!(early.rejected(), [edge(&graph, "B", "E")]);
    }

    #[test]
    fn surviving_branch_keeps_merge_order() {
        let graph = sample_graph();
        let branch = Kruskal::default().final_branch(&graph).unwrap().unwrap();

        assert_eq!(branch.id(), BranchId(0));
        assert_eq!(
            branch.edges(),
            [
                edge(&graph, "A", "E"),
                edge(&graph, "A", "B"),
                edge(&graph, "B", "C"),
                edge(&graph, "C", "D"),
            ]
        );
        assert_eq!(branch.members(&graph).len(), graph.vertex_count());
    }

    #[test]
    fn older_branch_wins_a_merge_from_either_endpoint() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c", "d"]).unwrap();
        // Branch 0 is {c, d}, branch 1 is {a, b}; the merging edge names a first.
        graph
            .add_edges([("c", 1.0, "d"), ("a", 2.0, "b"), ("a", 3.0, "d")])
            .unwrap();

        let branch = Kruskal::default().final_branch(&graph).unwrap().unwrap();
        assert_eq!(branch.id(), BranchId(0));
        assert_eq!(
            branch.edges(),
            [
                edge(&graph, "c", "d"),
                edge(&graph, "a", "d"),
                edge(&graph, "a", "b"),
            ]
        );
    }

    fn run_all<'g>(graph: &'g Graph) -> Run<'g> {
        let mut run = Run::new(graph);
        for edge in sorted_edges(graph) {
            run.process(edge);
        }
        run
    }

    fn live_ids(run: &Run) -> Vec<BranchId> {
        let mut ids: Vec<_> = run.branches.iter().flatten().map(Branch::id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn branch_ids_are_not_reused_after_merges() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c", "d", "e", "f"]).unwrap();
        // Branches 0 and 1 merge, leaving one live branch; e-f opens a new
        // branch that must not take id 1 again.
        graph
            .add_edges([
                ("a", 1.0, "b"),
                ("c", 2.0, "d"),
                ("b", 3.0, "c"),
                ("e", 4.0, "f"),
            ])
            .unwrap();

        let run = run_all(&graph);
        assert_eq!(run.live, 2);
        assert_eq!(live_ids(&run), [BranchId(0), BranchId(2)]);

        let f = graph.vertex_id("f").unwrap();
        let slot = run.branches.iter().flatten().find(|b| b.id() == BranchId(2));
        assert_eq!(slot.unwrap().edges(), [edge(&graph, "e", "f")]);
        assert!(slot.unwrap().contains_vertex(&graph, f));
    }

    #[test]
    fn merge_with_a_missing_branch_keeps_the_other_one() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c", "d"]).unwrap();
        graph
            .add_edges([("a", 1.0, "b"), ("c", 2.0, "d"), ("b", 3.0, "c")])
            .unwrap();
        let (ab, cd, bc) = (
            edge(&graph, "a", "b"),
            edge(&graph, "c", "d"),
            edge(&graph, "b", "c"),
        );
        let b = graph.vertex_id("b").unwrap();
        let c = graph.vertex_id("c").unwrap();

        let mut run = Run::new(&graph);
        run.process(ab);
        run.process(cd);
        let broken = run.sets.find(c.index());
        run.branches[broken] = None;

        run.merge_branches(bc, b, c);
        assert_eq!(live_ids(&run), [BranchId(0)]);
        assert_eq!(run.accepted, [ab, cd]);
        assert_eq!(run.live, 2);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c"]).unwrap();
        graph
            .add_edges([("b", 1.0, "c"), ("a", 1.0, "b"), ("a", 1.0, "c")])
            .unwrap();

        let tree = Kruskal::new(false).solve(&graph).unwrap();
        assert_eq!(tree.edges(), [edge(&graph, "b", "c"), edge(&graph, "a", "b")]);
        assert_eq!(tree.rejected(), [edge(&graph, "a", "c")]);
    }

    #[test]
    fn empty_graph_is_an_error() {
        assert_eq!(
            Kruskal::default().solve(&Graph::new()),
            Err(SolveError::EmptyGraph)
        );
    }

    #[test]
    fn vertices_without_edges_have_no_branches() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b"]).unwrap();
        assert_eq!(
            Kruskal::default().solve(&graph),
            Err(SolveError::NoSpanningBranches { vertices: 2 })
        );
    }

    #[test]
    fn single_vertex_yields_empty_tree() {
        let mut graph = Graph::new();
        graph.add_vertex("a").unwrap();

        let tree = Kruskal::default().solve(&graph).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.total_weight(), 0.0);
        assert_eq!(Kruskal::default().final_branch(&graph), Ok(None));
    }

    #[test]
    fn two_components_are_disconnected() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c", "d"]).unwrap();
        graph.add_edges([("a", 1.0, "b"), ("c", 1.0, "d")]).unwrap();
        assert_eq!(
            Kruskal::default().solve(&graph),
            Err(SolveError::DisconnectedGraph {
                branches: 2,
                isolated: 0
            })
        );
    }

    #[test]
    fn isolated_vertex_next_to_one_branch_is_disconnected() {
        let mut graph = Graph::new();
        graph.add_vertices(["a", "b", "c"]).unwrap();
        graph.add_edge("a", 1.0, "b").unwrap();
        assert_eq!(
            Kruskal::default().solve(&graph),
            Err(SolveError::DisconnectedGraph {
                branches: 1,
                isolated: 1
            })
        );
    }

    #[test]
    fn solving_twice_gives_the_same_tree() {
        let graph = sample_graph();
        let solver = Kruskal::default();
        assert_eq!(solver.solve(&graph), solver.solve(&graph));
    }
}
