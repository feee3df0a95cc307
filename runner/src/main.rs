extern crate kruskal_mst;

use kruskal_mst::{Graph, Kruskal, MstError, Prim, SpanningTreeSolver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::collections::HashSet;
use std::error::Error;
use std::io::{self, Write};
use std::time::{Duration, Instant};

const NUM_THREADS: usize = 6;
const GRAPH_SIZES: [usize; 4] = [100, 1_000, 5_000, 20_000];
const GRAPHS_PER_SIZE: u64 = 8;

fn sample_graph() -> Result<Graph, MstError> {
    let mut graph = Graph::new();
    graph.add_vertices(["A", "B", "C", "D", "E"])?;
    graph.add_edges([
        ("A", 3.0, "B"),
        ("A", 1.0, "E"),
        ("B", 5.0, "C"),
        ("B", 4.0, "E"),
        ("C", 6.0, "E"),
        ("C", 2.0, "D"),
        ("D", 7.0, "E"),
    ])?;
    Ok(graph)
}

/// Random connected graph with roughly `4 * vertices` edges.
fn generate_graph(seed: u64, vertices: usize) -> Result<Graph, MstError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<String> = (0..vertices).map(|i| format!("v{i}")).collect();
    let mut graph = Graph::new();
    graph.add_vertices(&labels)?;

    let mut pairs = HashSet::new();
    for i in 1..vertices {
        let j = rng.gen_range(0..i);
        pairs.insert((j, i));
        graph.add_edge(&labels[i], rng.gen_range(0.1..100.0), &labels[j])?;
    }
    for _ in 0..vertices * 3 {
        let a = rng.gen_range(0..vertices);
        let b = rng.gen_range(0..vertices);
        if a != b && pairs.insert((a.min(b), a.max(b))) {
            graph.add_edge(&labels[a], rng.gen_range(0.1..100.0), &labels[b])?;
        }
    }
    Ok(graph)
}

struct Measurement {
    kruskal_time: Duration,
    prim_time: Duration,
    agree: bool,
}

fn measure(graph: &Graph) -> Result<Measurement, MstError> {
    let now = Instant::now();
    let kruskal = Kruskal::default().solve(graph)?;
    let kruskal_time = now.elapsed();

    let now = Instant::now();
    let prim = Prim.solve(graph)?;
    let prim_time = now.elapsed();

    Ok(Measurement {
        kruskal_time,
        prim_time,
        agree: (kruskal.total_weight() - prim.total_weight()).abs() < 1e-6,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let graph = sample_graph()?;
    let tree = Kruskal::default().solve(&graph)?;
    print!("{}", tree.display(&graph));
    println!("Total weight: {}", tree.total_weight());

    let pool = ThreadPoolBuilder::new().num_threads(NUM_THREADS).build()?;
    let mut out = io::stdout().lock();
    writeln!(out, "Vertices\tEdges\tKruskalTime(s)\tPrimTime(s)\tAgree")?;

    for vertices in GRAPH_SIZES {
        let results: Vec<(usize, Measurement)> = pool.install(|| {
            (0..GRAPHS_PER_SIZE)
                .into_par_iter()
                .map(|seed| -> Result<(usize, Measurement), MstError> {
                    let graph = generate_graph(seed, vertices)?;
                    Ok((graph.edge_count(), measure(&graph)?))
                })
                .collect::<Result<_, MstError>>()
        })?;

        let count = results.len() as f64;
        let edges = results.iter().map(|(edges, _)| *edges).sum::<usize>() / results.len();
        let kruskal_time: f64 = results
            .iter()
            .map(|(_, m)| m.kruskal_time.as_secs_f64())
            .sum();
        let prim_time: f64 = results
            .iter()
            .map(|(_, m)| m.prim_time.as_secs_f64())
            .sum();
        let agree = results.iter().all(|(_, m)| m.agree);
        if !agree {
            log::error!("Kruskal and Prim disagree on a graph with {vertices} vertices");
        }

        writeln!(
            out,
            "{}\t{}\t{:.10}\t{:.10}\t{}",
            vertices,
            edges,
            kruskal_time / count,
            prim_time / count,
            agree
        )?;
    }
    Ok(())
}
