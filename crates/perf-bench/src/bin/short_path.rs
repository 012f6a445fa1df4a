use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::env;
use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use sssp_core::DijkstraSolver;
use sssp_core::traits::ShortestPathSolver;

fn main() {
    let argv: Vec<String> = env::args().collect();
    let (program, args) = split_program_args(&argv);
    let iterations = match parse_iterations(args) {
        Ok(n) => n,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: {} <iterations>", program);
            std::process::exit(1);
        }
    };

    let mut rng = SmallRng::from_os_rng();

    let build_start = Instant::now();
    let graph = match generate_benchmark_graph(&mut rng) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let build_time = build_start.elapsed();

    println!(
        "--- Shortest Path Benchmark ({} nodes, {} edges) ---",
        graph.node_count(),
        graph.edge_count()
    );
    println!("Graph built in {:?}", build_time);

    let solver = DijkstraSolver;

    for i in 0..iterations {
        let start_time = Instant::now();

        match solver.random_query(&graph, &mut rng) {
            Ok(report) => println!("{}", black_box(report)),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }

        let elapsed_time = start_time.elapsed();
        println!(
            "Iteration {} completed in {:.6} seconds",
            i + 1,
            elapsed_time.as_secs_f64()
        );
    }
}
