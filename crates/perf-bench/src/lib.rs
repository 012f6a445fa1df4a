// ----------------------------
// Shortest-path benchmark setup
// ----------------------------

use common::error::Error;
use common::types::Weight;
use rand::Rng;
use sssp_core::{Graph, GraphGenerator};

pub const NODE_COUNT: usize = 10_000;
pub const EDGES_PER_NODE: usize = 10;
pub const MAX_WEIGHT: Weight = 100;

/// Builds the fixed-size benchmark graph once; queries then reuse it.
pub fn generate_benchmark_graph<R: Rng + ?Sized>(rng: &mut R) -> Result<Graph, Error> {
    Ok(GraphGenerator::new(NODE_COUNT, EDGES_PER_NODE, MAX_WEIGHT)?.generate(rng))
}

/// Splits argv into the program name and the remaining arguments. An empty
/// argv falls back to the binary's name.
pub fn split_program_args(args: &[String]) -> (&str, &[String]) {
    let program = args.first().map(String::as_str).unwrap_or("short_path");
    (program, args.get(1..).unwrap_or_default())
}

/// Parses `<iterations>` from the argument list (program name excluded).
///
/// Exactly one strictly positive integer is accepted.
pub fn parse_iterations(args: &[String]) -> Result<usize, String> {
    let [raw] = args else {
        return Err("expected exactly one argument: <iterations>".to_string());
    };

    match raw.parse::<usize>() {
        Ok(0) => Err("Number of iterations must be positive!".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number of iterations: {}", raw)),
    }
}
