pub mod generator;
pub mod graph;
pub mod solver;
pub mod traits;

pub use generator::GraphGenerator;
pub use graph::Graph;
pub use solver::{DijkstraSolver, DistanceTable, pick_endpoints};
