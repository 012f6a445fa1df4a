use rand::Rng;

use super::graph::Graph;
use common::error::Error;
use common::types::{Edge, Weight};

/// Builds random directed graphs with a fixed out-degree target per node.
///
/// For every node `i`, `edges_per_node` draws are made: a uniform target in
/// `[0, node_count)` and a uniform weight in `[1, max_weight]`. A draw that
/// lands on `i` itself is dropped rather than retried, so a node may end up
/// with fewer than `edges_per_node` edges. Duplicate targets are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphGenerator {
    pub node_count: usize,
    pub edges_per_node: usize,
    pub max_weight: Weight,
}

impl GraphGenerator {
    /// Validates the parameters up front; every one of them must be positive.
    pub fn new(node_count: usize, edges_per_node: usize, max_weight: Weight) -> Result<Self, Error> {
        if node_count == 0 {
            return Err(Error::invalid_argument("node_count must be positive"));
        }
        if edges_per_node == 0 {
            return Err(Error::invalid_argument("edges_per_node must be positive"));
        }
        if max_weight == 0 {
            return Err(Error::invalid_argument("max_weight must be positive"));
        }

        Ok(Self {
            node_count,
            edges_per_node,
            max_weight,
        })
    }

    /// Draws a new graph from `rng`. The caller owns the generator, so
    /// seeding it identically reproduces the same graph.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Graph {
        let mut adjacency: Vec<Vec<Edge>> = Vec::with_capacity(self.node_count);

        for node in 0..self.node_count {
            let mut edges = Vec::with_capacity(self.edges_per_node);

            for _ in 0..self.edges_per_node {
                let target = rng.random_range(0..self.node_count);
                let weight = rng.random_range(1..=self.max_weight);

                if target != node {
                    edges.push(Edge::new(target, weight));
                }
            }

            adjacency.push(edges);
        }

        Graph::from_adjacency(adjacency)
    }
}
