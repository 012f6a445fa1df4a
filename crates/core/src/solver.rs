use rand::Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::graph::Graph;
use super::traits::ShortestPathSolver;
use common::{
    error::Error,
    types::{Distance, INFINITY, NodeId, PathOutcome},
};

/// Best known distances from one start node, created fresh per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    start: NodeId,
    distances: Vec<Distance>,
}

impl DistanceTable {
    fn new(num_nodes: usize, start: NodeId) -> Self {
        let mut distances = vec![INFINITY; num_nodes];
        distances[start] = 0;
        Self { start, distances }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance to `node`, `None` when unreachable or out of range.
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node).copied().filter(|&d| d != INFINITY)
    }

    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if `node` is outside the table.
    pub fn outcome(&self, node: NodeId) -> Result<PathOutcome, Error> {
        match self.distances.get(node) {
            None => Err(Error::NodeIndexOutOfBounds(node)),
            Some(&INFINITY) => Ok(PathOutcome::Unreachable),
            Some(&d) => Ok(PathOutcome::Reachable(d)),
        }
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITY).count()
    }

    /// Raw table; unreachable nodes hold `INFINITY`.
    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }
}

/// Picks a random `(start, end)` pair with `start != end`.
///
/// `end` is drawn from the `n - 1` nodes other than `start`, so selection
/// always terminates in one draw each.
///
/// # Errors
/// Returns `Error::InvalidArgument` if the graph has fewer than two nodes.
pub fn pick_endpoints<R: Rng + ?Sized>(graph: &Graph, rng: &mut R) -> Result<(NodeId, NodeId), Error> {
    let n = graph.node_count();
    if n < 2 {
        return Err(Error::invalid_argument(format!(
            "need at least 2 nodes to pick distinct endpoints, graph has {}",
            n
        )));
    }

    let start = rng.random_range(0..n);
    let mut end = rng.random_range(0..n - 1);
    if end >= start {
        end += 1;
    }

    Ok((start, end))
}

/// Solver implementing Dijkstra's algorithm with a binary min-heap.
///
/// Improved entries are pushed again instead of decreasing keys in place;
/// stale entries are skipped when popped (lazy deletion). Valid because all
/// edge weights are strictly positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraSolver;

impl ShortestPathSolver for DijkstraSolver {
    fn distances_from(&self, graph: &Graph, start: NodeId) -> Result<DistanceTable, Error> {
        if !graph.contains_node(start) {
            return Err(Error::NodeIndexOutOfBounds(start));
        }

        let adjacency = graph.adjacency();
        let mut table = DistanceTable::new(adjacency.len(), start);
        let distance = &mut table.distances;

        let mut heap: BinaryHeap<Reverse<(Distance, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((0, start)));

        while let Some(Reverse((current_distance, u))) = heap.pop() {
            if current_distance > distance[u] {
                continue;
            }

            for edge in &adjacency[u] {
                let v = edge.target;
                let candidate = current_distance + Distance::from(edge.weight);
                if candidate < distance[v] {
                    distance[v] = candidate;
                    heap.push(Reverse((candidate, v)));
                }
            }
        }

        Ok(table)
    }
}
