use rand::Rng;

use super::graph::Graph;
use super::solver::{DistanceTable, pick_endpoints};
use common::{
    error::Error,
    types::{NodeId, PathOutcome, QueryReport},
};

/// Trait for single-source shortest-path solvers over non-negative weights.
pub trait ShortestPathSolver {
    /// Computes the best distance from `start` to every node of `graph`.
    ///
    /// Returns `Err(Error::NodeIndexOutOfBounds)` if `start` is not in the graph.
    fn distances_from(&self, graph: &Graph, start: NodeId) -> Result<DistanceTable, Error>;

    /// Distance from `start` to `end`, or `PathOutcome::Unreachable`.
    fn shortest_distance(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<PathOutcome, Error> {
        if !graph.contains_node(end) {
            return Err(Error::NodeIndexOutOfBounds(end));
        }
        self.distances_from(graph, start)?.outcome(end)
    }

    /// Picks two distinct random endpoints and reports the distance between them.
    ///
    /// Fails with `Error::InvalidArgument` on graphs with fewer than two nodes.
    fn random_query<R: Rng + ?Sized>(&self, graph: &Graph, rng: &mut R) -> Result<QueryReport, Error> {
        let (start, end) = pick_endpoints(graph, rng)?;
        let outcome = self.shortest_distance(graph, start, end)?;

        Ok(QueryReport {
            start,
            end,
            outcome,
        })
    }
}
