use std::fmt;

/// Index of a node inside a graph, always in `[0, node_count)`.
pub type NodeId = usize;

/// Edge weight. Always strictly positive inside a valid graph.
pub type Weight = u32;

/// Accumulated path length. Wide enough that summing `Weight`s along any
/// simple path of a realistic graph cannot overflow.
pub type Distance = u64;

/// Sentinel for "not reached yet" in a distance table.
pub const INFINITY: Distance = Distance::MAX;

/// A directed, weighted connection to `target`. The source is implied by
/// the adjacency list the edge is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(target: NodeId, weight: Weight) -> Self {
        Edge { target, weight }
    }
}

/// Type alias for an explicit edge list entry: (from, to, weight)
pub type EdgeTriple = (NodeId, NodeId, Weight);

/// Result of a single shortest-path query. `Unreachable` is a normal
/// outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOutcome {
    Reachable(Distance),
    Unreachable,
}

impl PathOutcome {
    pub fn distance(&self) -> Option<Distance> {
        match self {
            PathOutcome::Reachable(d) => Some(*d),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Reachable(_))
    }
}

/// A query together with the endpoints it was run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryReport {
    pub start: NodeId,
    pub end: NodeId,
    pub outcome: PathOutcome,
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outcome {
            PathOutcome::Reachable(d) => {
                write!(f, "Shortest path from {} to {}: {}", self.start, self.end, d)
            }
            PathOutcome::Unreachable => {
                write!(f, "No path found from {} to {}", self.start, self.end)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_display_matches_benchmark_output() {
        let found = QueryReport {
            start: 3,
            end: 9,
            outcome: PathOutcome::Reachable(42),
        };
        assert_eq!(found.to_string(), "Shortest path from 3 to 9: 42");

        let missing = QueryReport {
            start: 0,
            end: 1,
            outcome: PathOutcome::Unreachable,
        };
        assert_eq!(missing.to_string(), "No path found from 0 to 1");
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(PathOutcome::Reachable(5).distance(), Some(5));
        assert!(PathOutcome::Reachable(0).is_reachable());
        assert_eq!(PathOutcome::Unreachable.distance(), None);
        assert!(!PathOutcome::Unreachable.is_reachable());
    }
}
