use common::error::Error;
use common::types::{Edge, EdgeTriple, NodeId};

/// Directed weighted graph stored as an owned adjacency list.
///
/// - `adjacency[u]` -> outgoing edges of node `u`, in insertion order
/// - node ids are `0..node_count()`
///
/// The node count is fixed at construction and there are no mutators, so a
/// built graph can be shared read-only between any number of queries
/// (e.g. behind an `Arc`). Parallel edges are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph from a list of edges `(src, dst, weight)`.
    ///
    /// Edge order per source node follows the order of `edges`.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `num_nodes` is zero.
    /// - `Error::NodeIndexOutOfBounds` if an endpoint is `>= num_nodes`.
    /// - `Error::InvalidEdge` for self-loops and zero weights.
    pub fn from_edges(num_nodes: usize, edges: &[EdgeTriple]) -> Result<Self, Error> {
        if num_nodes == 0 {
            return Err(Error::invalid_argument("graph must have at least one node"));
        }

        let mut adjacency = vec![Vec::new(); num_nodes];

        for &(from, to, weight) in edges {
            if from >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(from));
            }
            if to >= num_nodes {
                return Err(Error::NodeIndexOutOfBounds(to));
            }
            if from == to || weight == 0 {
                return Err(Error::InvalidEdge { from, to, weight });
            }
            adjacency[from].push(Edge::new(to, weight));
        }

        Ok(Self { adjacency })
    }

    /// Wraps an adjacency list built by the generator, which upholds the
    /// edge invariants itself.
    pub(crate) fn from_adjacency(adjacency: Vec<Vec<Edge>>) -> Self {
        Self { adjacency }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Outgoing edges of `node`.
    ///
    /// # Errors
    /// Returns `Error::NodeIndexOutOfBounds` if `node` is not in the graph.
    pub fn edges(&self, node: NodeId) -> Result<&[Edge], Error> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or(Error::NodeIndexOutOfBounds(node))
    }

    /// Iterates over every edge as `(from, to, weight)`.
    pub fn iter_edges(&self) -> impl Iterator<Item = EdgeTriple> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e.target, e.weight)))
    }

    /// Slice view used by the solver's relaxation loop once indices are validated.
    pub(crate) fn adjacency(&self) -> &[Vec<Edge>] {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_edges_keeps_insertion_order_per_node() {
        let edges = vec![(2, 1, 7), (0, 2, 1), (0, 1, 4)];
        let graph = Graph::from_edges(3, &edges).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edges(0).unwrap(), &[Edge::new(2, 1), Edge::new(1, 4)]);
        assert!(graph.edges(1).unwrap().is_empty());
        assert_eq!(graph.edges(2).unwrap(), &[Edge::new(1, 7)]);
    }

    #[test]
    fn parallel_edges_are_not_deduplicated() {
        let graph = Graph::from_edges(2, &[(0, 1, 5), (0, 1, 5), (0, 1, 2)]).unwrap();
        assert_eq!(graph.edges(0).unwrap().len(), 3);
    }

    #[test]
    fn single_node_graph() {
        let graph = Graph::from_edges(1, &[]).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.contains_node(0));
        assert!(!graph.contains_node(1));
    }

    #[test]
    fn empty_graph_is_rejected() {
        let result = Graph::from_edges(0, &[]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn out_of_range_endpoint_is_rejected() {
        assert_eq!(
            Graph::from_edges(2, &[(0, 2, 1)]),
            Err(Error::NodeIndexOutOfBounds(2))
        );
        assert_eq!(
            Graph::from_edges(2, &[(5, 0, 1)]),
            Err(Error::NodeIndexOutOfBounds(5))
        );
    }

    #[test]
    fn self_loop_and_zero_weight_are_rejected() {
        assert_eq!(
            Graph::from_edges(2, &[(1, 1, 3)]),
            Err(Error::InvalidEdge {
                from: 1,
                to: 1,
                weight: 3
            })
        );
        assert_eq!(
            Graph::from_edges(2, &[(0, 1, 0)]),
            Err(Error::InvalidEdge {
                from: 0,
                to: 1,
                weight: 0
            })
        );
    }

    #[test]
    fn edges_lookup_out_of_bounds() {
        let graph = Graph::from_edges(2, &[]).unwrap();
        assert_eq!(graph.edges(2), Err(Error::NodeIndexOutOfBounds(2)));
    }

    #[test]
    fn iter_edges_round_trips_edge_list() {
        let edges = vec![(0, 1, 2), (1, 2, 3), (0, 2, 10)];
        let graph = Graph::from_edges(3, &edges).unwrap();

        let collected: Vec<EdgeTriple> = graph.iter_edges().collect();
        assert_eq!(collected, vec![(0, 1, 2), (0, 2, 10), (1, 2, 3)]);
    }
}
