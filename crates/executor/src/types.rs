use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use super::error::Error;
use common::error::Error as SolverError;
use common::types::{NodeId, PathOutcome};
use sssp_core::Graph;
use sssp_core::traits::ShortestPathSolver;

/// The benchmark graph, built once and only ever read afterwards.
pub type SharedGraph = Arc<Graph>;

pub type JoinHandleResult = JoinHandle<Result<(), Error>>;

#[derive(Debug, Clone)]
pub enum DataSource {
    Random,
    Csv(String),
}

/// A trait defining the contract for any workload that runs shortest-path
/// queries and streams one record per query to the reporter.
///
/// The trait bounds (`Send`, `Sync`, `'static`) are mandatory to ensure the
/// implementation can be safely executed by the multi-threaded asynchronous runtime (Tokio).
#[async_trait::async_trait]
pub trait QueryStreamer: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<QueryRecord>) -> Result<(), Error>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryRecord {
    pub worker: usize,
    pub start: NodeId,
    pub end: NodeId,
    pub result: Result<PathOutcome, SolverError>,
    pub elapsed: Duration,
}

/// Runs and times a single query. `start == end` is rejected like any
/// other invalid pair; the failure is recorded rather than returned.
pub fn timed_query<S: ShortestPathSolver>(
    solver: &S,
    graph: &Graph,
    worker: usize,
    start: NodeId,
    end: NodeId,
) -> QueryRecord {
    let start_time = Instant::now();

    let result = if start == end {
        Err(SolverError::invalid_argument(format!(
            "start and end must differ, both are {}",
            start
        )))
    } else {
        solver.shortest_distance(graph, start, end)
    };

    QueryRecord {
        worker,
        start,
        end,
        result,
        elapsed: start_time.elapsed(),
    }
}
