use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use tokio::sync::mpsc::Sender;
use tracing::{debug, error};

use super::error::Error;
use super::types::{QueryRecord, QueryStreamer, SharedGraph, timed_query};
use common::types::NodeId;
use sssp_core::traits::ShortestPathSolver;

/// A fixed query pair: (start, end)
pub type QueryPair = (NodeId, NodeId);

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    #[serde(rename = "start")]
    pub start_node: NodeId,

    #[serde(rename = "end")]
    pub end_node: NodeId,
}

/// Reads `start,end` pairs from a CSV file with a header row.
/// Extra columns are ignored.
pub fn load_query_pairs(path: &str) -> Result<Vec<QueryPair>, Error> {
    let file = File::open(path).map_err(|e| {
        error!(path, error = %e, "Failed to read query file");
        Error::IoError(e)
    })?;

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut pairs = Vec::new();

    for result in rdr.deserialize() {
        let record: CsvRecord = result?;
        pairs.push((record.start_node, record.end_node));
    }
    Ok(pairs)
}

/// Deals `pairs` out to `workers` buckets round-robin, preserving order
/// within each bucket.
pub fn split_round_robin(pairs: Vec<QueryPair>, workers: usize) -> Vec<Vec<QueryPair>> {
    let workers = workers.max(1);
    let mut buckets: Vec<Vec<QueryPair>> = (0..workers).map(|_| Vec::new()).collect();

    for (i, pair) in pairs.into_iter().enumerate() {
        buckets[i % workers].push(pair);
    }
    buckets
}

/// Replays a fixed list of query pairs against the shared graph.
///
/// Invalid pairs (equal or out-of-range endpoints) are sent as failed
/// records; they do not stop the worker.
pub struct CsvQueryStreamer<S> {
    worker: usize,
    graph: SharedGraph,
    solver: S,
    pairs: Vec<QueryPair>,
}

impl<S> CsvQueryStreamer<S> {
    pub fn new(worker: usize, graph: SharedGraph, solver: S, pairs: Vec<QueryPair>) -> Self {
        CsvQueryStreamer {
            worker,
            graph,
            solver,
            pairs,
        }
    }
}

#[async_trait::async_trait]
impl<S> QueryStreamer for CsvQueryStreamer<S>
where
    S: ShortestPathSolver + Send + Sync + 'static,
{
    async fn run_stream(self, sender: Sender<QueryRecord>) -> Result<(), Error> {
        let CsvQueryStreamer {
            worker,
            graph,
            solver,
            pairs,
        } = self;

        debug!(worker, pairs = pairs.len(), "CsvQueryStreamer: starting replay");

        tokio::task::spawn_blocking(move || -> Result<(), Error> {
            for (start, end) in pairs {
                let record = timed_query(&solver, &graph, worker, start, end);

                if let Err(e) = sender.blocking_send(record) {
                    error!(
                        worker,
                        "CsvQueryStreamer shutting down: Reporter receiver dropped during send. Error: {}",
                        e
                    );
                    return Err(Error::ChannelSendFailed);
                }
            }
            Ok(())
        })
        .await
        .map_err(|e| Error::WorkerFailed(e.to_string()))?
    }
}
