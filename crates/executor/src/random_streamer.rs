use async_trait::async_trait;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::Sender;
use tracing::debug;

use super::error::Error;
use super::types::{QueryRecord, QueryStreamer, SharedGraph, timed_query};
use sssp_core::pick_endpoints;
use sssp_core::traits::ShortestPathSolver;

/// Runs `iterations` queries between random endpoint pairs on the shared graph.
///
/// Each worker owns its random stream, so workers never contend on the
/// generator and the graph is only read.
pub struct RandomQueryStreamer<S> {
    pub worker: usize,
    pub graph: SharedGraph,
    pub solver: S,
    pub iterations: usize,
    pub rng: SmallRng,
}

#[async_trait]
impl<S> QueryStreamer for RandomQueryStreamer<S>
where
    S: ShortestPathSolver + Send + Sync + 'static,
{
    /// Runs the query loop on the blocking pool.
    ///
    /// Endpoint selection is checked before the first query, so a graph with
    /// fewer than two nodes fails the worker up front. Exits early if the
    /// receiver is dropped.
    async fn run_stream(self, sender: Sender<QueryRecord>) -> Result<(), Error> {
        let RandomQueryStreamer {
            worker,
            graph,
            solver,
            iterations,
            mut rng,
        } = self;

        tokio::task::spawn_blocking(move || -> Result<(), Error> {
            for _ in 0..iterations {
                let (start, end) = pick_endpoints(&graph, &mut rng)?;
                let record = timed_query(&solver, &graph, worker, start, end);

                if sender.blocking_send(record).is_err() {
                    debug!(worker, "Reporter dropped, random worker stopping.");
                    return Err(Error::ChannelSendFailed);
                }
            }

            debug!(worker, iterations, "Random worker finished.");
            Ok(())
        })
        .await
        .map_err(|e| Error::WorkerFailed(e.to_string()))?
    }
}
