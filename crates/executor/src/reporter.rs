use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};

use super::error::Error;
use super::types::QueryRecord;
use common::types::{PathOutcome, QueryReport};

/// Aggregated outcome of every query in a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchSummary {
    pub queries: usize,
    pub reachable: usize,
    pub unreachable: usize,
    pub failed: usize,
    pub total_query_time: Duration,
    pub min_query_time: Option<Duration>,
    pub max_query_time: Option<Duration>,
}

impl BenchSummary {
    /// Folds one record in. Failed queries are counted but kept out of the
    /// timing figures.
    pub fn record(&mut self, record: &QueryRecord) {
        self.queries += 1;

        match record.result {
            Ok(PathOutcome::Reachable(_)) => self.reachable += 1,
            Ok(PathOutcome::Unreachable) => self.unreachable += 1,
            Err(_) => {
                self.failed += 1;
                return;
            }
        }

        self.total_query_time += record.elapsed;
        self.min_query_time = Some(
            self.min_query_time
                .map_or(record.elapsed, |m| m.min(record.elapsed)),
        );
        self.max_query_time = Some(
            self.max_query_time
                .map_or(record.elapsed, |m| m.max(record.elapsed)),
        );
    }

    pub fn completed(&self) -> usize {
        self.reachable + self.unreachable
    }

    pub fn mean_query_time(&self) -> Option<Duration> {
        match self.completed() {
            0 => None,
            n => Some(Duration::from_nanos(
                (self.total_query_time.as_nanos() / n as u128) as u64,
            )),
        }
    }
}

impl fmt::Display for BenchSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Queries: {}", self.queries)?;
        writeln!(
            f,
            "Reachable: {}  Unreachable: {}  Failed: {}",
            self.reachable, self.unreachable, self.failed
        )?;
        match (
            self.min_query_time,
            self.mean_query_time(),
            self.max_query_time,
        ) {
            (Some(min), Some(mean), Some(max)) => write!(
                f,
                "Query time min/mean/max: {:?} / {:?} / {:?}",
                min, mean, max
            ),
            _ => write!(f, "Query time min/mean/max: n/a"),
        }
    }
}

/// Async consumer that folds query records into a `BenchSummary`.
pub struct Reporter {
    receiver: Receiver<QueryRecord>,
}

impl Reporter {
    pub fn new(receiver: Receiver<QueryRecord>) -> Self {
        Self { receiver }
    }

    /// Run the reporter asynchronously.
    ///
    /// Consumes records until every sender has been dropped, i.e. all
    /// workers are done, then returns the summary.
    pub async fn collect(mut self) -> Result<BenchSummary, Error> {
        debug!("Reporter ready.");

        let mut summary = BenchSummary::default();

        while let Some(record) = self.receiver.recv().await {
            match &record.result {
                Ok(outcome) => {
                    let report = QueryReport {
                        start: record.start,
                        end: record.end,
                        outcome: *outcome,
                    };
                    debug!(worker = record.worker, elapsed = ?record.elapsed, "{}", report);
                }
                Err(e) => {
                    warn!(
                        worker = record.worker,
                        start = record.start,
                        end = record.end,
                        "Query failed: {}",
                        e
                    );
                }
            }
            summary.record(&record);
        }

        info!(queries = summary.queries, "Receiver closed, reporter finished.");
        Ok(summary)
    }

    /// Spawns the Reporter task onto the Tokio runtime.
    pub fn spawn_task(self) -> tokio::task::JoinHandle<Result<BenchSummary, Error>> {
        tokio::spawn(self.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::error::Error as SolverError;
    use tokio::sync::mpsc;

    fn record(result: Result<PathOutcome, SolverError>, millis: u64) -> QueryRecord {
        QueryRecord {
            worker: 0,
            start: 0,
            end: 1,
            result,
            elapsed: Duration::from_millis(millis),
        }
    }

    #[test]
    fn summary_counts_outcomes_and_times() {
        let mut summary = BenchSummary::default();
        summary.record(&record(Ok(PathOutcome::Reachable(4)), 10));
        summary.record(&record(Ok(PathOutcome::Unreachable), 30));
        summary.record(&record(Ok(PathOutcome::Reachable(9)), 20));
        summary.record(&record(Err(SolverError::NodeIndexOutOfBounds(5)), 1000));

        assert_eq!(summary.queries, 4);
        assert_eq!(summary.reachable, 2);
        assert_eq!(summary.unreachable, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.min_query_time, Some(Duration::from_millis(10)));
        assert_eq!(summary.max_query_time, Some(Duration::from_millis(30)));
        assert_eq!(summary.mean_query_time(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn mean_divides_by_full_completed_count() {
        // 2^32 + 2 completed queries: a 32-bit divisor would truncate to 2.
        let summary = BenchSummary {
            queries: (1usize << 32) + 2,
            reachable: (1usize << 32) + 2,
            total_query_time: Duration::from_nanos(((1u64 << 32) + 2) * 3),
            ..BenchSummary::default()
        };

        assert_eq!(summary.mean_query_time(), Some(Duration::from_nanos(3)));
    }

    #[test]
    fn mean_rounds_down_to_whole_nanoseconds() {
        let mut summary = BenchSummary::default();
        for nanos in [1, 1, 2] {
            summary.record(&QueryRecord {
                elapsed: Duration::from_nanos(nanos),
                ..record(Ok(PathOutcome::Reachable(1)), 0)
            });
        }

        assert_eq!(summary.mean_query_time(), Some(Duration::from_nanos(1)));
    }

    #[test]
    fn empty_summary_has_no_timing() {
        let summary = BenchSummary::default();

        assert_eq!(summary.mean_query_time(), None);
        assert!(summary.to_string().ends_with("n/a"));
    }

    #[tokio::test]
    async fn reporter_finishes_when_senders_drop() {
        let (tx, rx) = mpsc::channel(8);
        let handle = Reporter::new(rx).spawn_task();

        let tx2 = tx.clone();
        tx.send(record(Ok(PathOutcome::Reachable(1)), 1)).await.unwrap();
        tx2.send(record(Ok(PathOutcome::Unreachable), 2)).await.unwrap();
        drop(tx);
        drop(tx2);

        let summary = handle.await.unwrap().unwrap();
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.completed(), 2);
    }
}
