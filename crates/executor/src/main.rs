pub mod config;
pub mod csv_streamer;
pub mod error;
pub mod logging;
pub mod producer;
pub mod random_streamer;
pub mod reporter;
pub mod rng;
pub mod types;

use std::env;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, mpsc::Sender};
use tracing::{error, info};

use csv_streamer::{CsvQueryStreamer, load_query_pairs, split_round_robin};
use error::Error;
use producer::Producer;
use random_streamer::RandomQueryStreamer;
use reporter::Reporter;
use rng::rng_for_stream;
use sssp_core::{DijkstraSolver, GraphGenerator};
use types::{DataSource, JoinHandleResult, QueryRecord, SharedGraph};

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_tracing() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let source = parse_args();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(source, config).await {
        error!("Benchmark aborted: {}", e);
        std::process::exit(1);
    }
}

/// Parse command-line arguments to determine the query source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "random".to_string());

    match source.as_str() {
        "random" => DataSource::Random,
        "csv" => match args.get(2) {
            Some(path) => DataSource::Csv(path.clone()),
            None => usage(&args[0]),
        },
        _ => usage(&args[0]),
    }
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <RANDOM|CSV> [path_to_csv]\n  - RANDOM: run random start/end queries\n  - CSV: replay start,end pairs from a CSV file",
        program
    );
    std::process::exit(1);
}

async fn run(source: DataSource, config: config::Config) -> Result<(), Error> {
    let base_seed = config.rng.policy.base_seed(config.rng.seed);
    info!(policy = ?config.rng.policy, seed = ?base_seed, "Seeding random streams.");

    let generator = GraphGenerator::new(
        config.graph.node_count,
        config.graph.edges_per_node,
        config.graph.max_weight,
    )?;

    let build_start = Instant::now();
    let graph: SharedGraph = Arc::new(generator.generate(&mut rng_for_stream(base_seed, 0)));
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        elapsed = ?build_start.elapsed(),
        "Graph built."
    );

    let (sender, receiver) = mpsc::channel::<QueryRecord>(config.benchmark.channel_capacity);
    let reporter_handle = Reporter::new(receiver).spawn_task();

    let wall_start = Instant::now();
    // `sender` is consumed here, so the reporter ends once every worker is done.
    let producer_handles = spawn_producers(&source, graph.clone(), sender, &config, base_seed)?;

    let mut first_error = None;
    for (worker, handle) in producer_handles.into_iter().enumerate() {
        let result = handle
            .await
            .map_err(|e| Error::WorkerFailed(e.to_string()))
            .and_then(|r| r);
        if let Err(e) = result {
            error!(worker, "Worker failed: {}", e);
            first_error.get_or_insert(e);
        }
    }

    let summary = reporter_handle
        .await
        .map_err(|e| Error::WorkerFailed(e.to_string()))??;
    let wall_time = wall_start.elapsed();

    if let Some(e) = first_error {
        return Err(e);
    }

    println!(
        "--- Shortest Path Benchmark ({} nodes, {} edges, {} workers) ---",
        graph.node_count(),
        graph.edge_count(),
        config.benchmark.workers
    );
    println!("{}", summary);
    println!("Wall time: {:?}", wall_time);

    Ok(())
}

/// Spawns one producer per worker, each with its own clone of `sender`.
pub fn spawn_producers(
    source: &DataSource,
    graph: SharedGraph,
    sender: Sender<QueryRecord>,
    config: &config::Config,
    base_seed: Option<u64>,
) -> Result<Vec<JoinHandleResult>, Error> {
    let workers = config.benchmark.workers;

    let handles = match source {
        DataSource::Random => {
            info!(workers, iterations = config.benchmark.iterations, "Starting random query workers...");
            (0..workers)
                .map(|worker| {
                    let streamer = RandomQueryStreamer {
                        worker,
                        graph: graph.clone(),
                        solver: DijkstraSolver,
                        iterations: config.benchmark.iterations,
                        rng: rng_for_stream(base_seed, 1 + worker as u64),
                    };
                    Producer::new(streamer).spawn(sender.clone())
                })
                .collect()
        }
        DataSource::Csv(path) => {
            let pairs = load_query_pairs(path)?;
            info!(workers, pairs = pairs.len(), path = %path, "Starting CSV replay workers...");
            split_round_robin(pairs, workers)
                .into_iter()
                .enumerate()
                .map(|(worker, bucket)| {
                    let streamer = CsvQueryStreamer::new(worker, graph.clone(), DijkstraSolver, bucket);
                    Producer::new(streamer).spawn(sender.clone())
                })
                .collect()
        }
    };

    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenchmarkConfig, Config, GraphConfig, RngConfig};
    use crate::rng::SeedPolicy;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use tokio::time::timeout;

    const WORKERS: usize = 3;
    const SEED: u64 = 7;

    fn test_config(iterations: usize) -> Config {
        Config {
            graph: GraphConfig {
                node_count: 50,
                edges_per_node: 4,
                max_weight: 20,
            },
            benchmark: BenchmarkConfig {
                iterations,
                workers: WORKERS,
                channel_capacity: 4,
            },
            rng: RngConfig {
                policy: SeedPolicy::Fixed,
                seed: SEED,
            },
        }
    }

    fn test_graph(config: &Config) -> SharedGraph {
        let generator = GraphGenerator::new(
            config.graph.node_count,
            config.graph.edges_per_node,
            config.graph.max_weight,
        )
        .unwrap();
        Arc::new(generator.generate(&mut rng_for_stream(Some(SEED), 0)))
    }

    async fn join_all(handles: Vec<JoinHandleResult>) {
        for handle in handles {
            handle
                .await
                .expect("worker task panicked")
                .expect("worker returned an error");
        }
    }

    #[tokio::test]
    async fn random_workers_report_every_iteration() {
        let iterations = 7;
        let config = test_config(iterations);
        let graph = test_graph(&config);

        let (sender, receiver) = mpsc::channel(config.benchmark.channel_capacity);
        let reporter_handle = Reporter::new(receiver).spawn_task();

        let handles =
            spawn_producers(&DataSource::Random, graph, sender, &config, Some(SEED)).unwrap();
        assert_eq!(handles.len(), WORKERS);
        join_all(handles).await;

        let summary = timeout(Duration::from_secs(10), reporter_handle)
            .await
            .expect("reporter did not finish after all workers returned")
            .unwrap()
            .unwrap();

        assert_eq!(summary.queries, WORKERS * iterations);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.completed(), WORKERS * iterations);
    }

    #[tokio::test]
    async fn csv_pairs_are_spread_across_workers() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"start,end\n0,1\n1,2\n2,3\n3,4\n4,5\n")
            .expect("Failed to write mock content");
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = test_config(1);
        let graph = test_graph(&config);

        let (sender, mut receiver) = mpsc::channel::<QueryRecord>(config.benchmark.channel_capacity);
        let collector = tokio::spawn(async move {
            let mut records = Vec::new();
            while let Some(record) = receiver.recv().await {
                records.push(record);
            }
            records
        });

        let handles =
            spawn_producers(&DataSource::Csv(path), graph, sender, &config, Some(SEED)).unwrap();
        assert_eq!(handles.len(), WORKERS);
        join_all(handles).await;

        let records = timeout(Duration::from_secs(10), collector)
            .await
            .expect("collector did not finish after all workers returned")
            .unwrap();

        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.result.is_ok()));

        let mut per_worker = [0usize; WORKERS];
        for record in &records {
            per_worker[record.worker] += 1;
        }
        assert_eq!(per_worker, [2, 2, 1]);
    }

    #[tokio::test]
    async fn missing_csv_fails_before_spawning() {
        let config = test_config(1);
        let graph = test_graph(&config);
        let (sender, _receiver) = mpsc::channel(config.benchmark.channel_capacity);

        let result = spawn_producers(
            &DataSource::Csv("non_existent_file.csv".to_string()),
            graph,
            sender,
            &config,
            Some(SEED),
        );

        assert!(matches!(result, Err(Error::IoError(_))));
    }
}
