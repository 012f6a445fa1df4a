use config::{Config as ConfigLoader, Environment, File, Map};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::rng::SeedPolicy;
use common::types::Weight;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "EXECUTOR_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GraphConfig {
    pub node_count: usize,
    pub edges_per_node: usize,
    pub max_weight: Weight,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub iterations: usize,
    pub workers: usize,
    pub channel_capacity: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RngConfig {
    pub policy: SeedPolicy,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub graph: GraphConfig,
    pub benchmark: BenchmarkConfig,
    pub rng: RngConfig,
}

impl Config {
    /// Rejects values the harness cannot run with. Graph parameters are
    /// checked by the generator itself.
    pub fn validate(&self) -> Result<(), Error> {
        if self.benchmark.iterations == 0 {
            return Err(Error::ConfigLoadError(
                "benchmark.iterations must be positive".to_string(),
            ));
        }
        if self.benchmark.workers == 0 {
            return Err(Error::ConfigLoadError(
                "benchmark.workers must be positive".to_string(),
            ));
        }
        if self.benchmark.channel_capacity == 0 {
            return Err(Error::ConfigLoadError(
                "benchmark.channel_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Config file location: `$EXECUTOR_CONFIG` if set, otherwise
/// `crates/executor/Config.toml` under the current directory.
pub fn config_path() -> Result<PathBuf, Error> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

/// Loads configuration from a file and environment variables.
pub fn load_config() -> Result<Config, Error> {
    load_config_from(&config_path()?, None)
}

/// Loads `config_file_path`, layering `EXECUTOR_*` overrides on top.
///
/// `env_source` replaces the process environment when given, so overrides
/// can be exercised without touching global state.
pub fn load_config_from(
    config_file_path: &Path,
    env_source: Option<Map<String, String>>,
) -> Result<Config, Error> {
    if !config_file_path.exists() {
        return Err(Error::ConfigLoadError(format!(
            "Configuration file not found at calculated path: {}",
            config_file_path.display()
        )));
    }

    let s = ConfigLoader::builder()
        .add_source(File::from(config_file_path).required(true))
        .add_source(
            Environment::with_prefix("EXECUTOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env_source),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;

    Ok(app_config)
}
