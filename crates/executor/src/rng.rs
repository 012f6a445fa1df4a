use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// How the run's random streams are seeded.
///
/// - `Fixed`: the configured seed; runs are reproducible.
/// - `Entropy`: fresh OS randomness for every stream.
/// - `Clock`: wall-clock seconds, so two runs started within the same
///   second draw the same graph and queries.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    Fixed,
    Entropy,
    Clock,
}

impl SeedPolicy {
    /// Resolves the base seed once per run. `None` means every stream is
    /// seeded from the OS instead.
    pub fn base_seed(&self, configured_seed: u64) -> Option<u64> {
        match self {
            SeedPolicy::Fixed => Some(configured_seed),
            SeedPolicy::Entropy => None,
            SeedPolicy::Clock => Some(
                SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or(0),
            ),
        }
    }
}

/// Stream 0 generates the graph, stream `1 + i` drives worker `i`.
///
/// Stream seeds are drawn in order from a generator seeded with `base_seed`,
/// so adjacent base seeds do not produce shifted copies of each other's streams.
pub fn rng_for_stream(base_seed: Option<u64>, stream: u64) -> SmallRng {
    let Some(seed) = base_seed else {
        return SmallRng::from_os_rng();
    };

    let mut base = SmallRng::seed_from_u64(seed);
    let mut derived = SmallRng::from_rng(&mut base);
    for _ in 0..stream {
        derived = SmallRng::from_rng(&mut base);
    }
    derived
}
