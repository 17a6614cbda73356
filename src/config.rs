//! Engine configuration.

/// Worker count used when nothing else is configured.
pub const DEFAULT_WORKERS: usize = 8;
/// Boards between two progress messages of an exhaustive worker.
pub const DEFAULT_PROGRESS_EVERY: u64 = 50_000;
/// Environment variable overriding the worker count.
pub const WORKERS_ENV: &str = "HOLDEM_WORKERS";

/// Tunables of an [`crate::EquityEngine`].
///
/// The worker count is a fixed pool size, never derived from the input.
/// With a seed every worker draws from its own reproducible stream, so a
/// seeded run gives identical counts with or without the `parallel` feature.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    pub workers: usize,
    pub seed: Option<u64>,
    pub track_categories: bool,
    pub progress_every: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            seed: None,
            track_categories: true,
            progress_every: DEFAULT_PROGRESS_EVERY,
        }
    }
}

impl EngineConfig {
    /// Defaults, with the worker count taken from `HOLDEM_WORKERS` if set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(WORKERS_ENV) {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(n) => config.with_workers(n),
                Err(_) => {
                    log::warn!("ignoring {}={:?}: not a worker count", WORKERS_ENV, raw);
                    config
                }
            },
            Err(_) => config,
        }
    }

    /// Pool size, clamped to at least one worker.
    pub fn with_workers(mut self, workers: usize) -> Self {
        if workers == 0 {
            log::warn!("worker count 0 clamped to 1");
        }
        self.workers = workers.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_categories(mut self, track: bool) -> Self {
        self.track_categories = track;
        self
    }

    pub fn with_progress_every(mut self, boards: u64) -> Self {
        self.progress_every = boards.max(1);
        self
    }

    /// Seed of worker `worker`, if the run is seeded.
    pub(crate) fn worker_seed(&self, worker: usize) -> Option<u64> {
        self.seed.map(|s| splitmix64(s ^ (worker as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)))
    }
}

/// SplitMix64 finalizer, spreads nearby seeds apart.
#[inline(always)]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_clamps_workers() {
        let c = EngineConfig::default().with_workers(0).with_seed(3).with_progress_every(0);
        assert_eq!(c.workers, 1);
        assert_eq!(c.seed, Some(3));
        assert_eq!(c.progress_every, 1);
    }

    #[test]
    fn worker_seeds_differ_and_repeat() {
        let c = EngineConfig::default().with_seed(42);
        assert_ne!(c.worker_seed(0), c.worker_seed(1));
        assert_eq!(c.worker_seed(5), EngineConfig::default().with_seed(42).worker_seed(5));
        assert_eq!(EngineConfig::default().worker_seed(0), None);
    }
}
