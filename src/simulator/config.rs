//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum card picks per run before timeout
    pub max_draws_per_run: u64,

    /// Prestige level to reach before the final cycle
    pub target_prestige: u32,

    /// Flushes to complete in the final cycle
    pub target_wins: u32,

    /// Whether the auto-player spends money in the shop
    pub buy_upgrades: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_draws_per_run: 200_000,
            target_prestige: 1,
            target_wins: 5,
            buy_upgrades: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-game pacing
    pub fn first_prestige_test() -> Self {
        Self {
            num_runs: 20,
            target_prestige: 0,
            target_wins: 5,
            ..Default::default()
        }
    }

    /// Longer config for prestige pacing
    pub fn prestige_cycle_test(target_prestige: u32) -> Self {
        Self {
            num_runs: 20,
            target_prestige,
            max_draws_per_run: 1_000_000,
            ..Default::default()
        }
    }
}
